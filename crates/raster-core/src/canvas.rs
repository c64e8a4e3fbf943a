//! RGB drawing surface

use crate::builtin;
use crate::font::{FontFace, FormFont};
use ab_glyph::{point, Font, FontVec, GlyphId, ScaleFont};
use image::{Rgb, RgbImage};

/// A fixed-size RGB canvas
pub struct Canvas {
    image: RgbImage,
}

impl Canvas {
    /// Create a canvas filled with a background color
    pub fn new(width: u32, height: u32, background: Rgb<u8>) -> Self {
        Self {
            image: RgbImage::from_pixel(width, height, background),
        }
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    pub fn image(&self) -> &RgbImage {
        &self.image
    }

    pub fn into_image(self) -> RgbImage {
        self.image
    }

    /// Draw text with the top-left of the first line at (x, y)
    ///
    /// `\n` starts a new line, advanced by the font's line height.
    pub fn draw_text(&mut self, x: i32, y: i32, text: &str, font: &FormFont, color: Rgb<u8>) {
        let line_height = font.line_height();

        for (i, line) in text.split('\n').enumerate() {
            let top = y as f32 + i as f32 * line_height;
            match font.face() {
                FontFace::TrueType(face) => {
                    self.draw_truetype_line(x as f32, top, line, face, font.size(), color)
                }
                FontFace::Builtin => {
                    builtin::draw_line(&mut self.image, x, top.round() as i32, line, font.size(), color)
                }
            }
        }
    }

    fn draw_truetype_line(
        &mut self,
        x: f32,
        top: f32,
        line: &str,
        face: &FontVec,
        size: f32,
        color: Rgb<u8>,
    ) {
        let scaled = face.as_scaled(FormFont::px_scale(face, size));
        let baseline = top + scaled.ascent();
        let (width, height) = self.image.dimensions();
        let image = &mut self.image;

        let mut caret = x;
        let mut previous: Option<GlyphId> = None;

        for c in line.chars() {
            let id = scaled.glyph_id(c);
            if let Some(prev) = previous {
                caret += scaled.kern(prev, id);
            }
            let glyph = id.with_scale_and_position(scaled.scale(), point(caret, baseline));
            caret += scaled.h_advance(id);
            previous = Some(id);

            if let Some(outlined) = face.outline_glyph(glyph) {
                let bounds = outlined.px_bounds();
                outlined.draw(|gx, gy, coverage| {
                    let px = bounds.min.x as i32 + gx as i32;
                    let py = bounds.min.y as i32 + gy as i32;
                    if px >= 0 && py >= 0 && (px as u32) < width && (py as u32) < height {
                        blend(image.get_pixel_mut(px as u32, py as u32), color, coverage);
                    }
                });
            }
        }
    }

    /// Outline a rectangle given inclusive corners; the stroke grows inward
    pub fn draw_rectangle(&mut self, from: (i32, i32), to: (i32, i32), color: Rgb<u8>, width: i32) {
        let (x0, y0) = from;
        let (x1, y1) = to;

        for y in y0..=y1 {
            for x in x0..=x1 {
                let on_border =
                    x < x0 + width || x > x1 - width || y < y0 + width || y > y1 - width;
                if on_border {
                    self.put_pixel_checked(x, y, color);
                }
            }
        }
    }

    /// Outline the ellipse inscribed in a bounding box; the stroke grows inward
    pub fn draw_ellipse(&mut self, from: (i32, i32), to: (i32, i32), color: Rgb<u8>, width: i32) {
        let (x0, y0) = from;
        let (x1, y1) = to;

        let cx = (x0 + x1 + 1) as f32 / 2.0;
        let cy = (y0 + y1 + 1) as f32 / 2.0;
        let rx = (x1 - x0 + 1) as f32 / 2.0;
        let ry = (y1 - y0 + 1) as f32 / 2.0;
        let inner_rx = rx - width as f32;
        let inner_ry = ry - width as f32;

        for y in y0..=y1 {
            for x in x0..=x1 {
                let dx = x as f32 + 0.5 - cx;
                let dy = y as f32 + 0.5 - cy;

                let outside_outer = (dx / rx).powi(2) + (dy / ry).powi(2) > 1.0;
                if outside_outer {
                    continue;
                }
                let inside_inner = inner_rx > 0.0
                    && inner_ry > 0.0
                    && (dx / inner_rx).powi(2) + (dy / inner_ry).powi(2) < 1.0;
                if !inside_inner {
                    self.put_pixel_checked(x, y, color);
                }
            }
        }
    }

    fn put_pixel_checked(&mut self, x: i32, y: i32, color: Rgb<u8>) {
        if x >= 0 && y >= 0 && (x as u32) < self.image.width() && (y as u32) < self.image.height() {
            self.image.put_pixel(x as u32, y as u32, color);
        }
    }
}

/// Alpha-blend a color onto a pixel by glyph coverage
fn blend(pixel: &mut Rgb<u8>, color: Rgb<u8>, coverage: f32) {
    let alpha = coverage.clamp(0.0, 1.0);
    for (dst, src) in pixel.0.iter_mut().zip(color.0) {
        *dst = (*dst as f32 * (1.0 - alpha) + src as f32 * alpha).round() as u8;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WHITE: Rgb<u8> = Rgb([255, 255, 255]);
    const BLACK: Rgb<u8> = Rgb([0, 0, 0]);

    fn count(canvas: &Canvas, color: Rgb<u8>) -> usize {
        canvas.image().pixels().filter(|p| **p == color).count()
    }

    #[test]
    fn test_new_canvas() {
        let canvas = Canvas::new(100, 140, Rgb([255, 255, 250]));
        assert_eq!(canvas.width(), 100);
        assert_eq!(canvas.height(), 140);
        assert_eq!(*canvas.image().get_pixel(50, 70), Rgb([255, 255, 250]));
    }

    #[test]
    fn test_builtin_text_draws_pixels() {
        let mut canvas = Canvas::new(200, 100, WHITE);
        canvas.draw_text(10, 10, "PHOTO", &FormFont::builtin(20.0), BLACK);
        assert!(count(&canvas, BLACK) > 0);
    }

    #[test]
    fn test_multiline_text_uses_line_height() {
        let font = FormFont::builtin(8.0);
        let mut canvas = Canvas::new(60, 40, WHITE);
        canvas.draw_text(0, 0, "|\n|", &font, BLACK);

        // Second line starts one line height (8 + 4) below the first
        assert_eq!(*canvas.image().get_pixel(2, 0), BLACK);
        assert_eq!(*canvas.image().get_pixel(2, 12), BLACK);
        assert_eq!(*canvas.image().get_pixel(2, 9), WHITE);
    }

    #[test]
    fn test_rectangle_outline() {
        let mut canvas = Canvas::new(20, 20, WHITE);
        canvas.draw_rectangle((2, 2), (17, 17), BLACK, 3);

        assert_eq!(*canvas.image().get_pixel(2, 2), BLACK);
        assert_eq!(*canvas.image().get_pixel(4, 10), BLACK);
        assert_eq!(*canvas.image().get_pixel(5, 10), WHITE);
        assert_eq!(*canvas.image().get_pixel(10, 10), WHITE);
        assert_eq!(*canvas.image().get_pixel(1, 1), WHITE);
    }

    #[test]
    fn test_ellipse_is_a_ring() {
        let red = Rgb([255, 0, 0]);
        let mut canvas = Canvas::new(60, 50, WHITE);
        canvas.draw_ellipse((5, 5), (54, 44), red, 5);

        // Center stays empty, corners of the box stay empty
        assert_eq!(*canvas.image().get_pixel(30, 25), WHITE);
        assert_eq!(*canvas.image().get_pixel(5, 5), WHITE);
        // Leftmost point of the ring is stroked
        assert_eq!(*canvas.image().get_pixel(6, 25), red);
        assert!(count(&canvas, red) > 0);
    }

    #[test]
    fn test_shapes_are_clipped() {
        let mut canvas = Canvas::new(10, 10, WHITE);
        canvas.draw_rectangle((-5, -5), (20, 20), BLACK, 2);
        canvas.draw_ellipse((-10, -10), (30, 30), BLACK, 2);
    }

    #[test]
    fn test_blend() {
        let mut pixel = WHITE;
        blend(&mut pixel, BLACK, 0.5);
        assert_eq!(pixel, Rgb([128, 128, 128]));

        let mut pixel = WHITE;
        blend(&mut pixel, BLACK, 1.5);
        assert_eq!(pixel, BLACK);
    }
}
