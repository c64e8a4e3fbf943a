//! Built-in 5x7 bitmap face
//!
//! Last tier of the font fallback. Glyphs are stored column-major, one byte
//! per column, bit 0 is the top row. Characters outside printable ASCII are
//! drawn as `?`.

use image::{Rgb, RgbImage};

/// Glyph cell: 5 columns plus 1 column of spacing
const CELL_WIDTH: i32 = 6;
/// Rows per glyph
const GLYPH_ROWS: i32 = 7;
/// Rows per line including descender space
pub(crate) const CELL_HEIGHT: i32 = 8;

/// Glyphs for ' ' (0x20) through '~' (0x7E)
const GLYPHS: [[u8; 5]; 95] = [
    [0x00, 0x00, 0x00, 0x00, 0x00], // ' '
    [0x00, 0x00, 0x5F, 0x00, 0x00], // !
    [0x00, 0x07, 0x00, 0x07, 0x00], // "
    [0x14, 0x7F, 0x14, 0x7F, 0x14], // #
    [0x24, 0x2A, 0x7F, 0x2A, 0x12], // $
    [0x23, 0x13, 0x08, 0x64, 0x62], // %
    [0x36, 0x49, 0x55, 0x22, 0x50], // &
    [0x00, 0x05, 0x03, 0x00, 0x00], // '
    [0x00, 0x1C, 0x22, 0x41, 0x00], // (
    [0x00, 0x41, 0x22, 0x1C, 0x00], // )
    [0x14, 0x08, 0x3E, 0x08, 0x14], // *
    [0x08, 0x08, 0x3E, 0x08, 0x08], // +
    [0x00, 0x50, 0x30, 0x00, 0x00], // ,
    [0x08, 0x08, 0x08, 0x08, 0x08], // -
    [0x00, 0x60, 0x60, 0x00, 0x00], // .
    [0x20, 0x10, 0x08, 0x04, 0x02], // /
    [0x3E, 0x51, 0x49, 0x45, 0x3E], // 0
    [0x00, 0x42, 0x7F, 0x40, 0x00], // 1
    [0x42, 0x61, 0x51, 0x49, 0x46], // 2
    [0x21, 0x41, 0x45, 0x4B, 0x31], // 3
    [0x18, 0x14, 0x12, 0x7F, 0x10], // 4
    [0x27, 0x45, 0x45, 0x45, 0x39], // 5
    [0x3C, 0x4A, 0x49, 0x49, 0x30], // 6
    [0x01, 0x71, 0x09, 0x05, 0x03], // 7
    [0x36, 0x49, 0x49, 0x49, 0x36], // 8
    [0x06, 0x49, 0x49, 0x29, 0x1E], // 9
    [0x00, 0x36, 0x36, 0x00, 0x00], // :
    [0x00, 0x56, 0x36, 0x00, 0x00], // ;
    [0x08, 0x14, 0x22, 0x41, 0x00], // <
    [0x14, 0x14, 0x14, 0x14, 0x14], // =
    [0x00, 0x41, 0x22, 0x14, 0x08], // >
    [0x02, 0x01, 0x51, 0x09, 0x06], // ?
    [0x32, 0x49, 0x79, 0x41, 0x3E], // @
    [0x7E, 0x11, 0x11, 0x11, 0x7E], // A
    [0x7F, 0x49, 0x49, 0x49, 0x36], // B
    [0x3E, 0x41, 0x41, 0x41, 0x22], // C
    [0x7F, 0x41, 0x41, 0x22, 0x1C], // D
    [0x7F, 0x49, 0x49, 0x49, 0x41], // E
    [0x7F, 0x09, 0x09, 0x09, 0x01], // F
    [0x3E, 0x41, 0x49, 0x49, 0x7A], // G
    [0x7F, 0x08, 0x08, 0x08, 0x7F], // H
    [0x00, 0x41, 0x7F, 0x41, 0x00], // I
    [0x20, 0x40, 0x41, 0x3F, 0x01], // J
    [0x7F, 0x08, 0x14, 0x22, 0x41], // K
    [0x7F, 0x40, 0x40, 0x40, 0x40], // L
    [0x7F, 0x02, 0x0C, 0x02, 0x7F], // M
    [0x7F, 0x04, 0x08, 0x10, 0x7F], // N
    [0x3E, 0x41, 0x41, 0x41, 0x3E], // O
    [0x7F, 0x09, 0x09, 0x09, 0x06], // P
    [0x3E, 0x41, 0x51, 0x21, 0x5E], // Q
    [0x7F, 0x09, 0x19, 0x29, 0x46], // R
    [0x46, 0x49, 0x49, 0x49, 0x31], // S
    [0x01, 0x01, 0x7F, 0x01, 0x01], // T
    [0x3F, 0x40, 0x40, 0x40, 0x3F], // U
    [0x1F, 0x20, 0x40, 0x20, 0x1F], // V
    [0x3F, 0x40, 0x38, 0x40, 0x3F], // W
    [0x63, 0x14, 0x08, 0x14, 0x63], // X
    [0x07, 0x08, 0x70, 0x08, 0x07], // Y
    [0x61, 0x51, 0x49, 0x45, 0x43], // Z
    [0x00, 0x7F, 0x41, 0x41, 0x00], // [
    [0x02, 0x04, 0x08, 0x10, 0x20], // backslash
    [0x00, 0x41, 0x41, 0x7F, 0x00], // ]
    [0x04, 0x02, 0x01, 0x02, 0x04], // ^
    [0x40, 0x40, 0x40, 0x40, 0x40], // _
    [0x00, 0x01, 0x02, 0x04, 0x00], // `
    [0x20, 0x54, 0x54, 0x54, 0x78], // a
    [0x7F, 0x48, 0x44, 0x44, 0x38], // b
    [0x38, 0x44, 0x44, 0x44, 0x20], // c
    [0x38, 0x44, 0x44, 0x48, 0x7F], // d
    [0x38, 0x54, 0x54, 0x54, 0x18], // e
    [0x08, 0x7E, 0x09, 0x01, 0x02], // f
    [0x0C, 0x52, 0x52, 0x52, 0x3E], // g
    [0x7F, 0x08, 0x04, 0x04, 0x78], // h
    [0x00, 0x44, 0x7D, 0x40, 0x00], // i
    [0x20, 0x40, 0x44, 0x3D, 0x00], // j
    [0x7F, 0x10, 0x28, 0x44, 0x00], // k
    [0x00, 0x41, 0x7F, 0x40, 0x00], // l
    [0x7C, 0x04, 0x18, 0x04, 0x78], // m
    [0x7C, 0x08, 0x04, 0x04, 0x78], // n
    [0x38, 0x44, 0x44, 0x44, 0x38], // o
    [0x7C, 0x14, 0x14, 0x14, 0x08], // p
    [0x08, 0x14, 0x14, 0x18, 0x7C], // q
    [0x7C, 0x08, 0x04, 0x04, 0x08], // r
    [0x48, 0x54, 0x54, 0x54, 0x20], // s
    [0x04, 0x3F, 0x44, 0x40, 0x20], // t
    [0x3C, 0x40, 0x40, 0x20, 0x7C], // u
    [0x1C, 0x20, 0x40, 0x20, 0x1C], // v
    [0x3C, 0x40, 0x30, 0x40, 0x3C], // w
    [0x44, 0x28, 0x10, 0x28, 0x44], // x
    [0x0C, 0x50, 0x50, 0x50, 0x3C], // y
    [0x44, 0x64, 0x54, 0x4C, 0x44], // z
    [0x00, 0x08, 0x36, 0x41, 0x00], // {
    [0x00, 0x00, 0x7F, 0x00, 0x00], // |
    [0x00, 0x41, 0x36, 0x08, 0x00], // }
    [0x08, 0x04, 0x08, 0x10, 0x08], // ~
];

/// Column bitmap for a character
pub(crate) fn glyph(c: char) -> [u8; 5] {
    let index = match c {
        ' '..='~' => c as usize - ' ' as usize,
        _ => '?' as usize - ' ' as usize,
    };
    GLYPHS[index]
}

/// Integer magnification that approximates a pixel size
pub(crate) fn scale_for(size: f32) -> i32 {
    ((size / CELL_HEIGHT as f32).round() as i32).max(1)
}

/// Draw one line of text with its top-left corner at (x, top)
pub(crate) fn draw_line(image: &mut RgbImage, x: i32, top: i32, text: &str, size: f32, color: Rgb<u8>) {
    let scale = scale_for(size);

    for (i, c) in text.chars().enumerate() {
        let origin_x = x + i as i32 * CELL_WIDTH * scale;
        for (column, bits) in glyph(c).iter().enumerate() {
            for row in 0..GLYPH_ROWS {
                if (bits >> row) & 1 == 1 {
                    fill_block(
                        image,
                        origin_x + column as i32 * scale,
                        top + row * scale,
                        scale,
                        color,
                    );
                }
            }
        }
    }
}

/// Fill a square block, clipped to the image
fn fill_block(image: &mut RgbImage, x: i32, y: i32, size: i32, color: Rgb<u8>) {
    let (width, height) = image.dimensions();
    for py in y.max(0)..(y + size).min(height as i32) {
        for px in x.max(0)..(x + size).min(width as i32) {
            image.put_pixel(px as u32, py as u32, color);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_glyph_lookup() {
        assert_eq!(glyph(' '), [0; 5]);
        assert_eq!(glyph('A'), [0x7E, 0x11, 0x11, 0x11, 0x7E]);
        // Unsupported characters render as '?'
        assert_eq!(glyph('é'), glyph('?'));
    }

    #[test]
    fn test_scale_for() {
        assert_eq!(scale_for(1.0), 1);
        assert_eq!(scale_for(20.0), 3);
        assert_eq!(scale_for(24.0), 3);
        assert_eq!(scale_for(36.0), 5);
    }

    #[test]
    fn test_draw_line_is_clipped() {
        let mut image = RgbImage::from_pixel(10, 10, Rgb([255, 255, 255]));
        // Partially outside on every side; must not panic
        draw_line(&mut image, -4, -4, "WWWW", 16.0, Rgb([0, 0, 0]));
        assert!(image.pixels().any(|p| *p == Rgb([0, 0, 0])));
    }

    #[test]
    fn test_draw_line_pixels() {
        let mut image = RgbImage::from_pixel(12, 8, Rgb([255, 255, 255]));
        draw_line(&mut image, 0, 0, "|", 8.0, Rgb([0, 0, 0]));
        // '|' is a single full-height column in the middle
        for row in 0..7 {
            assert_eq!(*image.get_pixel(2, row), Rgb([0, 0, 0]));
            assert_eq!(*image.get_pixel(1, row), Rgb([255, 255, 255]));
        }
    }
}
