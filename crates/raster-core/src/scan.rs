//! Scan artifacts and JPEG output

use crate::Result;
use image::{imageops, ImageFormat, Rgb, RgbImage};
use log::debug;
use std::path::Path;

/// Rotation and blur applied to make a clean render look scanned
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScanEffect {
    /// Counter-clockwise rotation in degrees
    pub rotation_degrees: f32,
    /// Gaussian blur sigma in pixels
    pub blur_sigma: f32,
    /// Fill for the corners uncovered by rotation
    pub fill: Rgb<u8>,
}

impl ScanEffect {
    /// Rotation and blur with a white fill
    pub fn new(rotation_degrees: f32, blur_sigma: f32) -> Self {
        Self {
            rotation_degrees,
            blur_sigma,
            fill: Rgb([255, 255, 255]),
        }
    }

    /// Rotate (expanding the canvas), then blur
    pub fn apply(&self, image: &RgbImage) -> RgbImage {
        let rotated = rotate_expand(image, self.rotation_degrees, self.fill);
        if self.blur_sigma > 0.0 {
            imageops::blur(&rotated, self.blur_sigma)
        } else {
            rotated
        }
    }
}

/// Rotate counter-clockwise about the center, growing the canvas to fit
///
/// Uses bicubic sampling; pixels with no source are set to `fill`.
pub fn rotate_expand(image: &RgbImage, degrees: f32, fill: Rgb<u8>) -> RgbImage {
    if degrees == 0.0 {
        return image.clone();
    }

    let (width, height) = image.dimensions();
    let theta = (degrees as f64).to_radians();
    let (sin, cos) = theta.sin_cos();

    let w = width as f64;
    let h = height as f64;
    let new_width = (w * cos.abs() + h * sin.abs()).ceil() as u32;
    let new_height = (w * sin.abs() + h * cos.abs()).ceil() as u32;

    let src_cx = w / 2.0;
    let src_cy = h / 2.0;
    let dst_cx = new_width as f64 / 2.0;
    let dst_cy = new_height as f64 / 2.0;

    RgbImage::from_fn(new_width, new_height, |x, y| {
        let dx = x as f64 + 0.5 - dst_cx;
        let dy = y as f64 + 0.5 - dst_cy;
        // Inverse mapping; y grows downward so a CCW turn on screen uses +sin here
        let sx = dx * cos - dy * sin + src_cx - 0.5;
        let sy = dx * sin + dy * cos + src_cy - 0.5;
        sample_bicubic(image, sx, sy, fill)
    })
}

/// Cubic convolution weight (a = -0.5)
fn cubic_weight(t: f64) -> f64 {
    const A: f64 = -0.5;
    let t = t.abs();
    if t <= 1.0 {
        ((A + 2.0) * t - (A + 3.0)) * t * t + 1.0
    } else if t < 2.0 {
        ((A * t - 5.0 * A) * t + 8.0 * A) * t - 4.0 * A
    } else {
        0.0
    }
}

fn sample_bicubic(image: &RgbImage, sx: f64, sy: f64, fill: Rgb<u8>) -> Rgb<u8> {
    let (width, height) = image.dimensions();
    if sx <= -1.0 || sy <= -1.0 || sx >= width as f64 || sy >= height as f64 {
        return fill;
    }

    let x0 = sx.floor() as i64;
    let y0 = sy.floor() as i64;
    let fx = sx - x0 as f64;
    let fy = sy - y0 as f64;

    let at = |x: i64, y: i64| -> [f64; 3] {
        let pixel = if x >= 0 && y >= 0 && (x as u32) < width && (y as u32) < height {
            *image.get_pixel(x as u32, y as u32)
        } else {
            fill
        };
        pixel.0.map(f64::from)
    };

    let mut sum = [0.0f64; 3];
    for j in -1..=2i64 {
        let wy = cubic_weight(fy - j as f64);
        for i in -1..=2i64 {
            let weight = wy * cubic_weight(fx - i as f64);
            let pixel = at(x0 + i, y0 + j);
            for channel in 0..3 {
                sum[channel] += pixel[channel] * weight;
            }
        }
    }

    Rgb(sum.map(|v| v.round().clamp(0.0, 255.0) as u8))
}

/// Encode an image as JPEG at the given path
pub fn save_jpeg<P: AsRef<Path>>(image: &RgbImage, path: P) -> Result<()> {
    let path = path.as_ref();
    image.save_with_format(path, ImageFormat::Jpeg)?;
    debug!("Wrote {}x{} JPEG to {}", image.width(), image.height(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const WHITE: Rgb<u8> = Rgb([255, 255, 255]);

    #[test]
    fn test_zero_rotation_keeps_image() {
        let image = RgbImage::from_pixel(40, 30, Rgb([10, 20, 30]));
        let rotated = rotate_expand(&image, 0.0, WHITE);
        assert_eq!(rotated, image);
    }

    #[test]
    fn test_rotation_expands_canvas() {
        let image = RgbImage::from_pixel(1000, 1400, Rgb([255, 255, 250]));
        let rotated = rotate_expand(&image, 0.8, WHITE);
        assert!(rotated.width() > 1000);
        assert!(rotated.height() > 1400);
        // Small angle: expansion stays within a few dozen pixels
        assert!(rotated.width() < 1030);
        assert!(rotated.height() < 1430);
    }

    #[test]
    fn test_rotation_fills_corners() {
        let image = RgbImage::from_pixel(100, 100, Rgb([0, 0, 0]));
        let rotated = rotate_expand(&image, 45.0, WHITE);
        assert_eq!(*rotated.get_pixel(0, 0), WHITE);
        let (w, h) = rotated.dimensions();
        assert_eq!(*rotated.get_pixel(w / 2, h / 2), Rgb([0, 0, 0]));
    }

    #[test]
    fn test_quarter_turn_is_counter_clockwise() {
        // Darken the right third; after a CCW quarter turn it ends up on top
        let mut image = RgbImage::from_pixel(21, 21, WHITE);
        for y in 0..21 {
            for x in 14..21 {
                image.put_pixel(x, y, Rgb([0, 0, 0]));
            }
        }
        let rotated = rotate_expand(&image, 90.0, WHITE);
        let (w, h) = rotated.dimensions();
        assert_eq!(*rotated.get_pixel(w / 2, 3), Rgb([0, 0, 0]));
        assert_eq!(*rotated.get_pixel(w / 2, h - 4), WHITE);
    }

    #[test]
    fn test_cubic_weights() {
        assert_eq!(cubic_weight(0.0), 1.0);
        assert_eq!(cubic_weight(1.0), 0.0);
        assert_eq!(cubic_weight(2.0), 0.0);
        // Negative lobe between one and two pixels away
        assert!(cubic_weight(1.5) < 0.0);
        let total: f64 = (-1..=2).map(|i| cubic_weight(0.3 - i as f64)).sum();
        assert!((total - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_bicubic_sampling_on_grid_is_exact() {
        let mut image = RgbImage::from_pixel(5, 5, WHITE);
        image.put_pixel(2, 2, Rgb([10, 20, 30]));
        assert_eq!(sample_bicubic(&image, 2.0, 2.0, WHITE), Rgb([10, 20, 30]));
        assert_eq!(sample_bicubic(&image, 0.0, 0.0, WHITE), WHITE);
        // Halfway across a dark/light edge lands between the two
        let edge = sample_bicubic(&image, 2.5, 2.0, WHITE);
        assert!(edge.0[0] > 10 && edge.0[0] < 255);
    }

    #[test]
    fn test_scan_effect_keeps_rotated_size() {
        let image = RgbImage::from_pixel(50, 70, Rgb([255, 255, 250]));
        let effect = ScanEffect::new(-0.5, 0.7);
        let scanned = effect.apply(&image);
        assert_eq!(scanned.dimensions(), rotate_expand(&image, -0.5, WHITE).dimensions());
    }

    #[test]
    fn test_save_jpeg() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("form.jpg");
        let image = RgbImage::from_pixel(32, 48, Rgb([200, 100, 50]));

        save_jpeg(&image, &path).unwrap();

        let bytes = std::fs::read(&path).unwrap();
        assert_eq!(&bytes[..2], &[0xFF, 0xD8]);
        let decoded = image::load_from_memory(&bytes).unwrap();
        assert_eq!((decoded.width(), decoded.height()), (32, 48));
    }
}
