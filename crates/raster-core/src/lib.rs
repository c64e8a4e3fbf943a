//! Raster Core - drawing scanned-looking form images
//!
//! This crate provides functionality for:
//! - An RGB canvas with text, outlined rectangles and ellipses
//! - TrueType text via `ab_glyph`, with a three-tier font fallback that ends
//!   in a built-in bitmap face and therefore never fails
//! - Scan artifacts: small rotation with canvas expansion, Gaussian blur
//! - JPEG output
//!
//! # Example
//!
//! ```ignore
//! use raster_core::{Canvas, FontLoader, FontWeight, ScanEffect};
//! use image::Rgb;
//!
//! let mut fonts = FontLoader::new(raster_core::default_font_dirs());
//! let header = fonts.load(FontWeight::Bold, 36.0);
//!
//! let mut canvas = Canvas::new(1000, 1400, Rgb([255, 255, 250]));
//! canvas.draw_text(320, 50, "IMMIGRATION DEPARTMENT", &header, Rgb([0, 0, 0]));
//! let scanned = ScanEffect::new(0.4, 0.7).apply(canvas.image());
//! raster_core::save_jpeg(&scanned, "form.jpg")?;
//! ```

mod builtin;
mod canvas;
mod font;
mod scan;

pub use canvas::Canvas;
pub use font::{default_font_dirs, FontFace, FontLoader, FontWeight, FormFont};
pub use scan::{rotate_expand, save_jpeg, ScanEffect};

use thiserror::Error;

/// Errors that can occur while producing raster images
#[derive(Debug, Error)]
pub enum RasterError {
    #[error("Image error: {0}")]
    ImageError(#[from] image::ImageError),
}

/// Result type for raster operations
pub type Result<T> = std::result::Result<T, RasterError>;
