//! PDF Core - Paginated PDF writer
//!
//! This crate provides functionality for:
//! - Creating new PDF documents with a fixed page size
//! - Writing text with the standard Type1 Helvetica fonts
//! - Drawing stroked lines (signature rules, separators)
//! - Saving the result with Flate-compressed content streams
//!
//! # Example
//!
//! ```ignore
//! use pdf_core::{PageSize, PdfDocument, StandardFont};
//!
//! let mut doc = PdfDocument::new(PageSize::A4);
//! doc.set_font(StandardFont::HelveticaBold, 18.0);
//! doc.insert_text("RESIDENTIAL TENANCY AGREEMENT", 1, 50.0, 780.0)?;
//! doc.draw_line(1, 50.0, 100.0, 250.0, 100.0)?;
//! doc.save("tenancy.pdf")?;
//! ```

mod document;
mod font;
mod text;

pub use document::{Color, PageSize, PdfDocument};
pub use font::StandardFont;
pub use text::{encode_literal, generate_line_operators, generate_text_operators, TextRenderContext};

use thiserror::Error;

/// Errors that can occur during PDF operations
#[derive(Debug, Error)]
pub enum PdfError {
    #[error("Failed to save PDF: {0}")]
    SaveError(String),

    #[error("No font selected")]
    FontNotSet,

    #[error("Invalid page number: {0} (document has {1} pages)")]
    InvalidPage(usize, usize),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Lopdf error: {0}")]
    LopdfError(#[from] lopdf::Error),
}

/// Result type for PDF operations
pub type Result<T> = std::result::Result<T, PdfError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            PdfError::InvalidPage(3, 1).to_string(),
            "Invalid page number: 3 (document has 1 pages)"
        );
        assert_eq!(PdfError::FontNotSet.to_string(), "No font selected");
    }
}
