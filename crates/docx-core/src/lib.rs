//! DOCX Core - Rich-text document writer
//!
//! This crate provides functionality for:
//! - Building a document from headings, paragraphs and tables
//! - Paragraphs made of runs carrying a bold attribute
//! - Writing a minimal but valid WordprocessingML package
//!
//! # Example
//!
//! ```ignore
//! use docx_core::{DocxDocument, Paragraph, Run};
//!
//! let mut doc = DocxDocument::new();
//! doc.add_heading("Social Worker Case Note", 0);
//! doc.add_paragraph(
//!     Paragraph::new()
//!         .run(Run::bold("Summary: "))
//!         .run(Run::new("Conducted a routine home visit.")),
//! );
//! doc.save("casenote.docx")?;
//! ```

mod document;
mod package;
mod xml;

pub use document::{Block, DocxDocument, Paragraph, Run, Table};
pub use xml::escape;

use thiserror::Error;

/// Errors that can occur while writing documents
#[derive(Debug, Error)]
pub enum DocxError {
    #[error("Table cell ({0}, {1}) is outside a {2}x{3} table")]
    CellOutOfRange(usize, usize, usize, usize),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Zip error: {0}")]
    ZipError(#[from] zip::result::ZipError),
}

/// Result type for document operations
pub type Result<T> = std::result::Result<T, DocxError>;
