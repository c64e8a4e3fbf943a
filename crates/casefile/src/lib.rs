//! Casefile - synthetic case-file bundles
//!
//! Generates fictitious families and renders, for each one:
//! - a scanned-looking recognizance form per person (JPEG)
//! - a residential tenancy agreement (PDF)
//! - a social worker case note (DOCX)
//!
//! # Example
//!
//! ```ignore
//! use casefile::{run_batch, GeneratorContext, FAMILY_IDS};
//!
//! let mut ctx = GeneratorContext::new().with_output_dir("out");
//! let files = run_batch(&mut ctx, &FAMILY_IDS)?;
//! ```

pub mod batch;
pub mod context;
pub mod entity;
pub mod fake;
pub mod format;
pub mod pools;
pub mod render;

pub use batch::{run_batch, FAMILY_IDS};
pub use context::GeneratorContext;
pub use entity::{generate_family, generate_person, Family, Gender, Person, Role};

use thiserror::Error;

/// Errors that can occur while generating a batch
#[derive(Debug, Error)]
pub enum CaseFileError {
    #[error("PDF error: {0}")]
    Pdf(#[from] pdf_core::PdfError),

    #[error("Image error: {0}")]
    Raster(#[from] raster_core::RasterError),

    #[error("DOCX error: {0}")]
    Docx(#[from] docx_core::DocxError),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Date out of range: {0}")]
    InvalidDate(String),
}

/// Result type for case-file generation
pub type Result<T> = std::result::Result<T, CaseFileError>;
