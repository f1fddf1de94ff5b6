//! Document generation
//!
//! Renders lists of codes into PDF documents.

pub mod document;

use thiserror::Error;

pub use document::render_codes;

/// Errors that can occur while rendering a document
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("PDF error: {0}")]
    Pdf(#[from] printpdf::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type RenderResult<T> = Result<T, RenderError>;
