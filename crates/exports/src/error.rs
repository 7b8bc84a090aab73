//! Error types for the export entry points

use thiserror::Error;

/// Errors that can occur while generating an export document
#[derive(Debug, Error)]
pub enum ExportError {
    /// The event id could not be resolved
    #[error("event resolution failed: {0}")]
    Event(#[from] event_model::EventModelError),

    /// The document could not be packaged as DOCX
    #[error("DOCX packaging failed: {0}")]
    Docx(#[from] doc_builder::DocxError),
}

/// Result type for export operations
pub type ExportResult<T> = std::result::Result<T, ExportError>;
