//! Export error types.

use docforge_core::CoreError;
use thiserror::Error;

/// Failures while rendering a document.
#[derive(Debug, Error)]
pub enum ExportError {
    /// The engine rejected the document's figures.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A date field is not an ISO `YYYY-MM-DD` date.
    #[error("{field} is not a valid date: '{value}'")]
    InvalidDate { field: String, value: String },
}

pub type ExportResult<T> = Result<T, ExportError>;
