//! # Form Errors
//!
//! What the user sees when a form cannot become a document.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  form.json ──► FormError::Malformed     (not JSON / wrong shape)        │
//! │            ──► FormError::Validation    (field-level, names the field)  │
//! │            ──► FormError::UnknownOption (currency, discount type, ...)  │
//! │            ──► FormError::Core          (attendance, amount in words)   │
//! │            ──► FormError::Export        (dates, rendering)              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use docforge_core::{CoreError, ValidationError};
use docforge_export::ExportError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FormError {
    /// The form file is not valid JSON or has the wrong shape.
    #[error("Malformed form: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("Invalid form: {0}")]
    Validation(#[from] ValidationError),

    /// A choice field holds a value the host does not offer.
    #[error("Unknown {field}: '{value}'")]
    UnknownOption { field: String, value: String },

    #[error(transparent)]
    Core(#[from] CoreError),

    #[error(transparent)]
    Export(#[from] ExportError),
}

impl FormError {
    /// Whether the user can fix this by editing the form.
    pub fn is_user_error(&self) -> bool {
        match self {
            FormError::Malformed(_)
            | FormError::Validation(_)
            | FormError::UnknownOption { .. } => true,
            FormError::Core(CoreError::InvalidAttendance { .. })
            | FormError::Core(CoreError::Validation(_))
            | FormError::Export(ExportError::InvalidDate { .. }) => true,
            FormError::Core(_) | FormError::Export(_) => false,
        }
    }
}

pub type FormResult<T> = Result<T, FormError>;
