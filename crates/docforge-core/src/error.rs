//! # Error Types
//!
//! Domain-specific error types for docforge-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  docforge-core errors (this file)                                       │
//! │  ├── CoreError        - Precondition violations in the engine           │
//! │  └── ValidationError  - Raw form value failures                         │
//! │                                                                         │
//! │  docforge-export errors (separate crate)                                │
//! │  └── ExportError      - Rendering failures (bad dates, core errors)     │
//! │                                                                         │
//! │  Form host errors (apps/cli)                                            │
//! │  └── FormError        - What the user sees                              │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → ExportError → FormError → user     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (field name, offending value)
//! 3. Errors are enum variants, never String
//! 4. Missing optional input is NOT an error: blank money fields are zero

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Precondition violations detected by the engine.
///
/// The engine never swallows these. The form host validates raw input first
/// and is responsible for presenting any failure to the user.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Attendance cannot produce a pro-ration ratio.
    ///
    /// ## When This Occurs
    /// - `working_days` is zero (ratio would divide by zero)
    /// - `present_days` exceeds `working_days`
    #[error("Invalid attendance ({present_days} of {working_days} days): {reason}")]
    InvalidAttendance {
        working_days: u32,
        present_days: u32,
        reason: String,
    },

    /// A negative amount reached an operation that only accepts
    /// non-negative values (e.g. amount in words).
    #[error("{field} cannot be negative: {amount}")]
    NegativeAmount { field: String, amount: String },

    /// Amount is too large to spell out.
    #[error("Amount {amount} is too large to convert to words")]
    AmountTooLarge { amount: String },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// Raised while turning raw form values into engine records, before any
/// computation runs.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Value must be zero or more.
    #[error("{field} cannot be negative")]
    MustBeNonNegative { field: String },

    /// Invalid format (e.g. "12abc" in a number field).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
