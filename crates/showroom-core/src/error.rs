//! # Error Types
//!
//! Domain-specific error types for showroom-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  showroom-core errors (this file)                                       │
//! │  └── ValidationError  - Input rejected before any SQL runs              │
//! │                                                                         │
//! │  showroom-db errors (separate crate)                                    │
//! │  └── DbError          - Database operation failures                     │
//! │                         (wraps ValidationError)                         │
//! │                                                                         │
//! │  Flow: ValidationError → DbError → caller                               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include the offending field in every message
//! 3. Errors are enum variants, never String

use chrono::NaiveDate;
use thiserror::Error;

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// Raised by [`crate::validation`] before a write reaches the database.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Value must be strictly positive (e.g. price).
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Value must not be negative (e.g. odometer).
    #[error("{field} must not be negative")]
    Negative { field: String },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Date lies after today.
    #[error("{field} {date} is in the future")]
    FutureDate { field: String, date: NaiveDate },
}

impl ValidationError {
    /// Name of the field that failed validation.
    pub fn field(&self) -> &str {
        match self {
            ValidationError::Required { field }
            | ValidationError::TooLong { field, .. }
            | ValidationError::MustBePositive { field }
            | ValidationError::Negative { field }
            | ValidationError::OutOfRange { field, .. }
            | ValidationError::FutureDate { field, .. } => field,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
