//! # Error Types
//!
//! Validation error types for aisle-core.
//!
//! ## Error Flow
//! ```text
//! ValidationError (this crate)
//!      │
//!      ▼
//! RegisterError::InvalidPurchaseData (aisle-register)
//!      │
//!      ▼
//! Caller-facing message + machine-readable code
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (field, value, limit)
//! 3. Errors are enum variants, never String

use thiserror::Error;

/// Input validation errors.
///
/// These errors occur when a purchase request doesn't meet requirements.
/// Used for early validation before any store access happens.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// A collection has more entries than allowed.
    #[error("{field} cannot have more than {max} entries")]
    TooMany { field: String, max: usize },

    /// Numeric value is out of its allowed range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Invalid format (e.g. invalid UUID).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// Duplicate value where uniqueness is required.
    #[error("{field} '{value}' appears more than once")]
    Duplicate { field: String, value: String },
}

/// Convenience type alias for validation results.
pub type ValidationResult<T> = Result<T, ValidationError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = ValidationError::Required {
            field: "supermarket_id".to_string(),
        };
        assert_eq!(err.to_string(), "supermarket_id is required");

        let err = ValidationError::TooMany {
            field: "items".to_string(),
            max: 10,
        };
        assert_eq!(err.to_string(), "items cannot have more than 10 entries");

        let err = ValidationError::Duplicate {
            field: "product_name".to_string(),
            value: "Milk".to_string(),
        };
        assert_eq!(err.to_string(), "product_name 'Milk' appears more than once");
    }
}
