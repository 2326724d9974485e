//! # Error Types
//!
//! Domain-specific error types for rental-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  rental-core errors (this file)                                        │
//! │  ├── CoreError        - Rejected rental inputs                         │
//! │  └── ValidationError  - Field format / range failures                  │
//! │                                                                         │
//! │  rental-cli errors (app)                                               │
//! │  └── CliError         - Malformed stdin, config, I/O                   │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → CliError → anyhow → exit code     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (field, timestamps)
//! 3. Errors are enum variants, never String

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
///
/// All of them are surfaced to the caller as rejected inputs.
/// Nothing in the core retries or recovers.
#[derive(Debug, Error)]
pub enum CoreError {
    /// The rental period is empty or runs backwards.
    ///
    /// ## When This Occurs
    /// - Return time is equal to or before pickup time
    /// - The period is shorter than one whole minute
    /// - A duration handed to the pricing calculator is not positive
    #[error("Invalid rental period: {reason}")]
    InvalidPeriod { reason: String },

    /// A pricing rate is negative.
    #[error("Invalid price for {field}: {cents} cents is negative")]
    InvalidPrice { field: String, cents: i64 },

    /// An amount does not fit in the money representation.
    ///
    /// ## When This Occurs
    /// - Rate × billed units is larger than about 92 quadrillion
    /// - Basic payment + tax is larger than that
    #[error("Amount overflow while computing {what}")]
    AmountOverflow { what: String },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Invalid format (e.g., non-numeric amount).
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::InvalidPeriod {
            reason: "duration of 0 hours is not positive".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid rental period: duration of 0 hours is not positive"
        );

        let err = CoreError::InvalidPrice {
            field: "price_per_hour".to_string(),
            cents: -500,
        };
        assert_eq!(
            err.to_string(),
            "Invalid price for price_per_hour: -500 cents is negative"
        );

        let err = CoreError::AmountOverflow {
            what: "basic payment".to_string(),
        };
        assert_eq!(err.to_string(), "Amount overflow while computing basic payment");
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "amount".to_string(),
        };
        assert_eq!(err.to_string(), "amount is required");

        let err = ValidationError::OutOfRange {
            field: "tax_rate".to_string(),
            min: 0,
            max: 10000,
        };
        assert_eq!(err.to_string(), "tax_rate must be between 0 and 10000");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::Required {
            field: "amount".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}
