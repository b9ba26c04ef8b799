//! # Validation Error Types
//!
//! Typed errors for the checked validation paths.
//! The unchecked `is_valid_luhn` never fails; only the strict paths return
//! `Result<T, ValidationError>`.

use thiserror::Error;

/// Error raised when a card number cannot be validated as digits
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A character outside '0'..='9'
    #[error("Invalid digit {character:?} at position {position}")]
    InvalidDigit { character: char, position: usize },

    /// No digits to compute a check digit over
    #[error("Cannot compute a check digit for an empty payload")]
    EmptyPayload,
}

/// Result type alias for checked validation
pub type ValidationOutcome<T> = Result<T, ValidationError>;
