//! # luhn-core
//!
//! Core types and the Luhn checksum for the luhn-check service.
//!
//! This crate provides:
//! - `is_valid_luhn` - the unchecked mod-10 checksum
//! - `check` - checksum under an explicit `InputPolicy`
//! - `checksum_digit` - check digit generation for digit payloads
//! - `CardNumberInput` / `ValidationResult` - the request and response payloads
//! - `ValidationError` for typed error handling
//!
//! ## Example
//!
//! ```rust
//! use luhn_core::{check, is_valid_luhn, InputPolicy};
//!
//! assert!(is_valid_luhn("4003600000000014"));
//! assert!(!is_valid_luhn("4003600000000015"));
//!
//! // Strict policy refuses separators instead of folding them into the sum
//! assert!(check("4003-6000-0000-0014", InputPolicy::Strict).is_err());
//! ```

pub mod card;
pub mod error;
pub mod luhn;

// Re-exports for convenience
pub use card::{CardNumberInput, InputPolicy, ValidationResult};
pub use error::{ValidationError, ValidationOutcome};
pub use luhn::{check, checksum_digit, digit_value, is_valid_luhn, validate_digits};
