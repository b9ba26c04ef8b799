//! # Luhn Checksum
//!
//! The mod-10 checksum used by payment card numbers.
//!
//! ```text
//!   4 0 0 3 6 0 0 0 0 0 0 0 0 0 1 4      input
//!   8 0 0 3 3 0 0 0 0 0 0 0 0 0 2 4      every 2nd digit from the right doubled,
//!                                        minus 9 when the result exceeds 9
//!   sum = 20, 20 % 10 == 0 -> valid
//! ```
//!
//! `is_valid_luhn` is the unchecked form: it never rejects input, and a
//! non-digit byte contributes `byte - b'0'` like any other position. The
//! checked forms (`validate_digits`, `check` with `InputPolicy::Strict`) refuse
//! non-digit input before any arithmetic happens.

use crate::card::{InputPolicy, ValidationResult};
use crate::error::{ValidationError, ValidationOutcome};

/// Run the Luhn checksum over `card_number`.
///
/// Bytes are converted with unchecked `byte - b'0'` arithmetic, so malformed
/// input yields a checksum over arbitrary offsets rather than an error.
/// The empty string sums to 0 and is therefore reported as valid.
pub fn is_valid_luhn(card_number: &str) -> bool {
    let mut total: i64 = 0;
    let mut double_this_digit = false;

    for &byte in card_number.as_bytes().iter().rev() {
        let mut digit = i64::from(byte) - i64::from(b'0');

        if double_this_digit {
            digit *= 2;
            if digit > 9 {
                digit -= 9;
            }
        }

        total += digit;
        double_this_digit = !double_this_digit;
    }

    total % 10 == 0
}

/// Convert a digit character to its value, rejecting anything outside '0'..='9'.
///
/// `position` is only used to annotate the error.
pub fn digit_value(character: char, position: usize) -> ValidationOutcome<u8> {
    character
        .to_digit(10)
        .map(|d| d as u8)
        .ok_or(ValidationError::InvalidDigit {
            character,
            position,
        })
}

/// Check that every character of `card_number` is a decimal digit.
///
/// Reports the first offending character and its character index.
pub fn validate_digits(card_number: &str) -> ValidationOutcome<()> {
    for (position, character) in card_number.chars().enumerate() {
        digit_value(character, position)?;
    }
    Ok(())
}

/// Validate `card_number` under the given input policy
pub fn check(card_number: &str, policy: InputPolicy) -> ValidationOutcome<ValidationResult> {
    if policy == InputPolicy::Strict {
        validate_digits(card_number)?;
    }
    Ok(ValidationResult::new(is_valid_luhn(card_number)))
}

/// Compute the check digit that makes `payload` followed by it Luhn-valid.
pub fn checksum_digit(payload: &str) -> ValidationOutcome<u8> {
    if payload.is_empty() {
        return Err(ValidationError::EmptyPayload);
    }

    // The check digit takes the rightmost slot, so doubling starts with the
    // last payload digit.
    let mut total: u32 = 0;
    let mut double_this_digit = true;

    let digits = payload
        .chars()
        .enumerate()
        .map(|(position, c)| digit_value(c, position))
        .collect::<ValidationOutcome<Vec<u8>>>()?;

    for digit in digits.into_iter().rev() {
        let mut value = u32::from(digit);
        if double_this_digit {
            value *= 2;
            if value > 9 {
                value -= 9;
            }
        }
        total += value;
        double_this_digit = !double_this_digit;
    }

    Ok(((10 - total % 10) % 10) as u8)
}
