//! # Card Number Types
//!
//! Request and response payloads for card number validation, plus the
//! policy that decides how non-digit input is treated.

use serde::de::{IgnoredAny, MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// Incoming card number payload.
///
/// Decoding only accepts a JSON object. The `number` key is matched
/// case-insensitively and the last occurrence wins; a `null` value leaves the
/// previous one in place. A missing `number` is the empty string and unknown
/// keys are ignored, so `{}` is a well-formed (and Luhn-valid) request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CardNumberInput {
    /// Card number as submitted, expected to be decimal digits only
    pub number: String,
}

impl<'de> Deserialize<'de> for CardNumberInput {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(CardNumberInputVisitor)
    }
}

struct CardNumberInputVisitor;

impl<'de> Visitor<'de> for CardNumberInputVisitor {
    type Value = CardNumberInput;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("an object with a string `number` field")
    }

    fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut input = CardNumberInput::default();

        while let Some(key) = map.next_key::<String>()? {
            if key.eq_ignore_ascii_case("number") {
                if let Some(number) = map.next_value::<Option<String>>()? {
                    input.number = number;
                }
            } else {
                map.next_value::<IgnoredAny>()?;
            }
        }

        Ok(input)
    }
}

impl CardNumberInput {
    pub fn new(number: impl Into<String>) -> Self {
        Self {
            number: number.into(),
        }
    }
}

/// Outcome of a checksum run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    pub valid: bool,
}

impl ValidationResult {
    pub fn new(valid: bool) -> Self {
        Self { valid }
    }
}

impl From<bool> for ValidationResult {
    fn from(valid: bool) -> Self {
        Self { valid }
    }
}

/// How input containing non-digit characters is handled
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputPolicy {
    /// Run the checksum over whatever bytes arrive (raw `byte - '0'` arithmetic)
    #[default]
    Lenient,
    /// Reject anything outside '0'..='9' before running the checksum
    Strict,
}

impl InputPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            InputPolicy::Lenient => "lenient",
            InputPolicy::Strict => "strict",
        }
    }
}

impl fmt::Display for InputPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InputPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "lenient" => Ok(InputPolicy::Lenient),
            "strict" => Ok(InputPolicy::Strict),
            other => Err(format!(
                "unknown input policy '{}' (expected 'lenient' or 'strict')",
                other
            )),
        }
    }
}
