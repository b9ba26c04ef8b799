//! # luhn-wasm
//!
//! WebAssembly bindings for luhn-check.
//!
//! Lets browsers and edge runtimes run the same checksum as the server
//! before a request is ever sent.
//!
//! ## Usage (JavaScript)
//!
//! ```javascript
//! import init, { is_valid_luhn, validate_card_number } from 'luhn-wasm';
//!
//! await init();
//!
//! is_valid_luhn('4003600000000014');          // true
//! validate_card_number('4003-6000-0000-0014'); // throws: Invalid digit '-' at position 4
//! ```
//!
//! ## Building
//!
//! ```bash
//! wasm-pack build --target web
//! ```

use luhn_core::InputPolicy;
use wasm_bindgen::prelude::*;

/// Unchecked Luhn checksum, identical to the server's lenient policy
#[wasm_bindgen]
pub fn is_valid_luhn(number: &str) -> bool {
    luhn_core::is_valid_luhn(number)
}

/// Strict validation: throws on non-digit input, otherwise returns the checksum result
#[wasm_bindgen]
pub fn validate_card_number(number: &str) -> Result<bool, JsValue> {
    strict_check(number).map_err(|e| JsValue::from_str(&e))
}

/// Check digit that completes a digits-only payload
#[wasm_bindgen]
pub fn checksum_digit(payload: &str) -> Result<u8, JsValue> {
    luhn_core::checksum_digit(payload).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Get library version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

fn strict_check(number: &str) -> Result<bool, String> {
    luhn_core::check(number, InputPolicy::Strict)
        .map(|result| result.valid)
        .map_err(|e| e.to_string())
}
