//! # Request Handlers
//!
//! Axum handlers for the card validation route.

use crate::error::ApiError;
use crate::state::AppState;
use axum::{
    body::Body,
    extract::State,
    http::{header, Method},
    response::{IntoResponse, Response},
};
use luhn_core::CardNumberInput;
use tracing::{debug, field, info, instrument, Span};

/// Validate a card number.
///
/// The body is read raw so that a missing or wrong `Content-Type` does not
/// change the outcome; only the JSON itself is checked. Read failures,
/// including bodies over `max_body_bytes`, are reported as invalid JSON.
#[instrument(skip(state, body), fields(body_len = field::Empty, policy = %state.policy()))]
pub async fn validate_card(
    State(state): State<AppState>,
    body: Body,
) -> Result<Response, ApiError> {
    let bytes = axum::body::to_bytes(body, state.max_body_bytes())
        .await
        .map_err(|e| ApiError::InvalidJson {
            reason: format!("failed to read request body: {}", e),
        })?;
    Span::current().record("body_len", bytes.len());

    let input = decode_input(&bytes)?;
    debug!(digits = input.number.len(), "Decoded card number");

    let result = luhn_core::check(&input.number, state.policy())?;

    let payload = serde_json::to_vec(&result).map_err(ApiError::Serialization)?;

    info!(valid = result.valid, "Checked card number");

    Ok(([(header::CONTENT_TYPE, "application/json")], payload).into_response())
}

/// Catch-all for non-POST methods on the validation route
pub async fn method_not_allowed(method: Method) -> ApiError {
    ApiError::MethodNotAllowed {
        method: method.to_string(),
    }
}

/// Decode the first JSON value in `body`.
///
/// Anything after the first complete value is ignored. A `null` document
/// decodes to an empty card number.
pub fn decode_input(body: &[u8]) -> Result<CardNumberInput, ApiError> {
    let mut values =
        serde_json::Deserializer::from_slice(body).into_iter::<Option<CardNumberInput>>();

    match values.next() {
        Some(Ok(input)) => Ok(input.unwrap_or_default()),
        Some(Err(e)) => Err(ApiError::InvalidJson {
            reason: e.to_string(),
        }),
        None => Err(ApiError::InvalidJson {
            reason: "empty request body".to_string(),
        }),
    }
}
