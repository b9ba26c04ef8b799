//! # API Errors
//!
//! Every failure is turned into a status code and a plain-text body at the
//! point it is detected.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use luhn_core::ValidationError;
use thiserror::Error;
use tracing::{error, warn};

/// Errors returned by the HTTP handlers.
///
/// `Display` is the exact response body sent to the client.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Anything other than POST on the validation route
    #[error("Invalid request method")]
    MethodNotAllowed { method: String },

    /// Empty, malformed, or wrongly typed JSON body
    #[error("Invalid JSON payload")]
    InvalidJson { reason: String },

    /// Non-digit input rejected under the strict input policy
    #[error("Invalid card number")]
    InvalidCardNumber(#[from] ValidationError),

    /// The response body could not be encoded
    #[error("Error creating response")]
    Serialization(#[source] serde_json::Error),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::MethodNotAllowed { .. } => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::InvalidJson { .. } => StatusCode::BAD_REQUEST,
            ApiError::InvalidCardNumber(_) => StatusCode::BAD_REQUEST,
            ApiError::Serialization(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        match &self {
            ApiError::MethodNotAllowed { method } => {
                warn!(%method, "Rejected request method");
            }
            ApiError::InvalidJson { reason } => {
                warn!(%reason, "Rejected request body");
            }
            ApiError::InvalidCardNumber(err) => {
                warn!(error = %err, "Rejected card number");
            }
            ApiError::Serialization(err) => {
                error!(error = %err, "Failed to encode response");
            }
        }

        (status, self.to_string()).into_response()
    }
}
