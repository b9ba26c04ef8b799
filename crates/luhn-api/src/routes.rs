//! # Routes
//!
//! Axum router configuration for the validation API.

use crate::handlers;
use crate::state::AppState;
use axum::{routing::post, Router};
use tower_http::trace::TraceLayer;

/// Create the application router
///
/// Routes:
///   - POST /  - Validate a card number
///   - any other method on / - 405 with a plain-text body
///
/// Unknown paths fall through to axum's default 404.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route(
            "/",
            post(handlers::validate_card).fallback(handlers::method_not_allowed),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
