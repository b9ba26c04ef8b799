//! # luhn-api
//!
//! HTTP API layer for luhn-check.
//!
//! This crate provides:
//! - Axum-based HTTP server
//! - A single validation endpoint backed by `luhn-core`
//! - Environment and command-line configuration
//!
//! ## Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | POST | `/` | Validate `{"number": "..."}`, returns `{"valid": bool}` |

pub mod config;
pub mod error;
pub mod handlers;
pub mod logging;
pub mod routes;
pub mod state;

pub use config::{AppConfig, Cli, ConfigError, LogFormat};
pub use error::ApiError;
pub use routes::create_router;
pub use state::AppState;
