//! # Application State
//!
//! Shared, read-only state for the Axum application.

use crate::config::AppConfig;
use luhn_core::InputPolicy;
use std::sync::Arc;

/// Shared application state
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application config
    pub config: Arc<AppConfig>,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// Input policy applied to every card number
    pub fn policy(&self) -> InputPolicy {
        self.config.policy
    }

    /// Upper bound on request body size
    pub fn max_body_bytes(&self) -> usize {
        self.config.max_body_bytes
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(AppConfig::default())
    }
}
