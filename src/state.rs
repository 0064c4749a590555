//! Application state and dependency injection.
//!
//! This module defines the shared application state that is passed
//! to all route handlers via Axum's state extraction. The handlers are
//! stateless, so the state only carries the configuration constructed
//! at startup; nothing in it is mutable.

use crate::config::ApiConfig;

/// Shared application state
#[derive(Debug, Clone)]
pub struct AppState {
    /// Configuration the server was started with
    pub config: ApiConfig,
}

impl AppState {
    /// Create application state from configuration
    pub fn new(config: ApiConfig) -> Self {
        Self { config }
    }
}
