//! API configuration.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// API configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Server host to bind to
    pub host: String,

    /// Server port to bind to
    pub port: u16,

    /// Request timeout in seconds
    pub request_timeout_seconds: u64,

    /// Log level used when `RUST_LOG` is not set
    pub log_level: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5002,
            request_timeout_seconds: 30,
            log_level: "info".to_string(),
        }
    }
}

impl ApiConfig {
    /// Load configuration from environment variables
    ///
    /// Every variable is optional; missing or unparseable values fall
    /// back to the defaults.
    pub fn from_env() -> anyhow::Result<Self> {
        let config = Self {
            host: std::env::var("API_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: std::env::var("API_PORT")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(5002),
            request_timeout_seconds: std::env::var("REQUEST_TIMEOUT_SECONDS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(30),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
        };

        Ok(config)
    }

    /// Get request timeout as Duration
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_seconds)
    }

    /// Get server address
    pub fn server_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
