//! Client configuration shared by the host and the frontend.
//!
//! The host serializes [`ClientConfig`] at `/config.json`; the frontend reads
//! it once at startup so the backend location can change per environment
//! without rebuilding the wasm bundle.

use serde::{Deserialize, Serialize};

/// Base URL used when neither the host nor the build provides one.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:5000/api";

/// Path the host serves the configuration under.
pub const CONFIG_PATH: &str = "/config.json";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Base of the records REST surface, e.g. `http://localhost:5000/api`.
    pub api_base_url: String,
}

impl ClientConfig {
    /// Builds a config, dropping trailing slashes so paths can be appended as-is.
    pub fn new(api_base_url: impl Into<String>) -> Self {
        let raw = api_base_url.into();
        let trimmed = raw.trim().trim_end_matches('/');
        let api_base_url = if trimmed.is_empty() {
            DEFAULT_API_BASE_URL.to_string()
        } else {
            trimmed.to_string()
        };
        Self { api_base_url }
    }

    /// Absolute URL for a resource-relative path such as `/patients/3`.
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.api_base_url, path)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE_URL)
    }
}
