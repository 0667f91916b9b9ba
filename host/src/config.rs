//! Host configuration, read from the environment (and `.env` when present).
//!
//! | Variable | Default |
//! |---|---|
//! | `CLINIC_HOST` | `127.0.0.1` |
//! | `CLINIC_PORT` | `8080` |
//! | `CLINIC_API_BASE_URL` | `http://localhost:5000/api` |
//! | `CLINIC_OPEN_BROWSER` | `true` |

use common::config::{ClientConfig, DEFAULT_API_BASE_URL};
use log::warn;

pub struct Config {
    pub host: String,
    pub port: u16,
    pub api_base_url: String,
    pub open_browser: bool,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let port = match lookup("CLINIC_PORT") {
            Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
                warn!("CLINIC_PORT={raw:?} is not a port, using 8080");
                8080
            }),
            None => 8080,
        };
        let open_browser = lookup("CLINIC_OPEN_BROWSER")
            .map(|raw| !matches!(raw.trim().to_ascii_lowercase().as_str(), "0" | "false" | "no"))
            .unwrap_or(true);

        Self {
            host: lookup("CLINIC_HOST").unwrap_or_else(|| "127.0.0.1".to_string()),
            port,
            api_base_url: lookup("CLINIC_API_BASE_URL")
                .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string()),
            open_browser,
        }
    }

    /// What the frontend receives from `/config.json`.
    pub fn client_config(&self) -> ClientConfig {
        ClientConfig::new(self.api_base_url.clone())
    }

    pub fn url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}
