//! Application configuration
//!
//! Configuration loaded from `.sci-dashboard.toml` (see [`crate::load_config_file`]).

use serde::{Deserialize, Serialize};
use std::env;
use std::time::Duration;

/// Environment variable overriding `api_base_url`
pub const API_URL_ENV: &str = "SCI_API_URL";

/// Application configuration loaded from `.sci-dashboard.toml`
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct AppConfig {
    /// Base URL of the research backend
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,

    /// Seconds between automatic refreshes while tasks are pending or processing
    #[serde(default = "default_poll_interval_secs")]
    pub poll_interval_secs: u64,

    /// Maximum number of tasks fetched per refresh
    #[serde(default = "default_list_limit")]
    pub list_limit: u32,

    /// Status filter applied at startup (e.g. "COMPLETED"), empty = all statuses
    #[serde(default = "default_status_filter")]
    pub default_status_filter: String,

    /// Per-request timeout in seconds
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,

    /// Industries offered by the new research popup
    #[serde(default = "default_industries")]
    pub industries: Vec<String>,

    /// Reason sent along with cancellations
    #[serde(default = "default_cancel_reason")]
    pub cancel_reason: String,
}

fn default_api_base_url() -> String {
    "http://localhost:8000".to_string()
}

fn default_poll_interval_secs() -> u64 {
    5
}

fn default_list_limit() -> u32 {
    100
}

fn default_status_filter() -> String {
    "COMPLETED".to_string()
}

fn default_request_timeout_secs() -> u64 {
    30
}

fn default_industries() -> Vec<String> {
    [
        "Automotive",
        "Technology",
        "Healthcare",
        "Manufacturing",
        "Energy",
        "Pharmaceuticals",
        "Semiconductors",
        "Aerospace",
        "Telecommunications",
        "Retail",
        "Food & Beverage",
        "Chemicals",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

fn default_cancel_reason() -> String {
    "Cancelled from dashboard".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: default_api_base_url(),
            poll_interval_secs: default_poll_interval_secs(),
            list_limit: default_list_limit(),
            default_status_filter: default_status_filter(),
            request_timeout_secs: default_request_timeout_secs(),
            industries: default_industries(),
            cancel_reason: default_cancel_reason(),
        }
    }
}

impl AppConfig {
    /// Load config from CWD first, then home directory, or use defaults
    ///
    /// `SCI_API_URL` overrides the configured base URL.
    pub fn load() -> Self {
        let mut config = Self::from_file().unwrap_or_default();
        if let Ok(url) = env::var(API_URL_ENV) {
            if !url.trim().is_empty() {
                log::debug!("Using API URL from {}", API_URL_ENV);
                config.api_base_url = url.trim().to_string();
            }
        }
        config
    }

    fn from_file() -> Option<Self> {
        let content = crate::load_config_file()?;
        match toml::from_str(&content) {
            Ok(config) => {
                log::info!("Loaded app config from file");
                Some(config)
            }
            Err(e) => {
                log::warn!("Failed to parse config file: {}", e);
                None
            }
        }
    }

    /// Polling interval, never shorter than one second
    pub fn poll_interval(&self) -> Duration {
        Duration::from_secs(self.poll_interval_secs.max(1))
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs.max(1))
    }
}
