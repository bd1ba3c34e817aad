use std::time::Duration;

use serde::Deserialize;

/// Application configuration loaded from environment variables
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Base URL of the ratings/recommendations backend
    #[serde(default = "default_backend_url")]
    pub backend_url: String,

    /// Page server host address
    #[serde(default = "default_host")]
    pub host: String,

    /// Page server port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Per-request timeout for backend calls, in seconds
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,

    /// Identifier loaded when the page first comes up
    #[serde(default = "default_user_id")]
    pub default_user_id: u64,

    /// Users whose raw recommendation scores are logged at startup
    #[serde(default = "default_debug_user_ids")]
    pub debug_user_ids: Vec<u64>,
}

fn default_backend_url() -> String {
    "http://127.0.0.1:5000".to_string()
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_request_timeout_secs() -> u64 {
    10
}

fn default_user_id() -> u64 {
    1
}

fn default_debug_user_ids() -> Vec<u64> {
    vec![1, 2]
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        envy::from_env::<Config>().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
