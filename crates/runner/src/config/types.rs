use serde::{Deserialize, Serialize};
use std::time::Duration;

use meridian_gateway::RestClientConfig;

/// Root configuration for a trading session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunnerConfig {
    /// Symbol the adapter trades and unwinds (venue notation)
    pub symbol: String,
    pub venue: VenueConfig,
}

/// Configuration for the venue connection
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VenueConfig {
    /// Venue identifier (currently only "bybit")
    pub id: String,
    /// REST API base URL
    pub rest_url: String,
    /// Product category, e.g. "linear", "inverse", "spot"
    #[serde(default = "default_category")]
    pub category: String,
    /// API key attached to signed requests
    #[serde(default)]
    pub api_key: String,
    #[serde(default = "default_recv_window")]
    pub recv_window_ms: u64,
    #[serde(default = "default_timeout")]
    pub timeout_ms: u64,
}

impl VenueConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    /// Transport settings for this venue
    pub fn rest_client_config(&self) -> RestClientConfig {
        RestClientConfig {
            api_key: Some(self.api_key.clone()).filter(|key| !key.is_empty()),
            recv_window_ms: self.recv_window_ms,
            timeout: self.timeout(),
        }
    }
}

// Default value functions for serde
fn default_category() -> String {
    "linear".to_string()
}

fn default_recv_window() -> u64 {
    5000
}

fn default_timeout() -> u64 {
    10000
}
