use std::path::Path;
use thiserror::Error;

use super::types::RunnerConfig;

/// Environment variable consulted when the config leaves `api_key` empty
pub const API_KEY_ENV: &str = "MERIDIAN_API_KEY";

const SUPPORTED_VENUES: &[&str] = &["bybit"];

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse config: {0}")]
    ParseError(#[from] serde_json::Error),
    #[error("Unsupported venue: {0}")]
    UnsupportedVenue(String),
    #[error("Invalid config: {0}")]
    Invalid(String),
}

/// Load runner configuration from a JSON file
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<RunnerConfig, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    load_config_from_str(&content)
}

/// Load configuration from a JSON string
pub fn load_config_from_str(json: &str) -> Result<RunnerConfig, ConfigError> {
    let config: RunnerConfig = serde_json::from_str(json)?;
    Ok(config)
}

/// Load the default embedded configuration (Bybit testnet)
pub fn load_default_config() -> Result<RunnerConfig, ConfigError> {
    let default_config = include_str!("default_config.json");
    load_config_from_str(default_config)
}

impl RunnerConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.symbol.trim().is_empty() {
            return Err(ConfigError::Invalid("symbol must not be empty".to_string()));
        }
        if !SUPPORTED_VENUES.contains(&self.venue.id.as_str()) {
            return Err(ConfigError::UnsupportedVenue(self.venue.id.clone()));
        }
        if self.venue.rest_url.trim().is_empty() {
            return Err(ConfigError::Invalid("venue.rest_url must not be empty".to_string()));
        }
        if self.venue.timeout_ms == 0 {
            return Err(ConfigError::Invalid("venue.timeout_ms must be positive".to_string()));
        }
        Ok(())
    }

    /// Fill an empty `api_key` from the given value
    pub fn with_api_key_fallback(mut self, api_key: Option<String>) -> Self {
        if self.venue.api_key.is_empty() {
            if let Some(key) = api_key {
                self.venue.api_key = key;
            }
        }
        self
    }

    /// Fill an empty `api_key` from `MERIDIAN_API_KEY`
    pub fn with_env_overrides(self) -> Self {
        self.with_api_key_fallback(std::env::var(API_KEY_ENV).ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_default_config() {
        let config = load_default_config().unwrap();
        assert_eq!(config.venue.id, "bybit");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_unknown_venue() {
        let mut config = load_default_config().unwrap();
        config.venue.id = "kraken".to_string();
        assert!(matches!(
            config.validate(),
            Err(ConfigError::UnsupportedVenue(id)) if id == "kraken"
        ));
    }

    #[test]
    fn test_validate_rejects_empty_symbol() {
        let mut config = load_default_config().unwrap();
        config.symbol = " ".to_string();
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_api_key_fallback_only_fills_empty_key() {
        let config = load_default_config()
            .unwrap()
            .with_api_key_fallback(Some("from-env".to_string()));
        assert_eq!(config.venue.api_key, "from-env");

        let config = config.with_api_key_fallback(Some("other".to_string()));
        assert_eq!(config.venue.api_key, "from-env");
    }

    #[test]
    fn test_parse_error() {
        assert!(matches!(
            load_config_from_str("{not json"),
            Err(ConfigError::ParseError(_))
        ));
    }
}
