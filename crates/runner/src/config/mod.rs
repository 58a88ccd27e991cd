pub mod loader;
pub mod types;

pub use loader::{API_KEY_ENV, ConfigError, load_config, load_config_from_str, load_default_config};
pub use types::{RunnerConfig, VenueConfig};
