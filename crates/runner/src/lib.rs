//! Meridian Runner - exchange adapter session host
//!
//! - **Config**: JSON configuration (symbol, venue connection)
//! - **Session**: warmup, wait for the stop signal, shutdown
//!
//! ```text
//!   config.json ──▶ build_exchange ──▶ TradingSession
//!                                          │ warmup
//!                                          │ ... until Ctrl-C
//!                                          │ shutdown (cancel all x3 + flatten)
//!                                          ▼
//!                                        exit
//! ```

pub mod config;
pub mod error;
pub mod session;

pub use config::{ConfigError, RunnerConfig, VenueConfig, load_config, load_default_config};
pub use error::{Error, Result};
pub use session::{Readiness, TradingSession};

use meridian_gateway::{Bybit, BybitEndpoints, BybitExchange, BybitFormats, RestClient};

/// Build the adapter described by `config`
pub fn build_exchange(config: &RunnerConfig) -> Result<BybitExchange> {
    config.validate()?;

    let venue = Bybit::new(
        BybitEndpoints::new(config.venue.rest_url.clone()),
        BybitFormats::new(config.venue.category.clone()),
    );
    let client = RestClient::new(config.venue.rest_client_config())?;

    Ok(BybitExchange::new(venue, client, config.symbol.clone()))
}
