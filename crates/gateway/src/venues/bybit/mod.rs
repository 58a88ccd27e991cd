//! Bybit v5 venue
//!
//! Unified trading account REST API. Endpoint paths, payload shapes and the
//! instrument/position response layout live here; the adapter stays venue-agnostic.

mod endpoints;
mod formats;
mod parsers;

pub use endpoints::{BybitEndpoints, MAINNET_URL, TESTNET_URL};
pub use formats::{BybitFormats, DEFAULT_CATEGORY};
pub use parsers::{parse_instrument_rules, parse_position};

use meridian_core::{InstrumentRules, Position};
use meridian_ports::{ExchangeResult, Venue};
use serde_json::Value;

#[derive(Debug, Clone, Default)]
pub struct Bybit {
    endpoints: BybitEndpoints,
    formats: BybitFormats,
}

impl Bybit {
    pub fn new(endpoints: BybitEndpoints, formats: BybitFormats) -> Self {
        Self { endpoints, formats }
    }

    pub fn mainnet() -> Self {
        Self::new(BybitEndpoints::mainnet(), BybitFormats::default())
    }

    pub fn testnet() -> Self {
        Self::new(BybitEndpoints::testnet(), BybitFormats::default())
    }
}

impl Venue for Bybit {
    type Formats = BybitFormats;
    type Endpoints = BybitEndpoints;

    fn name(&self) -> &str {
        "Bybit"
    }

    fn formats(&self) -> &BybitFormats {
        &self.formats
    }

    fn endpoints(&self) -> &BybitEndpoints {
        &self.endpoints
    }

    fn instrument_rules(&self, response: &Value, symbol: &str) -> ExchangeResult<InstrumentRules> {
        parse_instrument_rules(response, symbol)
    }

    fn position(&self, response: &Value, symbol: &str) -> ExchangeResult<Position> {
        parse_position(response, symbol)
    }
}
