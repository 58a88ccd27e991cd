//! Bybit v5 endpoint table

use meridian_ports::{Endpoint, Endpoints, Operation};

/// Production REST base URL
pub const MAINNET_URL: &str = "https://api.bybit.com";

/// Testnet REST base URL
pub const TESTNET_URL: &str = "https://api-testnet.bybit.com";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BybitEndpoints {
    base_url: String,
}

impl BybitEndpoints {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn mainnet() -> Self {
        Self::new(MAINNET_URL)
    }

    pub fn testnet() -> Self {
        Self::new(TESTNET_URL)
    }
}

impl Default for BybitEndpoints {
    fn default() -> Self {
        Self::mainnet()
    }
}

impl Endpoints for BybitEndpoints {
    fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, operation: Operation) -> Endpoint {
        match operation {
            Operation::CreateOrder => Endpoint::post("/v5/order/create"),
            Operation::AmendOrder => Endpoint::post("/v5/order/amend"),
            Operation::CancelOrder => Endpoint::post("/v5/order/cancel"),
            Operation::CancelAllOrders => Endpoint::post("/v5/order/cancel-all"),
            Operation::GetOrderbook => Endpoint::get("/v5/market/orderbook"),
            Operation::GetTrades => Endpoint::get("/v5/market/recent-trade"),
            Operation::GetOhlcv => Endpoint::get("/v5/market/kline"),
            Operation::GetTicker => Endpoint::get("/v5/market/tickers"),
            Operation::GetOpenOrders => Endpoint::get("/v5/order/realtime"),
            Operation::GetPosition => Endpoint::get("/v5/position/list"),
            Operation::GetInstrumentInfo => Endpoint::get("/v5/market/instruments-info"),
        }
    }
}
