use serde_json::Value;

use crate::error::ExchangeResult;
use crate::request::{HttpMethod, Payload};
use meridian_core::{InstrumentRules, OrderIntent, Position, Price, Quantity};

/// Logical trading operations an adapter exposes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    CreateOrder,
    AmendOrder,
    CancelOrder,
    CancelAllOrders,
    GetOrderbook,
    GetTrades,
    GetOhlcv,
    GetTicker,
    GetOpenOrders,
    GetPosition,
    GetInstrumentInfo,
}

impl Operation {
    /// Account-scoped operations must be sent signed; market data is public
    pub fn requires_auth(&self) -> bool {
        matches!(
            self,
            Operation::CreateOrder
                | Operation::AmendOrder
                | Operation::CancelOrder
                | Operation::CancelAllOrders
                | Operation::GetOpenOrders
                | Operation::GetPosition
        )
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::CreateOrder => "create_order",
            Operation::AmendOrder => "amend_order",
            Operation::CancelOrder => "cancel_order",
            Operation::CancelAllOrders => "cancel_all_orders",
            Operation::GetOrderbook => "get_orderbook",
            Operation::GetTrades => "get_trades",
            Operation::GetOhlcv => "get_ohlcv",
            Operation::GetTicker => "get_ticker",
            Operation::GetOpenOrders => "get_open_orders",
            Operation::GetPosition => "get_position",
            Operation::GetInstrumentInfo => "get_instrument_info",
        }
    }
}

/// URL path and method of one venue endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Endpoint {
    pub path: &'static str,
    pub method: HttpMethod,
}

impl Endpoint {
    pub const fn get(path: &'static str) -> Self {
        Self {
            path,
            method: HttpMethod::Get,
        }
    }

    pub const fn post(path: &'static str) -> Self {
        Self {
            path,
            method: HttpMethod::Post,
        }
    }
}

/// Maps logical operations to venue endpoints
pub trait Endpoints: Send + Sync {
    /// Base URL every endpoint path is appended to
    fn base_url(&self) -> &str;

    fn endpoint(&self, operation: Operation) -> Endpoint;
}

/// Builds venue-specific request payloads from venue-agnostic arguments
pub trait Formats: Send + Sync {
    fn create_order(&self, intent: &OrderIntent) -> Payload;
    fn amend_order(&self, symbol: &str, order_id: &str, size: Quantity, price: Price) -> Payload;
    fn cancel_order(&self, symbol: &str, order_id: &str) -> Payload;
    fn cancel_all_orders(&self, symbol: &str) -> Payload;
    fn get_orderbook(&self, symbol: &str) -> Payload;
    fn get_trades(&self, symbol: &str) -> Payload;
    /// `interval` is the candle length in minutes
    fn get_ohlcv(&self, symbol: &str, interval: u32) -> Payload;
    fn get_ticker(&self, symbol: &str) -> Payload;
    fn get_open_orders(&self, symbol: &str) -> Payload;
    fn get_position(&self, symbol: &str) -> Payload;
    fn get_instrument_info(&self, symbol: &str) -> Payload;
}

/// Everything an adapter needs to know about one exchange
///
/// Besides the endpoint table and formats, a venue knows how to read the two
/// responses the adapter itself consumes: instrument metadata during warmup and
/// the position list during position sync.
pub trait Venue: Send + Sync {
    type Formats: Formats;
    type Endpoints: Endpoints;

    /// Display name used in log entries
    fn name(&self) -> &str;

    fn formats(&self) -> &Self::Formats;

    fn endpoints(&self) -> &Self::Endpoints;

    /// Extract tick and lot size for `symbol` from an instrument-info response
    ///
    /// The first entry whose identifier equals `symbol` wins.
    fn instrument_rules(&self, response: &Value, symbol: &str) -> ExchangeResult<InstrumentRules>;

    /// Extract the signed net position for `symbol` from a position response
    fn position(&self, response: &Value, symbol: &str) -> ExchangeResult<Position>;
}
