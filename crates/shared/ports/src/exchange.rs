use async_trait::async_trait;
use serde_json::Value;

use crate::error::ExchangeResult;
use meridian_core::{OrderIntent, Price, Quantity};

/// Venue-agnostic trading interface
///
/// Trading operations are transparent pass-throughs: they return the raw
/// decoded response and propagate any failure unchanged. The two lifecycle
/// procedures never fail; their outcome is only visible in the logs.
#[async_trait]
pub trait Exchange: Send + Sync {
    async fn create_order(&self, intent: &OrderIntent) -> ExchangeResult<Value>;

    async fn amend_order(
        &self,
        symbol: &str,
        order_id: &str,
        size: Quantity,
        price: Price,
    ) -> ExchangeResult<Value>;

    async fn cancel_order(&self, symbol: &str, order_id: &str) -> ExchangeResult<Value>;

    async fn cancel_all_orders(&self, symbol: &str) -> ExchangeResult<Value>;

    async fn get_orderbook(&self, symbol: &str) -> ExchangeResult<Value>;

    async fn get_trades(&self, symbol: &str) -> ExchangeResult<Value>;

    async fn get_ohlcv(&self, symbol: &str, interval: u32) -> ExchangeResult<Value>;

    async fn get_ticker(&self, symbol: &str) -> ExchangeResult<Value>;

    async fn get_open_orders(&self, symbol: &str) -> ExchangeResult<Value>;

    async fn get_position(&self, symbol: &str) -> ExchangeResult<Value>;

    async fn get_instrument_info(&self, symbol: &str) -> ExchangeResult<Value>;

    /// Calibrate instrument rules before trading starts
    async fn warmup(&self);

    /// Cancel resting orders and flatten the position before exit
    async fn shutdown(&self);
}
