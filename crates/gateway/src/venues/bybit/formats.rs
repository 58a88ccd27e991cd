//! Bybit v5 request formats
//!
//! Every payload carries the product `category` and the `symbol`. Decimals are
//! rendered as strings, as the v5 API expects.

use meridian_core::{OrderIntent, OrderType, Price, Quantity, Side};
use meridian_ports::{Formats, Payload};

/// Default product category (USDT perpetuals)
pub const DEFAULT_CATEGORY: &str = "linear";

const ORDERBOOK_DEPTH: &str = "200";
const TRADES_LIMIT: &str = "1000";
const OPEN_ORDERS_LIMIT: &str = "50";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BybitFormats {
    category: String,
}

impl BybitFormats {
    pub fn new(category: impl Into<String>) -> Self {
        Self {
            category: category.into(),
        }
    }

    fn base(&self, symbol: &str) -> Payload {
        let mut payload = Payload::new();
        payload.insert("category".to_string(), self.category.clone());
        payload.insert("symbol".to_string(), symbol.to_string());
        payload
    }
}

impl Default for BybitFormats {
    fn default() -> Self {
        Self::new(DEFAULT_CATEGORY)
    }
}

fn side(side: Side) -> &'static str {
    match side {
        Side::Buy => "Buy",
        Side::Sell => "Sell",
    }
}

fn order_type(order_type: OrderType) -> &'static str {
    match order_type {
        OrderType::Limit => "Limit",
        OrderType::Market => "Market",
    }
}

fn time_in_force(order_type: OrderType) -> &'static str {
    match order_type {
        OrderType::Limit => "GTC",
        OrderType::Market => "IOC",
    }
}

/// Candle length in minutes to a v5 kline interval code
fn kline_interval(minutes: u32) -> String {
    match minutes {
        1440 => "D".to_string(),
        10080 => "W".to_string(),
        43200 => "M".to_string(),
        m => m.to_string(),
    }
}

impl Formats for BybitFormats {
    fn create_order(&self, intent: &OrderIntent) -> Payload {
        let mut payload = self.base(&intent.symbol);
        payload.insert("side".to_string(), side(intent.side).to_string());
        payload.insert(
            "orderType".to_string(),
            order_type(intent.order_type).to_string(),
        );
        payload.insert("qty".to_string(), intent.size.normalize().to_string());
        payload.insert(
            "timeInForce".to_string(),
            time_in_force(intent.order_type).to_string(),
        );
        // Market orders take whatever the book offers; a price would be ignored
        if intent.order_type.requires_price() {
            if let Some(price) = intent.price {
                payload.insert("price".to_string(), price.normalize().to_string());
            }
        }
        payload
    }

    fn amend_order(&self, symbol: &str, order_id: &str, size: Quantity, price: Price) -> Payload {
        let mut payload = self.base(symbol);
        payload.insert("orderId".to_string(), order_id.to_string());
        payload.insert("qty".to_string(), size.normalize().to_string());
        payload.insert("price".to_string(), price.normalize().to_string());
        payload
    }

    fn cancel_order(&self, symbol: &str, order_id: &str) -> Payload {
        let mut payload = self.base(symbol);
        payload.insert("orderId".to_string(), order_id.to_string());
        payload
    }

    fn cancel_all_orders(&self, symbol: &str) -> Payload {
        self.base(symbol)
    }

    fn get_orderbook(&self, symbol: &str) -> Payload {
        let mut payload = self.base(symbol);
        payload.insert("limit".to_string(), ORDERBOOK_DEPTH.to_string());
        payload
    }

    fn get_trades(&self, symbol: &str) -> Payload {
        let mut payload = self.base(symbol);
        payload.insert("limit".to_string(), TRADES_LIMIT.to_string());
        payload
    }

    fn get_ohlcv(&self, symbol: &str, interval: u32) -> Payload {
        let mut payload = self.base(symbol);
        payload.insert("interval".to_string(), kline_interval(interval));
        payload
    }

    fn get_ticker(&self, symbol: &str) -> Payload {
        self.base(symbol)
    }

    fn get_open_orders(&self, symbol: &str) -> Payload {
        let mut payload = self.base(symbol);
        payload.insert("limit".to_string(), OPEN_ORDERS_LIMIT.to_string());
        payload
    }

    fn get_position(&self, symbol: &str) -> Payload {
        self.base(symbol)
    }

    fn get_instrument_info(&self, symbol: &str) -> Payload {
        self.base(symbol)
    }
}
