use serde::{Deserialize, Serialize};

/// Order types the adapter can place
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrderType {
    /// Rests on the book at the given price (maker)
    Limit,
    /// Executes immediately against resting liquidity (taker), no price required
    Market,
}

impl OrderType {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderType::Limit => "limit",
            OrderType::Market => "market",
        }
    }

    /// Whether the venue expects a price for this order type
    pub fn requires_price(&self) -> bool {
        matches!(self, OrderType::Limit)
    }
}
