use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{InstrumentRules, OrderType, Position, Side};
use crate::values::{Price, Quantity, Symbol};

/// Venue-agnostic description of an order to place
///
/// Not persisted; built fresh for every call and translated by the venue formats.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderIntent {
    pub symbol: Symbol,
    pub side: Side,
    pub order_type: OrderType,
    pub size: Quantity,
    /// Required for limit orders, ignored for market (taker) orders
    pub price: Option<Price>,
}

impl OrderIntent {
    /// Create a limit (maker) order intent
    pub fn limit(symbol: impl Into<Symbol>, side: Side, size: Quantity, price: Price) -> Self {
        Self {
            symbol: symbol.into(),
            side,
            order_type: OrderType::Limit,
            size,
            price: Some(price),
        }
    }

    /// Create a market (taker) order intent
    pub fn market(symbol: impl Into<Symbol>, side: Side, size: Quantity) -> Self {
        Self {
            symbol: symbol.into(),
            side,
            order_type: OrderType::Market,
            size,
            price: None,
        }
    }

    /// Taker order that closes `position`, or `None` when the position is flat
    pub fn flatten(symbol: impl Into<Symbol>, position: &Position) -> Option<Self> {
        if position.is_flat() {
            return None;
        }
        Some(Self::market(
            symbol,
            position.unwind_side(),
            position.abs_size(),
        ))
    }

    /// Snap size and price onto the instrument grid
    ///
    /// Size is floored to the lot size, a limit price is rounded to the nearest
    /// tick. Returns `None` when the size falls below one lot.
    pub fn normalized(&self, rules: &InstrumentRules) -> Option<Self> {
        let size = rules.round_size(self.size);
        if size <= Decimal::ZERO {
            return None;
        }
        let price = match self.order_type {
            OrderType::Limit => self.price.map(|p| rules.round_price(p)),
            OrderType::Market => self.price,
        };
        Some(Self {
            size,
            price,
            ..self.clone()
        })
    }
}
