use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::values::{Price, Quantity};

/// Venue-enforced increments for one trading symbol
///
/// Both increments are strictly positive; the constructor refuses anything else.
/// An adapter holds `Option<InstrumentRules>` so "not yet calibrated" stays
/// distinguishable from a real value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstrumentRules {
    tick_size: Price,
    lot_size: Quantity,
}

impl InstrumentRules {
    /// Returns `None` unless both increments are strictly positive
    pub fn new(tick_size: Price, lot_size: Quantity) -> Option<Self> {
        if tick_size > Decimal::ZERO && lot_size > Decimal::ZERO {
            Some(Self {
                tick_size,
                lot_size,
            })
        } else {
            None
        }
    }

    /// Minimum price increment
    pub fn tick_size(&self) -> Price {
        self.tick_size
    }

    /// Minimum size increment
    pub fn lot_size(&self) -> Quantity {
        self.lot_size
    }

    /// Round a price to the nearest tick (midpoint away from zero)
    pub fn round_price(&self, price: Price) -> Price {
        (price / self.tick_size).round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
            * self.tick_size
    }

    /// Round a size down to a whole number of lots
    pub fn round_size(&self, size: Quantity) -> Quantity {
        (size / self.lot_size).trunc() * self.lot_size
    }
}
