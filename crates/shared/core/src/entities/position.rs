use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::Side;
use crate::values::Quantity;

/// Net position in the adapter's symbol
///
/// Signed size: positive is long, negative is short, zero is flat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Position {
    pub size: Decimal,
}

impl Position {
    pub fn new(size: Decimal) -> Self {
        Self { size }
    }

    pub fn flat() -> Self {
        Self::default()
    }

    pub fn is_flat(&self) -> bool {
        self.size.is_zero()
    }

    /// Absolute size of the position
    pub fn abs_size(&self) -> Quantity {
        self.size.abs()
    }

    /// Side of the taker order the adapter sends when unwinding this position
    ///
    /// Sell when the size is negative, Buy otherwise.
    pub fn unwind_side(&self) -> Side {
        if self.size < Decimal::ZERO {
            Side::Sell
        } else {
            Side::Buy
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_flat_position() {
        assert!(Position::flat().is_flat());
        assert!(Position::new(dec!(0.000)).is_flat());
        assert!(!Position::new(dec!(-1.5)).is_flat());
    }

    #[test]
    fn test_unwind_side_and_size() {
        let short = Position::new(dec!(-2.5));
        assert_eq!(short.unwind_side(), Side::Sell);
        assert_eq!(short.abs_size(), dec!(2.5));

        let long = Position::new(dec!(1.0));
        assert_eq!(long.unwind_side(), Side::Buy);
        assert_eq!(long.abs_size(), dec!(1.0));
    }
}
