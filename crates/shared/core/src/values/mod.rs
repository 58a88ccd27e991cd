use rust_decimal::Decimal;

/// Price value - uses Decimal for precision
pub type Price = Decimal;

/// Quantity value - uses Decimal for precision
pub type Quantity = Decimal;

/// Symbol identifier for a tradeable instrument (venue notation, e.g. "BTCUSDT")
pub type Symbol = String;
