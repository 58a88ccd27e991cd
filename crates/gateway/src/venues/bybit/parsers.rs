//! Scanners for the Bybit v5 responses the adapter reads itself
//!
//! Both responses share the `{"result": {"list": [...]}}` envelope.

use std::str::FromStr;

use meridian_core::{InstrumentRules, Position};
use meridian_ports::{ExchangeError, ExchangeResult};
use rust_decimal::Decimal;
use serde_json::Value;

fn result_list(response: &Value) -> ExchangeResult<&Vec<Value>> {
    response
        .get("result")
        .and_then(|result| result.get("list"))
        .and_then(Value::as_array)
        .ok_or_else(|| ExchangeError::missing_field("result.list"))
}

fn symbol_of(entry: &Value) -> Option<&str> {
    entry.get("symbol").and_then(Value::as_str)
}

fn decimal_field(entry: &Value, path: &[&str]) -> ExchangeResult<Decimal> {
    let name = path.join(".");
    let mut node = entry;
    for key in path {
        node = node
            .get(*key)
            .ok_or_else(|| ExchangeError::missing_field(name.clone()))?;
    }

    let raw = match node {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        other => {
            return Err(ExchangeError::Validation(format!(
                "{} is not a decimal: {}",
                name, other
            )));
        }
    };

    Decimal::from_str(&raw)
        .or_else(|_| Decimal::from_scientific(&raw))
        .map_err(|e| ExchangeError::Validation(format!("{} = {:?}: {}", name, raw, e)))
}

/// Tick and lot size of the first instrument whose symbol equals `symbol`
pub fn parse_instrument_rules(response: &Value, symbol: &str) -> ExchangeResult<InstrumentRules> {
    for instrument in result_list(response)? {
        if symbol_of(instrument) != Some(symbol) {
            continue;
        }

        let tick_size = decimal_field(instrument, &["priceFilter", "tickSize"])?;
        let lot_size = decimal_field(instrument, &["lotSizeFilter", "qtyStep"])?;

        return InstrumentRules::new(tick_size, lot_size).ok_or_else(|| {
            ExchangeError::Validation(format!(
                "non-positive increments for {}: tick_size={} lot_size={}",
                symbol, tick_size, lot_size
            ))
        });
    }

    Err(ExchangeError::SymbolNotFound(symbol.to_string()))
}

/// Signed net position for `symbol`
///
/// Entries are summed so hedge-mode accounts (one long and one short entry per
/// symbol) report their net exposure. No matching entry means flat.
pub fn parse_position(response: &Value, symbol: &str) -> ExchangeResult<Position> {
    let mut net = Decimal::ZERO;

    for entry in result_list(response)? {
        if symbol_of(entry) != Some(symbol) {
            continue;
        }

        let size = decimal_field(entry, &["size"])?;
        match entry.get("side").and_then(Value::as_str).unwrap_or("") {
            "Buy" => net += size,
            "Sell" => net -= size,
            // Empty side: no open position in this slot
            _ => {}
        }
    }

    Ok(Position::new(net))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use serde_json::json;

    fn instruments() -> Value {
        json!({
            "retCode": 0,
            "result": {
                "category": "linear",
                "list": [
                    {
                        "symbol": "ETHUSDT",
                        "priceFilter": {"tickSize": "0.01"},
                        "lotSizeFilter": {"qtyStep": "0.01"}
                    },
                    {
                        "symbol": "BTCUSDT",
                        "priceFilter": {"tickSize": "0.5"},
                        "lotSizeFilter": {"qtyStep": "0.001"}
                    }
                ]
            }
        })
    }

    #[test]
    fn test_matching_instrument_wins_over_earlier_entries() {
        let rules = parse_instrument_rules(&instruments(), "BTCUSDT").unwrap();
        assert_eq!(rules.tick_size(), dec!(0.5));
        assert_eq!(rules.lot_size(), dec!(0.001));
    }

    #[test]
    fn test_first_match_wins() {
        let response = json!({"result": {"list": [
            {"symbol": "BTCUSDT", "priceFilter": {"tickSize": "0.1"}, "lotSizeFilter": {"qtyStep": "0.01"}},
            {"symbol": "BTCUSDT", "priceFilter": {"tickSize": "5"}, "lotSizeFilter": {"qtyStep": "1"}}
        ]}});
        let rules = parse_instrument_rules(&response, "BTCUSDT").unwrap();
        assert_eq!(rules.tick_size(), dec!(0.1));
        assert_eq!(rules.lot_size(), dec!(0.01));
    }

    #[test]
    fn test_unknown_symbol() {
        let err = parse_instrument_rules(&instruments(), "SOLUSDT").unwrap_err();
        assert_eq!(err, ExchangeError::SymbolNotFound("SOLUSDT".to_string()));
    }

    #[test]
    fn test_missing_envelope_and_filters() {
        let err = parse_instrument_rules(&json!({"retCode": 10001}), "BTCUSDT").unwrap_err();
        assert!(err.is_missing_field());

        let response = json!({"result": {"list": [{"symbol": "BTCUSDT", "priceFilter": {}}]}});
        let err = parse_instrument_rules(&response, "BTCUSDT").unwrap_err();
        assert_eq!(err, ExchangeError::missing_field("priceFilter.tickSize"));
    }

    #[test]
    fn test_non_positive_increment_rejected() {
        let response = json!({"result": {"list": [
            {"symbol": "BTCUSDT", "priceFilter": {"tickSize": "0"}, "lotSizeFilter": {"qtyStep": "0.001"}}
        ]}});
        assert!(matches!(
            parse_instrument_rules(&response, "BTCUSDT"),
            Err(ExchangeError::Validation(_))
        ));
    }

    #[test]
    fn test_position_sides() {
        let short = json!({"result": {"list": [{"symbol": "BTCUSDT", "side": "Sell", "size": "2.5"}]}});
        assert_eq!(parse_position(&short, "BTCUSDT").unwrap().size, dec!(-2.5));

        let long = json!({"result": {"list": [{"symbol": "BTCUSDT", "side": "Buy", "size": "1"}]}});
        assert_eq!(parse_position(&long, "BTCUSDT").unwrap().size, dec!(1));

        let empty = json!({"result": {"list": [{"symbol": "BTCUSDT", "side": "", "size": "0"}]}});
        assert!(parse_position(&empty, "BTCUSDT").unwrap().is_flat());
    }

    #[test]
    fn test_hedge_mode_position_nets_out() {
        let response = json!({"result": {"list": [
            {"symbol": "BTCUSDT", "side": "Buy", "size": "3"},
            {"symbol": "BTCUSDT", "side": "Sell", "size": "1.25"},
            {"symbol": "ETHUSDT", "side": "Sell", "size": "9"}
        ]}});
        assert_eq!(parse_position(&response, "BTCUSDT").unwrap().size, dec!(1.75));
    }
}
