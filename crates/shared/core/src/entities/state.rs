use serde::{Deserialize, Serialize};

use super::{InstrumentRules, Position};
use crate::values::Symbol;

/// Mutable record an exchange adapter keeps for its configured symbol
///
/// Created with rules and position unknown. Warmup fills in the rules, position
/// sync and fill processing update the position, shutdown reads both.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdapterState {
    pub symbol: Symbol,
    pub instrument_rules: Option<InstrumentRules>,
    pub position: Option<Position>,
}

impl AdapterState {
    pub fn new(symbol: impl Into<Symbol>) -> Self {
        Self {
            symbol: symbol.into(),
            instrument_rules: None,
            position: None,
        }
    }

    /// True once warmup stored instrument rules
    pub fn is_calibrated(&self) -> bool {
        self.instrument_rules.is_some()
    }
}
