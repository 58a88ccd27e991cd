mod instrument_rules;
mod order;
mod order_type;
mod position;
mod side;
mod state;

pub use instrument_rules::InstrumentRules;
pub use order::OrderIntent;
pub use order_type::OrderType;
pub use position::Position;
pub use side::Side;
pub use state::AdapterState;
