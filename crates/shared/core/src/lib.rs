//! Meridian Core Domain
//!
//! Pure domain types shared by every Meridian exchange adapter.
//! This crate contains no async, no I/O, and is 100% unit testable.

pub mod entities;
pub mod values;

// Re-export commonly used types at crate root
pub use entities::{AdapterState, InstrumentRules, OrderIntent, OrderType, Position, Side};
pub use values::{Price, Quantity, Symbol};
