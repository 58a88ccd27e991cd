//! Venue implementations
//!
//! Each venue bundles its endpoint table, request formats and the response
//! scanners the adapter lifecycle relies on.

pub mod bybit;

pub use bybit::{Bybit, BybitEndpoints, BybitFormats};
