//! Meridian Ports
//!
//! Port definitions (traits) for Meridian exchange adapters.
//! These define the boundaries between the adapter lifecycle and the
//! venue-specific collaborators (endpoint tables, request formats, transport).

mod client;
mod error;
mod exchange;
mod request;
mod venue;

pub use client::RequestClient;
pub use error::{ExchangeError, ExchangeResult, TransportError};
pub use exchange::Exchange;
pub use request::{HttpMethod, Payload, Request};
pub use venue::{Endpoint, Endpoints, Formats, Operation, Venue};
