//! Meridian Gateway
//!
//! Exchange adapters for the Meridian trading system. Provides:
//! - `ExchangeAdapter`: venue-agnostic trading operations plus the warmup and
//!   shutdown lifecycle
//! - Venue implementations (Bybit v5)
//! - `RestClient`: reqwest transport implementing `RequestClient`
//!
//! ## Architecture
//!
//! ```text
//!        caller (strategy, runner)
//!                │ Exchange trait
//!        ┌───────▼────────┐
//!        │ExchangeAdapter │── AdapterState (symbol, rules, position)
//!        └───┬────────┬───┘
//!            │        │
//!     ┌──────▼──┐  ┌──▼─────────────────┐
//!     │  Venue  │  │   RequestClient    │
//!     │Endpoints│  │ (RestClient/mock)  │
//!     │ Formats │  └─────────┬──────────┘
//!     └─────────┘            │ HTTP
//!                            ▼
//!                      Bybit REST API
//! ```

pub mod adapter;
pub mod lifecycle;
pub mod rest_client;
pub mod venues;

// Re-export commonly used types
pub use adapter::ExchangeAdapter;
pub use lifecycle::{CANCEL_ALL_ATTEMPTS, FlattenOutcome, UnwindReport};
pub use rest_client::{RestClient, RestClientConfig};
pub use venues::{Bybit, BybitEndpoints, BybitFormats};

/// Bybit adapter over the HTTP transport
pub type BybitExchange = ExchangeAdapter<Bybit, RestClient>;
