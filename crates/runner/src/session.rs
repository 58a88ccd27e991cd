//! Trading session - warmup, run until stopped, shutdown
//!
//! Warmup runs before anything else touches the adapter and shutdown runs
//! once, after the stop signal.

use std::future::Future;

use log::{info, warn};
use meridian_gateway::ExchangeAdapter;
use meridian_ports::{Exchange, RequestClient, Venue};

/// Lifecycle state after warmup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Readiness {
    /// Instrument rules are known
    Ready,
    /// Warmup failed; orders go out without tick/lot rounding
    Degraded,
}

pub struct TradingSession<V, C> {
    exchange: ExchangeAdapter<V, C>,
}

impl<V: Venue, C: RequestClient> TradingSession<V, C> {
    pub fn new(exchange: ExchangeAdapter<V, C>) -> Self {
        Self { exchange }
    }

    pub fn exchange(&self) -> &ExchangeAdapter<V, C> {
        &self.exchange
    }

    /// Run warmup and report whether instrument rules were calibrated
    pub async fn start(&self) -> Readiness {
        info!(
            "Starting {} session for {}",
            self.exchange.venue().name(),
            self.exchange.symbol()
        );
        self.exchange.warmup().await;

        if self.exchange.state().is_calibrated() {
            info!("Session ready");
            Readiness::Ready
        } else {
            warn!("Session degraded: instrument rules unknown");
            Readiness::Degraded
        }
    }

    /// Unwind orders and position
    pub async fn stop(&self) {
        info!("Stopping session");
        self.exchange.shutdown().await;
    }

    /// Warmup, wait for `stop_signal`, then shutdown
    ///
    /// Never fails; both lifecycle procedures report through the log.
    pub async fn run<F>(&self, stop_signal: F) -> Readiness
    where
        F: Future<Output = ()>,
    {
        let readiness = self.start().await;
        stop_signal.await;
        self.stop().await;
        readiness
    }
}
