//! Adapter lifecycle: warmup and shutdown
//!
//! ```text
//! warmup:    INIT ──query instrument info──▶ READY      (rules stored)
//!                 └──any failure───────────▶ DEGRADED   (rules unset, error logged)
//!
//! shutdown:  RUNNING ──3x cancel-all + flatten, join all──▶ UNWOUND
//!                                                        └▶ UNWOUND_WITH_ERROR (logged)
//! ```
//!
//! Neither procedure returns an error to its caller. Each logs exactly one
//! completion entry on every path.

use futures_util::future::{join, join_all};
use log::{error, info};
use meridian_core::{InstrumentRules, OrderIntent};
use meridian_ports::{Exchange, ExchangeError, ExchangeResult, RequestClient, Venue};

use crate::adapter::ExchangeAdapter;

/// Redundant cancel-all requests issued on shutdown
///
/// No individual result is verified; the repeats stand in for a retry.
pub const CANCEL_ALL_ATTEMPTS: usize = 3;

/// What happened to the flatten order during shutdown
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlattenOutcome {
    /// Taker order sent, carrying the intent that went on the wire
    Submitted(OrderIntent),
    /// Position known and zero, nothing to send
    Flat,
    /// Position never populated
    NoPosition,
    Failed(ExchangeError),
}

/// Result of one shutdown unwind
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnwindReport {
    /// Actions dispatched concurrently (cancel-all attempts plus the flatten action)
    pub actions: usize,
    /// Errors from cancel-all attempts that failed
    pub cancel_failures: Vec<ExchangeError>,
    pub flatten: FlattenOutcome,
}

impl UnwindReport {
    /// True when every action either succeeded or had nothing to do
    pub fn is_clean(&self) -> bool {
        self.cancel_failures.is_empty() && !matches!(self.flatten, FlattenOutcome::Failed(_))
    }
}

impl<V: Venue, C: RequestClient> ExchangeAdapter<V, C> {
    /// Query instrument metadata and store tick/lot size for the configured symbol
    ///
    /// This is the fallible core of warmup; `Exchange::warmup` logs and discards
    /// its error.
    pub async fn calibrate(&self) -> ExchangeResult<InstrumentRules> {
        let symbol = self.symbol();
        let response = self.get_instrument_info(&symbol).await?;
        let rules = self.venue.instrument_rules(&response, &symbol)?;

        self.state.write().instrument_rules = Some(rules);
        Ok(rules)
    }

    /// The taker order that closes the believed position
    ///
    /// `Ok(None)` when the position is known to be flat, `MissingField` when it
    /// was never populated.
    pub fn flatten_intent(&self) -> ExchangeResult<Option<OrderIntent>> {
        let state = self.state.read();
        let position = state
            .position
            .ok_or_else(|| ExchangeError::missing_field("position"))?;
        Ok(OrderIntent::flatten(state.symbol.clone(), &position))
    }

    /// Cancel resting orders and flatten the position, all concurrently
    ///
    /// Waits for every action to finish regardless of individual failures.
    pub async fn unwind(&self) -> UnwindReport {
        let symbol = self.symbol();
        let flatten = self.flatten_intent();

        let cancels = join_all((0..CANCEL_ALL_ATTEMPTS).map(|_| self.cancel_all_orders(&symbol)));
        let flatten_action = async move {
            match flatten {
                // Full position size, not floored to the lot grid
                Ok(Some(intent)) => match self.submit(&intent).await {
                    Ok(_) => FlattenOutcome::Submitted(intent),
                    Err(e) => FlattenOutcome::Failed(e),
                },
                Ok(None) => FlattenOutcome::Flat,
                Err(e) if e.is_missing_field() => FlattenOutcome::NoPosition,
                Err(e) => FlattenOutcome::Failed(e),
            }
        };

        let (cancel_results, flatten) = join(cancels, flatten_action).await;

        UnwindReport {
            actions: cancel_results.len() + 1,
            cancel_failures: cancel_results.into_iter().filter_map(Result::err).collect(),
            flatten,
        }
    }

    pub(crate) async fn run_warmup(&self) {
        let venue = self.venue.name();
        let symbol = self.symbol();

        match self.calibrate().await {
            Ok(rules) => info!(
                "{} exchange warmup for {}: tick_size={} lot_size={}",
                venue,
                symbol,
                rules.tick_size(),
                rules.lot_size()
            ),
            Err(e) => error!("{} exchange warmup for {}: {}", venue, symbol, e),
        }

        info!("{} exchange warmup sequence complete for {}.", venue, symbol);
    }

    pub(crate) async fn run_shutdown(&self) {
        let venue = self.venue.name();
        let symbol = self.symbol();
        let report = self.unwind().await;

        for e in &report.cancel_failures {
            error!("{} shutdown for {}: cancel all failed: {}", venue, symbol, e);
        }
        match &report.flatten {
            FlattenOutcome::Submitted(intent) => info!(
                "{} shutdown for {}: flatten {} {} sent",
                venue,
                symbol,
                intent.side.as_str(),
                intent.size
            ),
            FlattenOutcome::Failed(e) => {
                error!("{} shutdown for {}: flatten failed: {}", venue, symbol, e)
            }
            // Nothing to flatten
            FlattenOutcome::Flat | FlattenOutcome::NoPosition => {}
        }

        info!("{} exchange shutdown sequence complete for {}.", venue, symbol);
    }
}
