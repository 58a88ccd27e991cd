//! Venue-agnostic exchange adapter
//!
//! Every trading operation follows the same pass-through contract: resolve the
//! endpoint, format the arguments, execute through the request client, hand back
//! the raw decoded response. Nothing is retried, validated or normalized on the
//! way back, and failures propagate unchanged.

use async_trait::async_trait;
use log::debug;
use meridian_core::{AdapterState, InstrumentRules, OrderIntent, Position, Price, Quantity};
use meridian_ports::{
    Endpoints, Exchange, ExchangeError, ExchangeResult, Formats, Operation, Payload, Request,
    RequestClient, Venue,
};
use parking_lot::RwLock;
use serde_json::Value;

/// Exchange adapter for one venue and one configured symbol
///
/// The adapter exclusively owns its [`AdapterState`]. Warmup is expected to
/// finish before trading begins and shutdown to run once at end of life; the
/// lock only keeps individual reads and writes consistent, it does not order
/// the lifecycle.
pub struct ExchangeAdapter<V, C> {
    pub(crate) venue: V,
    pub(crate) client: C,
    pub(crate) state: RwLock<AdapterState>,
}

impl<V: Venue, C: RequestClient> ExchangeAdapter<V, C> {
    pub fn new(venue: V, client: C, symbol: impl Into<String>) -> Self {
        Self {
            venue,
            client,
            state: RwLock::new(AdapterState::new(symbol)),
        }
    }

    pub fn venue(&self) -> &V {
        &self.venue
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    /// Configured trading symbol
    pub fn symbol(&self) -> String {
        self.state.read().symbol.clone()
    }

    /// Snapshot of the adapter state
    pub fn state(&self) -> AdapterState {
        self.state.read().clone()
    }

    /// Instrument rules stored by warmup, if it succeeded
    pub fn instrument_rules(&self) -> Option<InstrumentRules> {
        self.state.read().instrument_rules
    }

    pub fn position(&self) -> Option<Position> {
        self.state.read().position
    }

    /// Record the believed net position (used by fill processing)
    pub fn set_position(&self, position: Option<Position>) {
        self.state.write().position = position;
    }

    /// Refresh the believed position from the venue
    pub async fn sync_position(&self) -> ExchangeResult<Position> {
        let symbol = self.symbol();
        let response = self.get_position(&symbol).await?;
        let position = self.venue.position(&response, &symbol)?;
        self.set_position(Some(position));
        debug!(
            "{} position for {} synced: {}",
            self.venue.name(),
            symbol,
            position.size
        );
        Ok(position)
    }

    /// Resolve, build and execute one operation
    async fn dispatch(&self, operation: Operation, payload: Payload) -> ExchangeResult<Value> {
        let endpoints = self.venue.endpoints();
        let endpoint = endpoints.endpoint(operation);
        let url = format!("{}{}", endpoints.base_url(), endpoint.path);

        let request = Request::new(url, endpoint.method).signed(operation.requires_auth());
        let request = if endpoint.method.has_body() {
            request.with_body(payload)
        } else {
            request.with_params(payload)
        };

        debug!(
            "{} {} {} {}",
            self.venue.name(),
            operation.as_str(),
            request.method,
            request.url
        );

        Ok(self.client.request(request).await?)
    }

    /// Snap an outgoing order onto the instrument grid once rules are known
    fn prepare(&self, intent: &OrderIntent) -> ExchangeResult<OrderIntent> {
        match self.instrument_rules() {
            Some(rules) => intent
                .normalized(&rules)
                .ok_or_else(|| below_one_lot(intent.size, &rules, &intent.symbol)),
            None => Ok(intent.clone()),
        }
    }

    /// Format and send an order exactly as given, without grid rounding
    pub(crate) async fn submit(&self, intent: &OrderIntent) -> ExchangeResult<Value> {
        let payload = self.venue.formats().create_order(intent);
        self.dispatch(Operation::CreateOrder, payload).await
    }
}

fn below_one_lot(size: Quantity, rules: &InstrumentRules, symbol: &str) -> ExchangeError {
    ExchangeError::Validation(format!(
        "size {} is below one lot ({}) for {}",
        size,
        rules.lot_size(),
        symbol
    ))
}

#[async_trait]
impl<V: Venue, C: RequestClient> Exchange for ExchangeAdapter<V, C> {
    async fn create_order(&self, intent: &OrderIntent) -> ExchangeResult<Value> {
        let intent = self.prepare(intent)?;
        self.submit(&intent).await
    }

    async fn amend_order(
        &self,
        symbol: &str,
        order_id: &str,
        size: Quantity,
        price: Price,
    ) -> ExchangeResult<Value> {
        let (size, price) = match self.instrument_rules() {
            Some(rules) => {
                let rounded = rules.round_size(size);
                if rounded <= Quantity::ZERO {
                    return Err(below_one_lot(size, &rules, symbol));
                }
                (rounded, rules.round_price(price))
            }
            None => (size, price),
        };
        let payload = self
            .venue
            .formats()
            .amend_order(symbol, order_id, size, price);
        self.dispatch(Operation::AmendOrder, payload).await
    }

    async fn cancel_order(&self, symbol: &str, order_id: &str) -> ExchangeResult<Value> {
        let payload = self.venue.formats().cancel_order(symbol, order_id);
        self.dispatch(Operation::CancelOrder, payload).await
    }

    async fn cancel_all_orders(&self, symbol: &str) -> ExchangeResult<Value> {
        let payload = self.venue.formats().cancel_all_orders(symbol);
        self.dispatch(Operation::CancelAllOrders, payload).await
    }

    async fn get_orderbook(&self, symbol: &str) -> ExchangeResult<Value> {
        let payload = self.venue.formats().get_orderbook(symbol);
        self.dispatch(Operation::GetOrderbook, payload).await
    }

    async fn get_trades(&self, symbol: &str) -> ExchangeResult<Value> {
        let payload = self.venue.formats().get_trades(symbol);
        self.dispatch(Operation::GetTrades, payload).await
    }

    async fn get_ohlcv(&self, symbol: &str, interval: u32) -> ExchangeResult<Value> {
        let payload = self.venue.formats().get_ohlcv(symbol, interval);
        self.dispatch(Operation::GetOhlcv, payload).await
    }

    async fn get_ticker(&self, symbol: &str) -> ExchangeResult<Value> {
        let payload = self.venue.formats().get_ticker(symbol);
        self.dispatch(Operation::GetTicker, payload).await
    }

    async fn get_open_orders(&self, symbol: &str) -> ExchangeResult<Value> {
        let payload = self.venue.formats().get_open_orders(symbol);
        self.dispatch(Operation::GetOpenOrders, payload).await
    }

    async fn get_position(&self, symbol: &str) -> ExchangeResult<Value> {
        let payload = self.venue.formats().get_position(symbol);
        self.dispatch(Operation::GetPosition, payload).await
    }

    async fn get_instrument_info(&self, symbol: &str) -> ExchangeResult<Value> {
        let payload = self.venue.formats().get_instrument_info(symbol);
        self.dispatch(Operation::GetInstrumentInfo, payload).await
    }

    async fn warmup(&self) {
        self.run_warmup().await
    }

    async fn shutdown(&self) {
        self.run_shutdown().await
    }
}
