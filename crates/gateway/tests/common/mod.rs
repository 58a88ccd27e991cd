//! Shared fixtures for gateway integration tests

#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, Once};
use std::time::Duration;

use async_trait::async_trait;
use log::{Level, LevelFilter, Log, Metadata, Record};
use meridian_gateway::{Bybit, ExchangeAdapter};
use meridian_ports::{Request, RequestClient, TransportError};
use serde_json::{Value, json};

type Responder = Box<dyn Fn(&Request) -> Result<Value, TransportError> + Send + Sync>;

/// Recording request client with scripted responses
pub struct MockClient {
    requests: Mutex<Vec<Request>>,
    completed: AtomicUsize,
    /// Request N (0-based) sleeps `step * (N + 1)` before answering
    step: Duration,
    responder: Responder,
}

impl MockClient {
    pub fn new(
        responder: impl Fn(&Request) -> Result<Value, TransportError> + Send + Sync + 'static,
    ) -> Self {
        Self {
            requests: Mutex::new(Vec::new()),
            completed: AtomicUsize::new(0),
            step: Duration::ZERO,
            responder: Box::new(responder),
        }
    }

    /// Answers every request with a successful empty result
    pub fn ok() -> Self {
        Self::new(|_| Ok(json!({"retCode": 0, "retMsg": "OK", "result": {}})))
    }

    pub fn with_step(mut self, step: Duration) -> Self {
        self.step = step;
        self
    }

    pub fn requests(&self) -> Vec<Request> {
        self.requests.lock().unwrap().clone()
    }

    pub fn requests_to(&self, path: &str) -> Vec<Request> {
        self.requests()
            .into_iter()
            .filter(|r| r.url.ends_with(path))
            .collect()
    }

    /// Requests that have received their response
    pub fn completed(&self) -> usize {
        self.completed.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl RequestClient for MockClient {
    async fn request(&self, request: Request) -> Result<Value, TransportError> {
        let index = {
            let mut requests = self.requests.lock().unwrap();
            requests.push(request.clone());
            requests.len() - 1
        };

        if !self.step.is_zero() {
            tokio::time::sleep(self.step * (index as u32 + 1)).await;
        }

        let response = (self.responder)(&request);
        self.completed.fetch_add(1, Ordering::SeqCst);
        response
    }
}

pub type MockAdapter = ExchangeAdapter<Bybit, Arc<MockClient>>;

pub fn adapter(client: &Arc<MockClient>, symbol: &str) -> MockAdapter {
    ExchangeAdapter::new(Bybit::mainnet(), Arc::clone(client), symbol)
}

/// Bybit instrument-info response listing `(symbol, tick_size, qty_step)` entries
pub fn instruments_response(entries: &[(&str, &str, &str)]) -> Value {
    let list: Vec<Value> = entries
        .iter()
        .map(|(symbol, tick, step)| {
            json!({
                "symbol": symbol,
                "status": "Trading",
                "priceFilter": {"minPrice": "0.10", "tickSize": tick},
                "lotSizeFilter": {"maxOrderQty": "100", "minOrderQty": "0.001", "qtyStep": step}
            })
        })
        .collect();
    json!({"retCode": 0, "retMsg": "OK", "result": {"category": "linear", "list": list}})
}

pub fn transport_failure() -> TransportError {
    TransportError::Http {
        status: 502,
        body: "bad gateway".to_string(),
    }
}

// === Log capture ===
//
// Tests run in parallel inside one process and share the global logger, so
// every test uses its own symbol and filters captured lines by it.

struct CaptureLogger;

static RECORDS: Mutex<Vec<(Level, String)>> = Mutex::new(Vec::new());
static INIT: Once = Once::new();

impl Log for CaptureLogger {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        if let Ok(mut records) = RECORDS.lock() {
            records.push((record.level(), record.args().to_string()));
        }
    }

    fn flush(&self) {}
}

static LOGGER: CaptureLogger = CaptureLogger;

pub fn init_logging() {
    INIT.call_once(|| {
        let _ = log::set_logger(&LOGGER);
        log::set_max_level(LevelFilter::Debug);
    });
}

/// Captured lines at `level` containing every needle
pub fn logged(level: Level, needles: &[&str]) -> Vec<String> {
    RECORDS
        .lock()
        .unwrap()
        .iter()
        .filter(|(l, msg)| *l == level && needles.iter().all(|n| msg.contains(n)))
        .map(|(_, msg)| msg.clone())
        .collect()
}
