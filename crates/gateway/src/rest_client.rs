use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use log::debug;
use meridian_ports::{HttpMethod, Request, RequestClient, TransportError};
use reqwest::{Client, Method};
use serde_json::Value;

pub const API_KEY_HEADER: &str = "X-BAPI-API-KEY";
pub const TIMESTAMP_HEADER: &str = "X-BAPI-TIMESTAMP";
pub const RECV_WINDOW_HEADER: &str = "X-BAPI-RECV-WINDOW";

/// Settings for the HTTP transport
#[derive(Debug, Clone)]
pub struct RestClientConfig {
    /// Key attached to signed requests
    pub api_key: Option<String>,
    /// How long the venue accepts a signed request after its timestamp
    pub recv_window_ms: u64,
    /// Per-request deadline
    pub timeout: Duration,
}

impl Default for RestClientConfig {
    fn default() -> Self {
        RestClientConfig {
            api_key: None,
            recv_window_ms: 5000,
            timeout: Duration::from_secs(10),
        }
    }
}

/// REST transport for venue requests
/// Infrastructure component - handles HTTP communication
///
/// Signed requests carry the API key, a millisecond timestamp and the receive
/// window as headers; signature computation is left to the deployment.
#[derive(Clone)]
pub struct RestClient {
    client: Client,
    api_key: Option<String>,
    recv_window_ms: u64,
}

impl RestClient {
    pub fn new(config: RestClientConfig) -> Result<Self, TransportError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| TransportError::Network(e.to_string()))?;

        Ok(RestClient {
            client,
            api_key: config.api_key.filter(|key| !key.is_empty()),
            recv_window_ms: config.recv_window_ms,
        })
    }

    pub fn has_credentials(&self) -> bool {
        self.api_key.is_some()
    }

    /// Turn a resolved request into an HTTP request without sending it
    pub fn build(&self, request: &Request) -> Result<reqwest::Request, TransportError> {
        let method = match request.method {
            HttpMethod::Get => Method::GET,
            HttpMethod::Post => Method::POST,
        };

        let mut builder = self.client.request(method, request.url.as_str());

        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }

        if request.signed {
            let api_key = self
                .api_key
                .as_deref()
                .ok_or(TransportError::MissingCredentials)?;
            builder = builder
                .header(API_KEY_HEADER, api_key)
                .header(TIMESTAMP_HEADER, Utc::now().timestamp_millis().to_string())
                .header(RECV_WINDOW_HEADER, self.recv_window_ms.to_string());
        }

        if let Some(params) = &request.params {
            builder = builder.query(params);
        }

        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        builder
            .build()
            .map_err(|e| TransportError::Network(e.to_string()))
    }
}

#[async_trait]
impl RequestClient for RestClient {
    async fn request(&self, request: Request) -> Result<Value, TransportError> {
        let http_request = self.build(&request)?;
        debug!("{} {}", request.method, http_request.url());

        let resp = self
            .client
            .execute(http_request)
            .await
            .map_err(|e| TransportError::Network(e.to_string()))?;

        let status = resp.status();
        let text = resp
            .text()
            .await
            .map_err(|e| TransportError::Network(e.to_string()))?;

        if !status.is_success() {
            return Err(TransportError::Http {
                status: status.as_u16(),
                body: text,
            });
        }

        serde_json::from_str(&text).map_err(|e| TransportError::Decode(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use meridian_ports::Payload;

    fn client(api_key: Option<&str>) -> RestClient {
        RestClient::new(RestClientConfig {
            api_key: api_key.map(str::to_string),
            ..Default::default()
        })
        .unwrap()
    }

    fn payload(pairs: &[(&str, &str)]) -> Payload {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_unsigned_get_puts_params_in_query() {
        let request = Request::new("https://api.bybit.com/v5/market/tickers", HttpMethod::Get)
            .with_params(payload(&[("category", "linear"), ("symbol", "BTCUSDT")]));

        let built = client(None).build(&request).unwrap();

        assert_eq!(built.method(), &Method::GET);
        assert_eq!(built.url().query(), Some("category=linear&symbol=BTCUSDT"));
        assert!(built.headers().get(API_KEY_HEADER).is_none());
        assert!(built.body().is_none());
    }

    #[test]
    fn test_signed_post_carries_auth_headers_and_json_body() {
        let request = Request::new("https://api.bybit.com/v5/order/cancel-all", HttpMethod::Post)
            .with_body(payload(&[("category", "linear"), ("symbol", "BTCUSDT")]))
            .signed(true);

        let built = client(Some("key-1")).build(&request).unwrap();

        assert_eq!(built.method(), &Method::POST);
        assert_eq!(built.headers()[API_KEY_HEADER], "key-1");
        assert_eq!(built.headers()[RECV_WINDOW_HEADER], "5000");
        assert!(built.headers().contains_key(TIMESTAMP_HEADER));

        let body = built.body().and_then(|b| b.as_bytes()).unwrap();
        let json: Value = serde_json::from_slice(body).unwrap();
        assert_eq!(json["symbol"], "BTCUSDT");
    }

    #[test]
    fn test_signed_request_without_key_fails() {
        let request =
            Request::new("https://api.bybit.com/v5/position/list", HttpMethod::Get).signed(true);

        let err = client(Some("")).build(&request).unwrap_err();
        assert_eq!(err, TransportError::MissingCredentials);
    }
}
