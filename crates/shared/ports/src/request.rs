use std::collections::BTreeMap;
use std::fmt;

/// Venue request shape: ordered key/value pairs
///
/// Used as query parameters for reads and as the JSON body for writes.
pub type Payload = BTreeMap<String, String>;

/// HTTP methods used by venue endpoints
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    Get,
    Post,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
        }
    }

    /// Whether arguments travel in the body rather than the query string
    pub fn has_body(&self) -> bool {
        matches!(self, HttpMethod::Post)
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A fully resolved request handed to a `RequestClient`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    pub url: String,
    pub method: HttpMethod,
    pub headers: Payload,
    pub params: Option<Payload>,
    pub body: Option<Payload>,
    /// Requires account authentication
    pub signed: bool,
}

impl Request {
    pub fn new(url: impl Into<String>, method: HttpMethod) -> Self {
        Self {
            url: url.into(),
            method,
            headers: Payload::new(),
            params: None,
            body: None,
            signed: false,
        }
    }

    pub fn with_params(mut self, params: Payload) -> Self {
        self.params = Some(params);
        self
    }

    pub fn with_body(mut self, body: Payload) -> Self {
        self.body = Some(body);
        self
    }

    pub fn signed(mut self, signed: bool) -> Self {
        self.signed = signed;
        self
    }
}
