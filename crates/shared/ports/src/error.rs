use thiserror::Error;

/// Failures raised by a `RequestClient`
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransportError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("HTTP {status}: {body}")]
    Http { status: u16, body: String },

    #[error("Decode error: {0}")]
    Decode(String),

    #[error("Missing API credentials for signed request")]
    MissingCredentials,
}

/// Errors surfaced by exchange adapters
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExchangeError {
    #[error("Transport error: {0}")]
    Transport(#[from] TransportError),

    /// Expected state or response field is not populated
    #[error("Missing field: {0}")]
    MissingField(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Symbol not found: {0}")]
    SymbolNotFound(String),
}

impl ExchangeError {
    pub fn missing_field(field: impl Into<String>) -> Self {
        ExchangeError::MissingField(field.into())
    }

    pub fn is_missing_field(&self) -> bool {
        matches!(self, ExchangeError::MissingField(_))
    }
}

pub type ExchangeResult<T> = std::result::Result<T, ExchangeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transport_error_converts() {
        let err: ExchangeError = TransportError::Http {
            status: 503,
            body: "unavailable".to_string(),
        }
        .into();
        assert_eq!(err.to_string(), "Transport error: HTTP 503: unavailable");
        assert!(!err.is_missing_field());
    }

    #[test]
    fn test_missing_field() {
        let err = ExchangeError::missing_field("position");
        assert!(err.is_missing_field());
        assert_eq!(err.to_string(), "Missing field: position");
    }
}
