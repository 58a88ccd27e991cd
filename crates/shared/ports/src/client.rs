use async_trait::async_trait;
use serde_json::Value;

use crate::error::TransportError;
use crate::request::Request;

/// Port for executing venue HTTP requests
///
/// Implementations own transport, authentication headers and decoding. The
/// decoded body is returned as-is; callers decide what to read from it.
#[async_trait]
pub trait RequestClient: Send + Sync {
    async fn request(&self, request: Request) -> Result<Value, TransportError>;
}

#[async_trait]
impl<T: RequestClient + ?Sized> RequestClient for std::sync::Arc<T> {
    async fn request(&self, request: Request) -> Result<Value, TransportError> {
        (**self).request(request).await
    }
}
