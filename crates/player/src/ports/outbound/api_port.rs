//! API Port - typed HTTP boundary to the game server

use serde::{de::DeserializeOwned, Serialize};
use thiserror::Error;

/// Response body delivered chunk by chunk (`text/event-stream`).
#[cfg(not(target_arch = "wasm32"))]
pub type ByteStream = futures_util::stream::BoxStream<'static, Result<Vec<u8>, ApiError>>;

/// Response body delivered chunk by chunk (`text/event-stream`).
#[cfg(target_arch = "wasm32")]
pub type ByteStream = futures_util::stream::LocalBoxStream<'static, Result<Vec<u8>, ApiError>>;

/// Errors returned by HTTP adapters
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ApiError {
    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("HTTP {status}: {body}")]
    HttpError { status: u16, body: String },

    #[error("Failed to parse response: {0}")]
    ParseError(String),

    #[error("Failed to serialize request: {0}")]
    SerializeError(String),

    #[error("Stream interrupted: {0}")]
    StreamError(String),
}

impl ApiError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::HttpError { status: 404, .. })
    }
}

/// Typed request helpers used by the application services.
///
/// Generic methods make this trait unsuitable for `dyn`; adapters implement
/// [`super::RawApiPort`] and the application layer wraps it.
#[cfg_attr(not(target_arch = "wasm32"), async_trait::async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait::async_trait(?Send))]
pub trait ApiPort: Send + Sync {
    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError>;

    /// Like [`ApiPort::get`], but a 404 yields `Ok(None)`.
    async fn get_optional<T: DeserializeOwned>(&self, path: &str) -> Result<Option<T>, ApiError>;

    async fn post<T: DeserializeOwned, B: Serialize + Send + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError>;

    /// POSTs a JSON body and hands back the raw response body as it arrives.
    async fn post_stream<B: Serialize + Send + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<ByteStream, ApiError>;
}
