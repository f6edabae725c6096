//! Raw API Port - Object-safe HTTP boundary
//!
//! `ApiPort` is generic over request/response types which makes it not
//! object-safe. The composition root needs something it can store behind
//! `Arc<dyn ...>`, so adapters implement this JSON-level trait and the
//! application layer provides the typed wrapper on top.

use serde_json::Value;

use super::{ApiError, ByteStream};

#[cfg_attr(test, mockall::automock)]
#[cfg_attr(not(target_arch = "wasm32"), async_trait::async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait::async_trait(?Send))]
pub trait RawApiPort: Send + Sync {
    async fn get_json(&self, path: &str) -> Result<Value, ApiError>;

    /// Returns `Ok(None)` on HTTP 404.
    async fn get_optional_json(&self, path: &str) -> Result<Option<Value>, ApiError>;

    async fn post_json(&self, path: &str, body: &Value) -> Result<Value, ApiError>;

    /// Non-2xx statuses are reported before any body byte is yielded.
    async fn post_stream(&self, path: &str, body: &Value) -> Result<ByteStream, ApiError>;
}
