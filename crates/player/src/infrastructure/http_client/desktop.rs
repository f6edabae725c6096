//! Desktop HTTP client on reqwest

use std::time::Duration;

use async_trait::async_trait;
use futures_util::StreamExt;
use reqwest::{header, Client, Response, StatusCode};
use serde_json::Value;

use super::join_url;
use crate::ports::outbound::{ApiError, ByteStream, RawApiPort};

/// Client for the game server's JSON and SSE endpoints
#[derive(Clone)]
pub struct DesktopApiClient {
    client: Client,
    base_url: String,
}

impl DesktopApiClient {
    pub fn new(base_url: &str, timeout: Duration) -> Self {
        let client = client_builder(timeout)
            .build()
            .unwrap_or_else(|_| Client::new());
        Self::with_client(base_url, client)
    }

    fn with_client(base_url: &str, client: Client) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        join_url(&self.base_url, path)
    }

    async fn send(&self, request: reqwest::RequestBuilder) -> Result<Response, ApiError> {
        request
            .send()
            .await
            .map_err(|e| ApiError::RequestFailed(e.to_string()))
    }

    async fn ensure_success(response: Response) -> Result<Response, ApiError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        Err(ApiError::HttpError {
            status: status.as_u16(),
            body,
        })
    }

    async fn read_json(response: Response) -> Result<Value, ApiError> {
        let response = Self::ensure_success(response).await?;
        response
            .json()
            .await
            .map_err(|e| ApiError::ParseError(e.to_string()))
    }
}

/// `timeout` bounds connecting and each read, not the whole exchange, so a
/// long reply stream stays open as long as bytes keep arriving.
fn client_builder(timeout: Duration) -> reqwest::ClientBuilder {
    Client::builder()
        .connect_timeout(timeout)
        .read_timeout(timeout)
}

#[async_trait]
impl RawApiPort for DesktopApiClient {
    async fn get_json(&self, path: &str) -> Result<Value, ApiError> {
        let response = self.send(self.client.get(self.url(path))).await?;
        Self::read_json(response).await
    }

    async fn get_optional_json(&self, path: &str) -> Result<Option<Value>, ApiError> {
        let response = self.send(self.client.get(self.url(path))).await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        Self::read_json(response).await.map(Some)
    }

    async fn post_json(&self, path: &str, body: &Value) -> Result<Value, ApiError> {
        let response = self
            .send(self.client.post(self.url(path)).json(body))
            .await?;
        Self::read_json(response).await
    }

    async fn post_stream(&self, path: &str, body: &Value) -> Result<ByteStream, ApiError> {
        let request = self
            .client
            .post(self.url(path))
            .header(header::ACCEPT, "text/event-stream")
            .json(body);
        let response = Self::ensure_success(self.send(request).await?).await?;

        tracing::debug!(path, "Reading event stream");
        let chunks = response.bytes_stream().map(|chunk| {
            chunk
                .map(|bytes| bytes.to_vec())
                .map_err(|e| ApiError::StreamError(e.to_string()))
        });
        Ok(chunks.boxed())
    }
}
