//! Browser HTTP client on gloo-net
//!
//! Streaming bodies are read through the `ReadableStream` reader of the
//! fetch response.

use async_trait::async_trait;
use futures_util::stream::{self, StreamExt};
use gloo_net::http::{Request, RequestBuilder, Response};
use serde_json::Value;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::ReadableStreamDefaultReader;

use super::join_url;
use crate::ports::outbound::{ApiError, ByteStream, RawApiPort};

#[derive(Clone)]
pub struct WasmApiClient {
    base_url: String,
}

impl WasmApiClient {
    /// Browser fetch has no per-request timeout; `_timeout` is accepted so
    /// both targets share a constructor.
    pub fn new(base_url: &str, _timeout: std::time::Duration) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        join_url(&self.base_url, path)
    }

    async fn ensure_success(response: Response) -> Result<Response, ApiError> {
        if response.ok() {
            return Ok(response);
        }
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        Err(ApiError::HttpError { status, body })
    }

    async fn read_json(response: Response) -> Result<Value, ApiError> {
        let response = Self::ensure_success(response).await?;
        response
            .json()
            .await
            .map_err(|e| ApiError::ParseError(e.to_string()))
    }

    async fn send_get(&self, path: &str) -> Result<Response, ApiError> {
        Request::get(&self.url(path))
            .send()
            .await
            .map_err(|e| ApiError::RequestFailed(e.to_string()))
    }

    async fn send_post(&self, request: RequestBuilder, body: &Value) -> Result<Response, ApiError> {
        request
            .json(body)
            .map_err(|e| ApiError::SerializeError(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::RequestFailed(e.to_string()))
    }
}

fn read_field(result: &JsValue, name: &str) -> JsValue {
    js_sys::Reflect::get(result, &JsValue::from_str(name)).unwrap_or(JsValue::UNDEFINED)
}

fn reader_stream(reader: ReadableStreamDefaultReader) -> ByteStream {
    stream::unfold(Some(reader), |state| async move {
        let reader = state?;
        match JsFuture::from(reader.read()).await {
            Ok(result) => {
                if read_field(&result, "done").as_bool().unwrap_or(true) {
                    return None;
                }
                let chunk = js_sys::Uint8Array::new(&read_field(&result, "value")).to_vec();
                Some((Ok(chunk), Some(reader)))
            }
            Err(e) => Some((Err(ApiError::StreamError(format!("{e:?}"))), None)),
        }
    })
    .boxed_local()
}

#[async_trait(?Send)]
impl RawApiPort for WasmApiClient {
    async fn get_json(&self, path: &str) -> Result<Value, ApiError> {
        let response = self.send_get(path).await?;
        Self::read_json(response).await
    }

    async fn get_optional_json(&self, path: &str) -> Result<Option<Value>, ApiError> {
        let response = self.send_get(path).await?;
        if response.status() == 404 {
            return Ok(None);
        }
        Self::read_json(response).await.map(Some)
    }

    async fn post_json(&self, path: &str, body: &Value) -> Result<Value, ApiError> {
        let response = self.send_post(Request::post(&self.url(path)), body).await?;
        Self::read_json(response).await
    }

    async fn post_stream(&self, path: &str, body: &Value) -> Result<ByteStream, ApiError> {
        let request = Request::post(&self.url(path)).header("Accept", "text/event-stream");
        let response = Self::ensure_success(self.send_post(request, body).await?).await?;

        let body = response
            .body()
            .ok_or_else(|| ApiError::StreamError("response has no body".to_string()))?;
        let reader: ReadableStreamDefaultReader = body.get_reader().unchecked_into();
        Ok(reader_stream(reader))
    }
}
