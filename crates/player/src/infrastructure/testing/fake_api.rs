//! Scripted `RawApiPort` for flow tests.
//!
//! Responses are queued per path (query included). The last queued response
//! for a path is reused once the queue runs dry; unscripted paths answer 404.
//! `hold` parks the next call to a path until the returned sender fires,
//! which lets tests interleave a second action with one still in flight.

use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;

use futures_channel::oneshot;
use futures_util::stream::{self, StreamExt};
use serde_json::Value;

use crate::ports::outbound::{ApiError, ByteStream, RawApiPort};

/// A canned answer.
#[derive(Debug, Clone)]
pub enum Scripted {
    Json(Value),
    Error(ApiError),
    /// Body chunks of a streaming response, delivered as given
    Stream(Vec<Result<Vec<u8>, ApiError>>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct RecordedCall {
    pub method: &'static str,
    pub path: String,
    pub body: Option<Value>,
}

#[derive(Default)]
pub struct FakeApi {
    routes: Mutex<HashMap<String, VecDeque<Scripted>>>,
    holds: Mutex<HashMap<String, oneshot::Receiver<()>>>,
    calls: Mutex<Vec<RecordedCall>>,
}

impl FakeApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on(&self, path: impl Into<String>, response: Scripted) -> &Self {
        if let Ok(mut routes) = self.routes.lock() {
            routes.entry(path.into()).or_default().push_back(response);
        }
        self
    }

    pub fn on_json(&self, path: impl Into<String>, value: Value) -> &Self {
        self.on(path, Scripted::Json(value))
    }

    pub fn on_stream(&self, path: impl Into<String>, chunks: Vec<Vec<u8>>) -> &Self {
        self.on(path, Scripted::Stream(chunks.into_iter().map(Ok).collect()))
    }

    /// Parks the next call to `path` until the sender fires (or is dropped).
    pub fn hold(&self, path: impl Into<String>) -> oneshot::Sender<()> {
        let (tx, rx) = oneshot::channel();
        if let Ok(mut holds) = self.holds.lock() {
            holds.insert(path.into(), rx);
        }
        tx
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().map(|c| c.clone()).unwrap_or_default()
    }

    /// Recorded calls whose path starts with `prefix`.
    pub fn calls_to(&self, prefix: &str) -> Vec<RecordedCall> {
        self.calls()
            .into_iter()
            .filter(|c| c.path.starts_with(prefix))
            .collect()
    }

    async fn respond(
        &self,
        method: &'static str,
        path: &str,
        body: Option<&Value>,
    ) -> Result<Scripted, ApiError> {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(RecordedCall {
                method,
                path: path.to_string(),
                body: body.cloned(),
            });
        }

        let hold = self.holds.lock().ok().and_then(|mut h| h.remove(path));
        if let Some(rx) = hold {
            let _ = rx.await;
        }

        let scripted = self.routes.lock().ok().and_then(|mut routes| {
            let queue = routes.get_mut(path)?;
            if queue.len() > 1 {
                queue.pop_front()
            } else {
                queue.front().cloned()
            }
        });
        scripted.ok_or_else(|| ApiError::HttpError {
            status: 404,
            body: format!("no scripted response for {method} {path}"),
        })
    }

    fn into_json(scripted: Scripted) -> Result<Value, ApiError> {
        match scripted {
            Scripted::Json(value) => Ok(value),
            Scripted::Error(e) => Err(e),
            Scripted::Stream(_) => Err(ApiError::ParseError("scripted a stream".to_string())),
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn byte_stream(chunks: Vec<Result<Vec<u8>, ApiError>>) -> ByteStream {
    stream::iter(chunks).boxed()
}

#[cfg(target_arch = "wasm32")]
fn byte_stream(chunks: Vec<Result<Vec<u8>, ApiError>>) -> ByteStream {
    stream::iter(chunks).boxed_local()
}

#[cfg_attr(not(target_arch = "wasm32"), async_trait::async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait::async_trait(?Send))]
impl RawApiPort for FakeApi {
    async fn get_json(&self, path: &str) -> Result<Value, ApiError> {
        Self::into_json(self.respond("GET", path, None).await?)
    }

    async fn get_optional_json(&self, path: &str) -> Result<Option<Value>, ApiError> {
        match self.respond("GET", path, None).await {
            Err(e) if e.is_not_found() => Ok(None),
            Err(e) => Err(e),
            Ok(scripted) => Self::into_json(scripted).map(Some),
        }
    }

    async fn post_json(&self, path: &str, body: &Value) -> Result<Value, ApiError> {
        Self::into_json(self.respond("POST", path, Some(body)).await?)
    }

    async fn post_stream(&self, path: &str, body: &Value) -> Result<ByteStream, ApiError> {
        match self.respond("POST", path, Some(body)).await? {
            Scripted::Stream(chunks) => Ok(byte_stream(chunks)),
            Scripted::Error(e) => Err(e),
            Scripted::Json(_) => Err(ApiError::ParseError("scripted JSON for a stream".to_string())),
        }
    }
}
