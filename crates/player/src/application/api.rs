//! Typed API wrapper for application services.
//!
//! The composition root stores an object-safe `RawApiPort` implementation so
//! the UI and services never name adapter types. `Api` wraps that
//! `Arc<dyn RawApiPort>` and implements the typed `ApiPort` interface via
//! serde_json conversions.

use serde::{de::DeserializeOwned, Serialize};
use std::sync::Arc;

use crate::ports::outbound::{ApiError, ApiPort, ByteStream, RawApiPort};

#[derive(Clone)]
pub struct Api {
    raw: Arc<dyn RawApiPort>,
}

impl Api {
    pub fn new(raw: Arc<dyn RawApiPort>) -> Self {
        Self { raw }
    }
}

fn to_body<B: Serialize>(body: &B) -> Result<serde_json::Value, ApiError> {
    serde_json::to_value(body).map_err(|e| ApiError::SerializeError(e.to_string()))
}

#[cfg_attr(not(target_arch = "wasm32"), async_trait::async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait::async_trait(?Send))]
impl ApiPort for Api {
    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let value = self.raw.get_json(path).await?;
        serde_json::from_value(value).map_err(|e| ApiError::ParseError(e.to_string()))
    }

    async fn get_optional<T: DeserializeOwned>(&self, path: &str) -> Result<Option<T>, ApiError> {
        let maybe_value = self.raw.get_optional_json(path).await?;
        match maybe_value {
            None => Ok(None),
            Some(value) => serde_json::from_value(value)
                .map(Some)
                .map_err(|e| ApiError::ParseError(e.to_string())),
        }
    }

    async fn post<T: DeserializeOwned, B: Serialize + Send + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let body_value = to_body(body)?;
        let value = self.raw.post_json(path, &body_value).await?;
        serde_json::from_value(value).map_err(|e| ApiError::ParseError(e.to_string()))
    }

    async fn post_stream<B: Serialize + Send + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<ByteStream, ApiError> {
        let body_value = to_body(body)?;
        self.raw.post_stream(path, &body_value).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::outbound::MockRawApiPort;
    use dugout_shared::{routes, StatsResponse, UsernameRequest};
    use serde_json::json;

    #[tokio::test]
    async fn get_deserializes_the_raw_value() {
        let mut raw = MockRawApiPort::new();
        raw.expect_get_json()
            .withf(|path| path == "/api/game/stats?username=kim")
            .times(1)
            .returning(|_| Ok(json!({"success": true, "month": 4, "stats": {"mental": 40}})));

        let api = Api::new(Arc::new(raw));
        let stats: StatsResponse = api.get(&routes::stats("kim")).await.unwrap();
        assert_eq!(stats.snapshot.current_month, Some(4));
        assert_eq!(stats.snapshot.stats.mental, Some(40));
    }

    #[tokio::test]
    async fn shape_mismatch_is_a_parse_error() {
        let mut raw = MockRawApiPort::new();
        raw.expect_post_json()
            .withf(|path, body| path == routes::GAME_ADVANCE && body == &json!({"username": "kim"}))
            .returning(|_, _| Ok(json!({"success": "yes"})));

        let api = Api::new(Arc::new(raw));
        let result: Result<StatsResponse, ApiError> = api
            .post(
                routes::GAME_ADVANCE,
                &UsernameRequest {
                    username: "kim".into(),
                },
            )
            .await;
        assert!(matches!(result, Err(ApiError::ParseError(_))));
    }

    #[tokio::test]
    async fn missing_optional_resource_is_none() {
        let mut raw = MockRawApiPort::new();
        raw.expect_get_optional_json().returning(|_| Ok(None));

        let api = Api::new(Arc::new(raw));
        let result: Option<StatsResponse> = api.get_optional("/api/anything").await.unwrap();
        assert!(result.is_none());
    }
}
