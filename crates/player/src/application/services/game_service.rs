//! Game Service - stats, hints, moments, month advance and event choices

use dugout_domain::{GameStateSnapshot, Moment};
use dugout_shared::{
    routes, AdvanceResponse, EventChoiceRequest, EventChoiceResponse, HintsResponse,
    MomentsResponse, StatsResponse, UsernameRequest,
};

use crate::application::ServiceError;
use crate::ports::outbound::ApiPort;

#[derive(Clone)]
pub struct GameService<A: ApiPort> {
    api: A,
}

impl<A: ApiPort> GameService<A> {
    pub fn new(api: A) -> Self {
        Self { api }
    }

    pub async fn stats(&self, username: &str) -> Result<GameStateSnapshot, ServiceError> {
        let response: StatsResponse = self.api.get(&routes::stats(username)).await?;
        if !response.success {
            return Err(ServiceError::rejected(
                response.error,
                None,
                "게임 상태를 불러올 수 없습니다.",
            ));
        }
        Ok(response.snapshot)
    }

    pub async fn hints(&self, username: &str) -> Result<Vec<String>, ServiceError> {
        let response: HintsResponse = self.api.get(&routes::hints(username)).await?;
        if !response.success {
            return Err(ServiceError::rejected(
                response.error,
                None,
                "추천 응답을 불러올 수 없습니다.",
            ));
        }
        Ok(response.hints)
    }

    /// Special moments; falls back to the older `/api/moments` route on 404.
    pub async fn moments(&self, username: &str) -> Result<Vec<Moment>, ServiceError> {
        let response: MomentsResponse =
            match self.api.get_optional(&routes::moments(username)).await? {
                Some(response) => response,
                None => {
                    tracing::debug!("Moments route not found, trying fallback");
                    self.api.get(&routes::moments_fallback(username)).await?
                }
            };
        if !response.success {
            return Err(ServiceError::rejected(
                response.error,
                None,
                "특별한 순간을 불러올 수 없습니다.",
            ));
        }
        Ok(response.moments)
    }

    pub async fn advance(&self, username: &str) -> Result<AdvanceResponse, ServiceError> {
        let response: AdvanceResponse = self
            .api
            .post(
                routes::GAME_ADVANCE,
                &UsernameRequest {
                    username: username.to_string(),
                },
            )
            .await?;
        if !response.success {
            return Err(ServiceError::rejected(
                response.error,
                response.message,
                "월 진행에 실패했습니다.",
            ));
        }
        Ok(response)
    }

    pub async fn select_event_choice(
        &self,
        username: &str,
        event_key: &str,
        choice_id: &str,
    ) -> Result<EventChoiceResponse, ServiceError> {
        let response: EventChoiceResponse = self
            .api
            .post(
                routes::GAME_EVENT_CHOICE,
                &EventChoiceRequest {
                    username: username.to_string(),
                    event_key: event_key.to_string(),
                    choice_id: choice_id.to_string(),
                },
            )
            .await?;
        if !response.success {
            return Err(ServiceError::rejected(
                response.error,
                response.message,
                "선택을 처리하지 못했습니다.",
            ));
        }
        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use serde_json::json;

    use crate::application::api::Api;
    use crate::ports::outbound::{ApiError, MockRawApiPort};

    fn service(raw: MockRawApiPort) -> GameService<Api> {
        GameService::new(Api::new(Arc::new(raw)))
    }

    #[tokio::test]
    async fn moments_fall_back_to_legacy_route() {
        let mut raw = MockRawApiPort::new();
        raw.expect_get_optional_json()
            .withf(|path| path == "/api/game/moments?username=kim")
            .times(1)
            .returning(|_| Ok(None));
        raw.expect_get_json()
            .withf(|path| path == "/api/moments?username=kim")
            .times(1)
            .returning(|_| {
                Ok(json!({"success": true, "moments": [{"title": "첫 홈런", "date": "4월 3일"}]}))
            });

        let moments = service(raw).moments("kim").await.unwrap();
        assert_eq!(moments.len(), 1);
        assert_eq!(moments[0].display_date(), "4월 3일");
    }

    #[tokio::test]
    async fn advance_rejection_carries_server_message() {
        let mut raw = MockRawApiPort::new();
        raw.expect_post_json().returning(|_, _| {
            Ok(json!({"success": false, "message": "이미 9월입니다. 드래프트를 진행하세요!"}))
        });

        assert_eq!(
            service(raw).advance("kim").await.unwrap_err(),
            ServiceError::Rejected("이미 9월입니다. 드래프트를 진행하세요!".into())
        );
    }

    #[tokio::test]
    async fn stats_unwraps_the_snapshot() {
        let mut raw = MockRawApiPort::new();
        raw.expect_get_json().returning(|_| {
            Ok(json!({"success": true, "month": 6, "stats": {"stamina": 70}}))
        });

        let snapshot = service(raw).stats("kim").await.unwrap();
        assert_eq!(snapshot.current_month, Some(6));
        assert_eq!(snapshot.stats.stamina, Some(70));
    }

    #[tokio::test]
    async fn event_choice_posts_key_and_choice() {
        let mut raw = MockRawApiPort::new();
        raw.expect_post_json()
            .withf(|path, body| {
                path == routes::GAME_EVENT_CHOICE
                    && body == &json!({"username": "kim", "event_key": "slump", "choice_id": "comfort"})
            })
            .times(1)
            .returning(|_, _| Ok(json!({"success": true, "storybook_id": "5_slump_comfort"})));

        let response = service(raw)
            .select_event_choice("kim", "slump", "comfort")
            .await
            .unwrap();
        assert_eq!(response.storybook_id.as_deref(), Some("5_slump_comfort"));
    }

    #[tokio::test]
    async fn hints_http_error_propagates() {
        let mut raw = MockRawApiPort::new();
        raw.expect_get_json().returning(|_| {
            Err(ApiError::HttpError {
                status: 500,
                body: "boom".into(),
            })
        });

        assert!(matches!(
            service(raw).hints("kim").await,
            Err(ServiceError::Api(ApiError::HttpError { status: 500, .. }))
        ));
    }
}
