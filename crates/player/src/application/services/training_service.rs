//! Training Service - monthly training submissions

use dugout_domain::{TrainingResultCard, TrainingSubmission};
use dugout_shared::{routes, TrainingRequest, TrainingResponse};

use crate::application::ServiceError;
use crate::ports::outbound::ApiPort;

/// How the server answered a submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TrainingOutcome {
    /// Soft refusal, e.g. not enough stamina; nothing changed
    Warning(String),
    Completed(TrainingResultCard),
}

#[derive(Clone)]
pub struct TrainingService<A: ApiPort> {
    api: A,
}

impl<A: ApiPort> TrainingService<A> {
    pub fn new(api: A) -> Self {
        Self { api }
    }

    pub async fn submit(
        &self,
        username: &str,
        submission: &TrainingSubmission,
    ) -> Result<TrainingOutcome, ServiceError> {
        let response: TrainingResponse = self
            .api
            .post(
                routes::TRAINING,
                &TrainingRequest {
                    username: username.to_string(),
                    intensity: submission.intensity,
                    focuses: submission.focuses.clone(),
                },
            )
            .await?;

        if let Some(warning) = response.warning.filter(|w| !w.is_empty()) {
            return Ok(TrainingOutcome::Warning(warning));
        }
        if !response.success {
            return Err(ServiceError::rejected(
                response.error,
                response.message,
                "훈련에 실패했습니다.",
            ));
        }
        Ok(TrainingOutcome::Completed(TrainingResultCard {
            intensity_label: response.intensity_label,
            stat_changes: response.stat_changes.into_iter().collect(),
            stamina_change: response.stamina_change,
            summary: response.summary.or(response.message),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use dugout_domain::TrainingFocus;
    use serde_json::json;

    use crate::application::api::Api;
    use crate::ports::outbound::MockRawApiPort;

    fn service(raw: MockRawApiPort) -> TrainingService<Api> {
        TrainingService::new(Api::new(Arc::new(raw)))
    }

    fn submission() -> TrainingSubmission {
        TrainingSubmission {
            intensity: 60,
            focuses: vec![TrainingFocus::Batting, TrainingFocus::Speed],
        }
    }

    #[tokio::test]
    async fn warning_is_not_an_error() {
        let mut raw = MockRawApiPort::new();
        raw.expect_post_json().returning(|_, _| {
            Ok(json!({"success": false, "warning": "체력이 부족합니다."}))
        });

        assert_eq!(
            service(raw).submit("kim", &submission()).await,
            Ok(TrainingOutcome::Warning("체력이 부족합니다.".into()))
        );
    }

    #[tokio::test]
    async fn success_builds_a_result_card() {
        let mut raw = MockRawApiPort::new();
        raw.expect_post_json()
            .withf(|path, body| {
                path == routes::TRAINING
                    && body == &json!({"username": "kim", "intensity": 60, "focuses": ["batting", "speed"]})
            })
            .times(1)
            .returning(|_, _| {
                Ok(json!({
                    "success": true,
                    "intensity_label": "일반 훈련",
                    "stat_changes": {"batting": 3, "speed": 2},
                    "stamina_change": -15
                }))
            });

        let TrainingOutcome::Completed(card) = service(raw).submit("kim", &submission()).await.unwrap()
        else {
            panic!("expected a completed session");
        };
        assert_eq!(card.title(), "🏋️ 일반 훈련 완료");
        assert_eq!(card.lines(), vec!["타격 +3", "주루 +2", "체력 -15"]);
    }

    #[tokio::test]
    async fn failure_without_warning_is_rejected() {
        let mut raw = MockRawApiPort::new();
        raw.expect_post_json()
            .returning(|_, _| Ok(json!({"success": false, "error": "훈련 가능한 달이 아닙니다."})));

        assert_eq!(
            service(raw).submit("kim", &submission()).await,
            Err(ServiceError::Rejected("훈련 가능한 달이 아닙니다.".into()))
        );
    }
}
