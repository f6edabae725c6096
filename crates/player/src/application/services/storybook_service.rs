//! Storybook Service - loading, startup phase and completion

use dugout_domain::Storybook;
use dugout_shared::{
    routes, CurrentStorybookResponse, StorybookCompleteRequest, StorybookCompleteResponse,
    StorybookResponse,
};

use crate::application::ServiceError;
use crate::ports::outbound::ApiPort;

#[derive(Clone)]
pub struct StorybookService<A: ApiPort> {
    api: A,
}

impl<A: ApiPort> StorybookService<A> {
    pub fn new(api: A) -> Self {
        Self { api }
    }

    pub async fn load(&self, id: &str, username: &str) -> Result<Storybook, ServiceError> {
        let response: StorybookResponse = self.api.get(&routes::storybook(id, username)).await?;
        if !response.success {
            return Err(ServiceError::rejected(
                response.error,
                None,
                "스토리북을 불러올 수 없습니다.",
            ));
        }
        response
            .storybook
            .ok_or(ServiceError::MissingField("storybook"))
    }

    /// Id of the storybook the server is waiting on, if it is in storybook phase.
    pub async fn current(&self, username: &str) -> Result<Option<String>, ServiceError> {
        let response: CurrentStorybookResponse =
            self.api.get(&routes::current_storybook(username)).await?;
        Ok(response.active_storybook_id().map(str::to_string))
    }

    pub async fn complete(
        &self,
        username: &str,
        storybook_id: &str,
    ) -> Result<StorybookCompleteResponse, ServiceError> {
        let response: StorybookCompleteResponse = self
            .api
            .post(
                routes::STORYBOOK_COMPLETE,
                &StorybookCompleteRequest {
                    username: username.to_string(),
                    storybook_id: storybook_id.to_string(),
                },
            )
            .await?;
        if !response.success {
            return Err(ServiceError::rejected(
                response.error,
                None,
                "오류가 발생했습니다.",
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
    use crate::infrastructure::testing::fixtures::storybook_response;
    use crate::ports::outbound::MockRawApiPort;
    use dugout_shared::NextAction;

    fn service(raw: MockRawApiPort) -> StorybookService<Api> {
        StorybookService::new(Api::new(Arc::new(raw)))
    }

    #[tokio::test]
    async fn load_returns_the_storybook() {
        let mut raw = MockRawApiPort::new();
        raw.expect_get_json()
            .withf(|path| path == "/api/storybook/4_intro?username=kim")
            .returning(|_| Ok(storybook_response("4_intro", 3)));

        let storybook = service(raw).load("4_intro", "kim").await.unwrap();
        assert_eq!(storybook.id, "4_intro");
        assert_eq!(storybook.page_count(), 3);
    }

    #[tokio::test]
    async fn load_without_storybook_is_missing_field() {
        let mut raw = MockRawApiPort::new();
        raw.expect_get_json()
            .returning(|_| Ok(json!({"success": true})));

        assert_eq!(
            service(raw).load("x", "kim").await.unwrap_err(),
            ServiceError::MissingField("storybook")
        );
    }

    #[tokio::test]
    async fn current_is_none_in_chat_phase() {
        let mut raw = MockRawApiPort::new();
        raw.expect_get_json()
            .returning(|_| Ok(json!({"success": true, "phase": "chat"})));

        assert_eq!(service(raw).current("kim").await, Ok(None));
    }

    #[tokio::test]
    async fn complete_posts_the_id() {
        let mut raw = MockRawApiPort::new();
        raw.expect_post_json()
            .withf(|path, body| {
                path == routes::STORYBOOK_COMPLETE
                    && body == &json!({"username": "kim", "storybook_id": "4_intro"})
            })
            .times(1)
            .returning(|_, _| {
                Ok(json!({"success": true, "next_action": "show_next_storybook", "next_storybook_id": "4_b"}))
            });

        let response = service(raw).complete("kim", "4_intro").await.unwrap();
        assert_eq!(response.next_action, NextAction::ShowNextStorybook);
        assert_eq!(response.next_storybook_id.as_deref(), Some("4_b"));
    }
}
