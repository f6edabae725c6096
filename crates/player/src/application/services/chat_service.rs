//! Chat Service - sending messages, streamed or in one piece

use futures_util::Stream;

use dugout_shared::{
    routes, ChatReply, ChatRequest, MonthStartRequest, MonthStartResponse, StreamEvent,
};

use crate::application::ServiceError;
use crate::infrastructure::event_stream::decode_events;
use crate::ports::outbound::{ApiError, ApiPort};

#[derive(Clone)]
pub struct ChatService<A: ApiPort> {
    api: A,
}

impl<A: ApiPort> ChatService<A> {
    pub fn new(api: A) -> Self {
        Self { api }
    }

    /// Legacy endpoint: the whole reply and its metadata in one response.
    pub async fn send(&self, message: &str, username: &str) -> Result<ChatReply, ServiceError> {
        let reply: ChatReply = self
            .api
            .post(routes::CHAT, &ChatRequest::new(message, username))
            .await?;
        match (&reply.reply, &reply.error) {
            (None, Some(error)) => Err(ServiceError::Rejected(error.clone())),
            _ => Ok(reply),
        }
    }

    /// Streaming endpoint: returns the decoded events as they arrive.
    pub async fn stream(
        &self,
        message: &str,
        username: &str,
    ) -> Result<impl Stream<Item = Result<StreamEvent, ApiError>>, ServiceError> {
        let bytes = self
            .api
            .post_stream(routes::CHAT_STREAM, &ChatRequest::new(message, username))
            .await?;
        Ok(decode_events(bytes))
    }

    /// System message that opens a month's chat, if the server has one.
    pub async fn month_start(
        &self,
        username: &str,
        storybook_id: &str,
    ) -> Result<Option<String>, ServiceError> {
        let response: MonthStartResponse = self
            .api
            .post(
                routes::CHAT_MONTH_START,
                &MonthStartRequest {
                    username: username.to_string(),
                    storybook_id: storybook_id.to_string(),
                },
            )
            .await?;
        if !response.success {
            return Err(ServiceError::rejected(
                response.error,
                None,
                "월 시작 메시지를 불러올 수 없습니다.",
            ));
        }
        Ok(response.system_message.filter(|m| !m.trim().is_empty()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use futures_util::StreamExt;
    use serde_json::json;

    use crate::application::api::Api;
    use crate::infrastructure::testing::fixtures::{api_request_failed, sse_record};
    use crate::ports::outbound::MockRawApiPort;

    fn service(raw: MockRawApiPort) -> ChatService<Api> {
        ChatService::new(Api::new(Arc::new(raw)))
    }

    #[tokio::test]
    async fn stream_posts_message_and_decodes_events() {
        let mut raw = MockRawApiPort::new();
        raw.expect_post_stream()
            .withf(|path, body| {
                path == routes::CHAT_STREAM
                    && body == &json!({"message": "안녕", "username": "kim"})
            })
            .times(1)
            .returning(|_, _| {
                let chunks = vec![
                    Ok(sse_record("token", json!("안"))),
                    Ok(sse_record("done", json!(""))),
                ];
                Ok(futures_util::stream::iter(chunks).boxed())
            });

        let events: Vec<_> = service(raw)
            .stream("안녕", "kim")
            .await
            .unwrap()
            .collect()
            .await;
        assert_eq!(
            events,
            vec![Ok(StreamEvent::Token("안".into())), Ok(StreamEvent::Done)]
        );
    }

    #[tokio::test]
    async fn send_rejects_error_only_reply() {
        let mut raw = MockRawApiPort::new();
        raw.expect_post_json()
            .returning(|_, _| Ok(json!({"error": "Message is required"})));

        let result = service(raw).send("", "kim").await;
        assert_eq!(
            result.unwrap_err(),
            ServiceError::Rejected("Message is required".into())
        );
    }

    #[tokio::test]
    async fn month_start_ignores_blank_message() {
        let mut raw = MockRawApiPort::new();
        raw.expect_post_json()
            .withf(|path, body| {
                path == routes::CHAT_MONTH_START && body["storybook_id"] == "4_intro"
            })
            .returning(|_, _| Ok(json!({"success": true, "system_message": "  "})));

        assert_eq!(service(raw).month_start("kim", "4_intro").await, Ok(None));
    }

    #[tokio::test]
    async fn transport_failure_is_an_api_error() {
        let mut raw = MockRawApiPort::new();
        raw.expect_post_json()
            .returning(|_, _| Err(api_request_failed("connection refused")));

        assert!(matches!(
            service(raw).send("hi", "kim").await,
            Err(ServiceError::Api(ApiError::RequestFailed(_)))
        ));
    }
}
