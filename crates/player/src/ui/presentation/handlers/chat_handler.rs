//! Chat flows: sending, streaming replies and applying reply metadata.

use futures_util::StreamExt;

use dugout_domain::{Attachment, MessageId, Sender, TriggeredEvent};
use dugout_shared::{ChatMetadata, ChatRequest, StreamEvent};

use super::GameClient;
use crate::application::ServiceError;
use crate::ui::presentation::state::ClientStore;

pub(crate) const LOADING_TEXT: &str = "생각 중...";
const SEND_FAILED: &str = "메시지 전송에 실패했습니다. 다시 시도해주세요.";
const CHOICE_FAILED: &str = "선택을 처리하지 못했습니다. 다시 시도해주세요.";

impl<S: ClientStore> GameClient<S> {
    /// Sends the text in the input box.
    pub async fn send_message(&self) {
        let text = self.store.update(|s| {
            let text = s.draft.trim().to_string();
            if text.is_empty() || !s.input_enabled() || !s.chat.try_begin() {
                return None;
            }
            s.draft.clear();
            s.transcript.append(Sender::User, text.clone(), None);
            Some(text)
        });
        if let Some(text) = text {
            self.run_chat(&text).await;
        }
    }

    /// Asks the server for the opening line.
    pub async fn send_init(&self) {
        if self.store.update(|s| s.chat.try_begin()) {
            tracing::info!("Requesting opening message");
            self.run_chat(ChatRequest::INIT_MESSAGE).await;
        }
    }

    /// Plays a server-provided system message (month start) as a chat turn
    /// without showing it as a player line.
    pub async fn play_system_message(&self, message: &str) {
        if self.store.update(|s| s.chat.try_begin()) {
            self.run_chat(message).await;
        }
    }

    /// Runs one chat turn; the chat gate must already be claimed.
    async fn run_chat(&self, message: &str) {
        let trigger = if self.config.streaming {
            self.stream_reply(message).await
        } else {
            self.legacy_reply(message).await
        };
        self.store.update(|s| s.chat.finish());

        if let Some(storybook_id) = trigger {
            tracing::info!(storybook_id = %storybook_id, "Reply triggered a storybook");
            self.transition_to_storybook_mode(&storybook_id).await;
        }
    }

    fn show_loading(&self) -> MessageId {
        self.store
            .update(|s| s.transcript.append(Sender::Loading, LOADING_TEXT, None))
    }

    fn remove_message(&self, id: MessageId) {
        self.store.update(|s| {
            s.transcript.remove(id);
        });
    }

    /// Streams a reply token by token. Returns the storybook to open
    /// afterwards, if the reply asked for one.
    async fn stream_reply(&self, message: &str) -> Option<String> {
        let loading = self.show_loading();
        let events = match self.services.chat.stream(message, self.username()).await {
            Ok(events) => events,
            Err(e) => {
                tracing::error!(error = %e, "Chat stream request failed");
                self.remove_message(loading);
                self.show_error(&e.user_message(SEND_FAILED));
                return None;
            }
        };
        let mut events = std::pin::pin!(events);

        self.remove_message(loading);
        let bot = self.store.update(|s| s.transcript.create_bot_message());
        let mut text = String::new();
        let mut metadata_applied = false;
        let mut trigger = None;

        while let Some(event) = events.next().await {
            match event {
                Ok(StreamEvent::Token(token)) => {
                    text.push_str(&token);
                    self.store
                        .update(|s| s.transcript.update_bot_message(bot, &text));
                }
                Ok(StreamEvent::Metadata(metadata)) => {
                    if metadata_applied {
                        tracing::debug!("Ignoring repeated metadata record");
                        continue;
                    }
                    metadata_applied = true;
                    if let Some(id) = self.apply_metadata(&metadata) {
                        trigger = Some(id);
                    }
                }
                Ok(StreamEvent::EventUpdate(event)) => self.show_event(event),
                Ok(StreamEvent::HintUpdate(hint)) => {
                    self.show_hint_notification(&hint);
                }
                Ok(StreamEvent::FullResponse(full)) => {
                    text = full.reply;
                    self.store.update(|s| {
                        s.transcript.update_bot_message(bot, &text);
                        s.transcript.set_image(bot, full.image);
                    });
                    if let Some(id) = full.storybook_id.filter(|id| !id.is_empty()) {
                        trigger = Some(id);
                    }
                }
                Ok(StreamEvent::Done) => tracing::debug!(chars = text.len(), "Stream finished"),
                Ok(StreamEvent::Error(message)) => {
                    tracing::error!(message = %message, "Server reported a stream error");
                    text = message;
                    self.store
                        .update(|s| s.transcript.update_bot_message(bot, &text));
                }
                Ok(StreamEvent::Unknown(kind)) => {
                    tracing::debug!(kind = %kind, "Ignoring unknown stream record");
                }
                Err(e) => {
                    tracing::error!(error = %e, "Chat stream broke off");
                    if text.is_empty() {
                        self.remove_message(bot);
                        self.show_error(SEND_FAILED);
                    }
                    return trigger;
                }
            }
        }

        if text.is_empty() {
            self.remove_message(bot);
        }
        trigger
    }

    /// One-shot `/api/chat` round trip.
    async fn legacy_reply(&self, message: &str) -> Option<String> {
        let loading = self.show_loading();
        match self.services.chat.send(message, self.username()).await {
            Ok(reply) => {
                self.remove_message(loading);
                let trigger = self.apply_metadata(&reply.metadata);
                let image = reply.image().map(str::to_string);
                self.store
                    .update(|s| s.transcript.append(Sender::Bot, reply.text(), image));
                trigger
            }
            Err(e) => {
                tracing::error!(error = %e, "Chat request failed");
                self.remove_message(loading);
                self.show_error(&e.user_message(SEND_FAILED));
                None
            }
        }
    }

    /// Applies the metadata of a finished reply: stats, event, hint.
    ///
    /// Shared by the streaming and one-shot paths. Returns the storybook the
    /// server wants opened after the reply.
    pub fn apply_metadata(&self, metadata: &ChatMetadata) -> Option<String> {
        if let Some(info) = &metadata.debug {
            if let Some(changes) = &info.stat_changes {
                tracing::debug!(
                    changes = ?changes.changes,
                    reason = changes.reason.as_deref().unwrap_or_default(),
                    "Stat changes"
                );
            }
            if let Some(check) = info.event_check.as_ref().filter(|c| c.triggered) {
                tracing::debug!(event = check.event_name.as_deref().unwrap_or_default(), "Event triggered");
            }
            tracing::debug!(
                conversation_count = ?info.conversation_count,
                hint_provided = info.hint_provided,
                "Reply metadata"
            );
        }

        if let Some(snapshot) = metadata.game_state() {
            self.store.update(|s| s.stats.apply_snapshot(snapshot));
        }
        if let Some(event) = &metadata.event {
            self.show_event(event.clone());
        }
        if let Some(hint) = metadata.hint.as_deref().filter(|h| !h.trim().is_empty()) {
            self.show_hint_notification(hint);
        }
        metadata
            .storybook_id
            .clone()
            .filter(|id| !id.is_empty())
    }

    /// Events with choices go inline into the chat; the rest become a card.
    pub fn show_event(&self, event: TriggeredEvent) {
        if !event.has_choices() {
            self.show_event_notification(&event);
            return;
        }
        tracing::info!(event_key = %event.event_key, choices = event.choices.len(), "Event with choices");
        self.store.update(|s| {
            s.transcript.append_with(
                Sender::Bot,
                format!("🎭 {}\n{}", event.event_name, event.trigger_message),
                Attachment::EventChoices {
                    event_key: event.event_key,
                    choices: event.choices,
                    selected: None,
                },
            );
        });
    }

    /// Locks the choice buttons of `message` and sends the pick.
    pub async fn select_event_choice(&self, message: MessageId, choice_id: &str) {
        let Some(event_key) = self
            .store
            .update(|s| s.transcript.lock_choice(message, choice_id))
        else {
            return;
        };
        tracing::info!(event_key = %event_key, choice_id, "Event choice selected");

        match self
            .services
            .game
            .select_event_choice(self.username(), &event_key, choice_id)
            .await
        {
            Ok(response) => {
                match response.storybook_id.filter(|id| !id.is_empty()) {
                    Some(id) => {
                        self.transition_to_storybook_mode(&id).await;
                    }
                    None => {
                        if let Some(text) = response.message.filter(|m| !m.is_empty()) {
                            self.store
                                .update(|s| s.transcript.append(Sender::Bot, text, None));
                        }
                    }
                }
            }
            Err(e @ ServiceError::Rejected(_)) => {
                tracing::error!(error = %e, "Event choice rejected");
                self.show_error(&e.user_message(CHOICE_FAILED));
            }
            Err(e) => {
                tracing::error!(error = %e, "Event choice failed");
                self.show_error(CHOICE_FAILED);
            }
        }
    }
}
