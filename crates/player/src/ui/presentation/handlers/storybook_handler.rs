//! Storybook flows: loading, paging, completion and mode transitions.

use dugout_domain::{Attachment, EndingData, Sender, StartButtonKind, Storybook};
use dugout_shared::NextAction;

use super::{GameClient, NETWORK_ERROR};
use crate::application::ServiceError;
use crate::ui::presentation::state::ClientStore;

/// Transition layer fade-out before the view is swapped.
pub const FADE_OUT_MS: u64 = 500;
/// Pause before the layer lifts again.
pub const FADE_IN_MS: u64 = 100;

const LOAD_FAILED: &str = "스토리북을 불러올 수 없습니다.";
const COMPLETE_FAILED: &str = "오류가 발생했습니다.";
const ADVANCE_FAILED: &str = "월 진행에 실패했습니다. 다시 시도해주세요.";
pub(crate) const GAME_END_THANKS: &str =
    "플레이해주셔서 감사합니다! 새로운 게임을 시작하려면 페이지를 새로고침하세요.";
pub(crate) const GAME_OVER_NO_ENDING: &str = "게임이 종료되었습니다. 플레이해주셔서 감사합니다!";

enum StartAction {
    Complete(String),
    FinishGame,
}

impl<S: ClientStore> GameClient<S> {
    /// Fetches a storybook and opens it on its first page.
    ///
    /// Failures are reported in the transcript; returns whether it opened.
    pub async fn load_and_show(&self, storybook_id: &str) -> bool {
        match self.open_storybook(storybook_id).await {
            Ok(()) => true,
            Err(e @ (ServiceError::Rejected(_) | ServiceError::MissingField(_))) => {
                tracing::error!(storybook_id, error = %e, "Storybook rejected");
                self.show_error(LOAD_FAILED);
                false
            }
            Err(e) => {
                tracing::error!(storybook_id, error = %e, "Storybook request failed");
                self.show_error(NETWORK_ERROR);
                false
            }
        }
    }

    async fn open_storybook(&self, storybook_id: &str) -> Result<(), ServiceError> {
        tracing::info!(storybook_id, "Loading storybook");
        let storybook = self
            .services
            .storybook
            .load(storybook_id, self.username())
            .await?;
        tracing::info!(title = %storybook.title, pages = storybook.page_count(), "Storybook loaded");
        self.store.update(|s| s.open_storybook(storybook));
        Ok(())
    }

    pub fn storybook_prev(&self) -> bool {
        self.store.update(|s| s.viewer.prev())
    }

    pub fn storybook_next(&self) -> bool {
        self.store.update(|s| s.viewer.next())
    }

    /// The button on the last page.
    ///
    /// Completes the storybook on the server (once, however often it is
    /// clicked while the request runs) or, for a game-ending storybook,
    /// closes the game.
    pub async fn storybook_start(&self) {
        let action = self.store.update(|s| {
            let button = s.viewer.page_view()?.start_button?;
            if button.kind == StartButtonKind::GameEnd {
                return Some(StartAction::FinishGame);
            }
            let id = s.viewer.current()?.id.clone();
            if !s.completion.try_begin() {
                tracing::debug!("Storybook completion already in flight");
                return None;
            }
            Some(StartAction::Complete(id))
        });

        match action {
            Some(StartAction::FinishGame) => self.finish_game(),
            Some(StartAction::Complete(id)) => {
                self.complete_storybook(&id).await;
                self.store.update(|s| s.completion.finish());
            }
            None => {}
        }
    }

    /// Reports a storybook as read and follows the server's next action.
    pub async fn complete_storybook(&self, storybook_id: &str) {
        let response = match self
            .services
            .storybook
            .complete(self.username(), storybook_id)
            .await
        {
            Ok(response) => response,
            Err(e @ ServiceError::Rejected(_)) => {
                tracing::error!(storybook_id, error = %e, "Storybook completion rejected");
                self.show_error(COMPLETE_FAILED);
                return;
            }
            Err(e) => {
                tracing::error!(storybook_id, error = %e, "Storybook completion failed");
                self.show_error(NETWORK_ERROR);
                return;
            }
        };
        tracing::info!(storybook_id, next_action = ?response.next_action, "Storybook completed");

        match response.next_action {
            NextAction::StartChatMode => self.transition_to_chat_mode(Some(storybook_id)).await,
            NextAction::ShowNextStorybook => match response.next_storybook_id {
                Some(next) if !next.is_empty() => {
                    self.transition_to_storybook_mode(&next).await;
                }
                _ => {
                    tracing::warn!("show_next_storybook without an id, returning to chat");
                    self.transition_to_chat_mode(Some(storybook_id)).await;
                }
            },
            NextAction::GameEnd => match response.ending.and_then(EndingData::into_storybook) {
                Some(ending) => self.transition_to_ending(ending).await,
                None => self.store.update(|s| s.end_game(GAME_OVER_NO_ENDING)),
            },
            NextAction::Unknown => {
                tracing::warn!("Unknown next action, returning to chat");
                self.transition_to_chat_mode(Some(storybook_id)).await;
            }
        }
    }

    /// Back to chat: hide the storybook, refresh stats, then play the
    /// month's opening system message if the server has one.
    pub async fn transition_to_chat_mode(&self, completed: Option<&str>) {
        self.behind_transition(|| async {
            self.store.update(|s| s.enter_chat());
            self.refresh_stats().await;
        })
        .await;
        tracing::info!("Switched to chat mode");

        let Some(storybook_id) = completed else {
            return;
        };
        match self
            .services
            .chat
            .month_start(self.username(), storybook_id)
            .await
        {
            Ok(Some(message)) => self.play_system_message(&message).await,
            Ok(None) => {}
            Err(e) => tracing::warn!(error = %e, "No month start message"),
        }
    }

    pub async fn transition_to_storybook_mode(&self, storybook_id: &str) -> bool {
        self.behind_transition(|| self.load_and_show(storybook_id))
            .await
    }

    pub async fn transition_to_ending(&self, ending: Storybook) {
        tracing::info!(title = %ending.title, "Switching to ending");
        self.behind_transition(|| async {
            self.store.update(|s| s.open_ending(ending));
        })
        .await;
    }

    /// Game-end button: terminal alert, no network.
    pub fn finish_game(&self) {
        tracing::info!("Game finished");
        self.store.update(|s| s.end_game(GAME_END_THANKS));
    }

    /// "Next month": asks the server to advance and opens the transition
    /// storybook it names.
    pub async fn advance_to_next_month(&self) {
        let claimed = self.store.update(|s| {
            !s.viewer.is_active() && !s.is_game_over() && s.advance.try_begin()
        });
        if !claimed {
            return;
        }

        match self.services.game.advance(self.username()).await {
            Ok(response) => {
                tracing::info!(new_month = ?response.new_month, "Advanced month");
                if let Some(guide) = response.guide {
                    self.store.update(|s| {
                        s.transcript
                            .append_with(Sender::Guide, "", Attachment::MonthGuide(guide));
                    });
                }
                if let Some(event) = response.event {
                    self.show_event(event);
                }
                match response.transition_storybook_id.filter(|id| !id.is_empty()) {
                    Some(id) => {
                        self.transition_to_storybook_mode(&id).await;
                    }
                    None => {
                        if let Some(message) = response.message.filter(|m| !m.is_empty()) {
                            self.store
                                .update(|s| s.transcript.append(Sender::Bot, message, None));
                        }
                        self.refresh_stats().await;
                    }
                }
            }
            Err(e) => {
                tracing::error!(error = %e, "Month advance failed");
                self.show_error(&e.user_message(ADVANCE_FAILED));
            }
        }
        self.store.update(|s| s.advance.finish());
    }

    /// Opens the storybook the server is waiting on, if any.
    ///
    /// Returns whether a storybook is now showing.
    pub async fn check_initial_storybook(&self) -> Result<bool, ServiceError> {
        match self.services.storybook.current(self.username()).await? {
            Some(id) => {
                tracing::info!(storybook_id = %id, "Starting in storybook mode");
                self.open_storybook(&id).await?;
                Ok(true)
            }
            None => {
                tracing::info!("Starting in chat mode");
                Ok(false)
            }
        }
    }
}
