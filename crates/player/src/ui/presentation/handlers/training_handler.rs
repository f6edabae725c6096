//! Training form flows.

use dugout_domain::{Attachment, Sender, TrainingFocus};

use super::GameClient;
use crate::application::services::TrainingOutcome;
use crate::ui::presentation::state::ClientStore;

const TRAINING_FAILED: &str = "훈련에 실패했습니다. 다시 시도해주세요.";

impl<S: ClientStore> GameClient<S> {
    /// Opens the form if training is offered this month.
    pub fn open_training(&self) -> bool {
        self.store.update(|s| {
            if !s.training_available() {
                return false;
            }
            s.training.open();
            true
        })
    }

    pub fn close_training(&self) {
        self.store.update(|s| s.training.close());
    }

    pub fn set_training_intensity(&self, value: i32) {
        self.store.update(|s| s.training.set_intensity(value));
    }

    /// Returns `false` when the toggle was refused (last selected focus).
    pub fn toggle_training_focus(&self, focus: TrainingFocus) -> bool {
        self.store.update(|s| s.training.toggle_focus(focus))
    }

    pub async fn submit_training(&self) {
        let submission = self.store.update(|s| {
            if !s.training.is_open() {
                return None;
            }
            s.training.begin_submit()
        });
        let Some(submission) = submission else {
            return;
        };
        tracing::info!(
            intensity = submission.intensity,
            focuses = ?submission.focuses,
            "Submitting training"
        );

        match self.services.training.submit(self.username(), &submission).await {
            Ok(TrainingOutcome::Warning(warning)) => {
                tracing::info!(warning = %warning, "Training refused");
                self.show_warning(&warning);
            }
            Ok(TrainingOutcome::Completed(card)) => {
                let title = card.title();
                self.store.update(|s| {
                    s.transcript
                        .append_with(Sender::Bot, title, Attachment::TrainingResult(card));
                    s.training.close();
                });
                self.refresh_stats().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Training failed");
                self.show_error(&e.user_message(TRAINING_FAILED));
            }
        }
        self.store.update(|s| s.training.finish_submit());
    }
}
