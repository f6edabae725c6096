//! Stats refresh and the hints / special-moments modals.

use dugout_domain::state::DELTA_INDICATOR_MS;
use dugout_domain::StatKey;

use super::GameClient;
use crate::ui::presentation::state::ClientStore;

const HINTS_FAILED: &str = "추천 응답을 불러올 수 없습니다.";
const MOMENTS_FAILED: &str = "특별한 순간을 불러올 수 없습니다.";

impl<S: ClientStore> GameClient<S> {
    /// Re-fetches the game state into the stat panel. Failures only log.
    pub async fn refresh_stats(&self) {
        match self.services.game.stats(self.username()).await {
            Ok(snapshot) => {
                self.store.update(|s| s.stats.apply_snapshot(&snapshot));
                tracing::debug!(month = ?snapshot.current_month, "Game state refreshed");
            }
            Err(e) => tracing::warn!(error = %e, "Could not refresh game state"),
        }
    }

    /// Lets a `+N` indicator float for its lifetime, then drops it and the
    /// bar highlight.
    pub async fn expire_indicator(&self, id: u64, key: StatKey) {
        self.wait(DELTA_INDICATOR_MS).await;
        self.store.update(|s| {
            s.stats.remove_indicator(id);
            s.stats.clear_trend(key);
        });
    }

    pub async fn open_hints(&self) {
        match self.services.game.hints(self.username()).await {
            Ok(hints) => self.store.update(|s| s.hints = Some(hints)),
            Err(e) => {
                tracing::error!(error = %e, "Hints request failed");
                self.show_warning(&e.user_message(HINTS_FAILED));
            }
        }
    }

    /// Puts a suggested reply into the input box.
    pub fn pick_hint(&self, hint: &str) {
        self.store.update(|s| {
            s.draft = hint.to_string();
            s.hints = None;
        });
    }

    pub fn close_hints(&self) {
        self.store.update(|s| s.hints = None);
    }

    pub async fn open_moments(&self) {
        match self.services.game.moments(self.username()).await {
            Ok(moments) => self.store.update(|s| s.moments = Some(moments)),
            Err(e) => {
                tracing::error!(error = %e, "Moments request failed");
                self.show_warning(&e.user_message(MOMENTS_FAILED));
            }
        }
    }

    pub fn close_moments(&self) {
        self.store.update(|s| s.moments = None);
    }

    pub fn set_draft(&self, text: String) {
        self.store.update(|s| s.draft = text);
    }
}
