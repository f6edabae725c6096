//! Notification cards: events, hints and warnings.

use dugout_domain::state::{NOTIFICATION_TTL_MS, SLIDE_OUT_MS};
use dugout_domain::{NotificationId, NotificationKind, TriggeredEvent};

use super::GameClient;
use crate::ui::presentation::state::ClientStore;

impl<S: ClientStore> GameClient<S> {
    pub fn show_event_notification(&self, event: &TriggeredEvent) -> NotificationId {
        tracing::info!(event = %event.event_name, "Event notification");
        self.push_notification(
            NotificationKind::Event,
            format!("🎭 {}", event.event_name),
            event.trigger_message.clone(),
        )
    }

    pub fn show_hint_notification(&self, hint: &str) -> NotificationId {
        self.push_notification(NotificationKind::Hint, "💡 힌트".to_string(), hint.to_string())
    }

    /// Soft notice, e.g. a training session refused for low stamina.
    pub fn show_warning(&self, message: &str) -> NotificationId {
        self.push_notification(
            NotificationKind::Warning,
            "⚠️ 알림".to_string(),
            message.to_string(),
        )
    }

    fn push_notification(&self, kind: NotificationKind, title: String, body: String) -> NotificationId {
        let now = self.platform.now_millis();
        self.store
            .update(|s| s.notifications.push(kind, title, body, now))
    }

    pub fn toggle_notification(&self, id: NotificationId) {
        self.store.update(|s| s.notifications.toggle(id));
    }

    /// Close button: slide out, then remove.
    pub async fn dismiss_notification(&self, id: NotificationId) {
        if !self.store.update(|s| s.notifications.begin_dismiss(id)) {
            return;
        }
        self.wait(SLIDE_OUT_MS).await;
        self.store.update(|s| s.notifications.remove(id));
    }

    /// Waits out a card's lifetime, then drops every expired card.
    pub async fn expire_notification(&self, id: NotificationId) {
        self.wait(NOTIFICATION_TTL_MS).await;
        let now = self.platform.now_millis();
        self.store.update(|s| {
            if s.notifications.get(id).is_some() {
                s.notifications.expire(now);
            }
        });
    }
}
