//! Notification cards (events, hints, warnings).

/// Auto-dismiss delay.
pub const NOTIFICATION_TTL_MS: u64 = 7000;
/// Length of the slide-out animation before a card is removed.
pub const SLIDE_OUT_MS: u64 = 300;

pub type NotificationId = u64;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Event,
    Hint,
    Warning,
}

impl NotificationKind {
    pub fn icon(&self) -> &'static str {
        match self {
            Self::Event => "🎯",
            Self::Hint => "💡",
            Self::Warning => "⚠️",
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            Self::Event => "event-notification",
            Self::Hint => "hint-notification",
            Self::Warning => "warning-notification",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub id: NotificationId,
    pub kind: NotificationKind,
    pub title: String,
    pub body: String,
    pub expanded: bool,
    /// Set while the slide-out animation plays
    pub dismissing: bool,
    pub created_at_ms: u64,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct NotificationCenter {
    items: Vec<Notification>,
    next_id: NotificationId,
}

impl NotificationCenter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[Notification] {
        &self.items
    }

    pub fn get(&self, id: NotificationId) -> Option<&Notification> {
        self.items.iter().find(|n| n.id == id)
    }

    pub fn push(
        &mut self,
        kind: NotificationKind,
        title: impl Into<String>,
        body: impl Into<String>,
        now_ms: u64,
    ) -> NotificationId {
        let id = self.next_id;
        self.next_id += 1;
        self.items.push(Notification {
            id,
            kind,
            title: title.into(),
            body: body.into(),
            expanded: false,
            dismissing: false,
            created_at_ms: now_ms,
        });
        id
    }

    pub fn toggle(&mut self, id: NotificationId) {
        if let Some(item) = self.items.iter_mut().find(|n| n.id == id) {
            item.expanded = !item.expanded;
        }
    }

    /// Starts the slide-out. Returns `false` if the card is gone or already
    /// leaving, so a second close click schedules nothing.
    pub fn begin_dismiss(&mut self, id: NotificationId) -> bool {
        match self.items.iter_mut().find(|n| n.id == id) {
            Some(item) if !item.dismissing => {
                item.dismissing = true;
                true
            }
            _ => false,
        }
    }

    pub fn remove(&mut self, id: NotificationId) {
        self.items.retain(|n| n.id != id);
    }

    /// Drops every card older than the TTL.
    pub fn expire(&mut self, now_ms: u64) {
        self.items
            .retain(|n| now_ms.saturating_sub(n.created_at_ms) < NOTIFICATION_TTL_MS);
    }
}
