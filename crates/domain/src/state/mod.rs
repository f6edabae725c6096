//! View state machines
//!
//! Plain, synchronous state owned by the player's store. Each type enforces
//! its own invariants so handlers only decide *when* to call them.

mod guard;
mod notifications;
mod onboarding;
mod stat_panel;
mod storybook_viewer;
mod training;
mod transcript;

pub use guard::{ActionGate, ActionPhase};
pub use notifications::{
    Notification, NotificationCenter, NotificationId, NotificationKind, NOTIFICATION_TTL_MS,
    SLIDE_OUT_MS,
};
pub use onboarding::{Onboarding, ONBOARDING_PAGES};
pub use stat_panel::{DeltaIndicator, StatBar, StatPanel, StatTrend, DELTA_INDICATOR_MS};
pub use storybook_viewer::{PageView, StartButton, StartButtonKind, StorybookViewer, ViewMode};
pub use training::{TrainingForm, TrainingResultCard, TrainingSubmission};
pub use transcript::{Attachment, ChatMessage, MessageId, Sender, Transcript};
