//! Dugout Domain - client-side data model and view state
//!
//! Everything the player renders lives here as plain Rust data:
//! - `value_objects` - stat keys, color tiers, month copy, training focuses
//! - `entities` - storybooks, game-state snapshots, events, moments
//! - `state` - the view state machines (transcript, stat panel, storybook
//!   viewer, notifications, training form, onboarding, action gates)
//!
//! No I/O happens in this crate. The player's handlers drive these types and
//! the UI renders them.

pub mod entities;
pub mod error;
pub mod state;
pub mod value_objects;

pub use entities::{
    CompletionAction, EndingData, EventChoice, GameStateSnapshot, Moment, StoryPage, Storybook,
    TriggeredEvent,
};
pub use error::DomainError;
pub use state::{
    ActionGate, ActionPhase, Attachment, ChatMessage, DeltaIndicator, MessageId, Notification,
    NotificationCenter, NotificationId, NotificationKind, Onboarding, PageView, Sender, StartButton,
    StartButtonKind, StatBar, StatPanel, StatTrend, StorybookViewer, TrainingForm,
    TrainingResultCard, TrainingSubmission, Transcript, ViewMode,
};
pub use value_objects::{
    is_training_month, month_copy, ColorTier, IntensityTier, MonthCopy, MonthGuide, StatBlock,
    StatKey, TrainingFocus, TRAINABLE_MONTHS,
};
