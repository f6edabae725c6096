//! UI components
//!
//! Components render from the client's state signal and hand every user
//! action to a `GameClient` flow; none of them call services directly.

mod chat;
mod modals;
mod notifications;
mod onboarding;
mod stat_sidebar;
mod storybook;
mod training_modal;

pub use chat::ChatPanel;
pub use modals::{HintsModal, MomentsModal, TerminalAlert, TransitionLayer};
pub use notifications::NotificationStack;
pub use onboarding::OnboardingModal;
pub use stat_sidebar::StatSidebar;
pub use storybook::StorybookView;
pub use training_modal::TrainingModal;
