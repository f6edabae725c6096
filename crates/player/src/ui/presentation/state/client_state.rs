//! Everything the player renders, in one owned struct.
//!
//! The domain view-state machines are composed here together with the few
//! flags that only matter to the page (input enablement, banner, modals,
//! transition layer). Mode switches go through the methods below so the
//! chat input is never enabled while a storybook is on screen.

use dugout_domain::{
    ActionGate, Moment, NotificationCenter, Onboarding, StatPanel, Storybook, StorybookViewer,
    TrainingForm, Transcript,
};

/// The full-screen fade used around mode switches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TransitionPhase {
    #[default]
    Hidden,
    /// Layer is opaque; the view behind it is being swapped
    Covering,
}

#[derive(Debug, Clone, Default)]
pub struct ClientState {
    pub transcript: Transcript,
    pub stats: StatPanel,
    pub viewer: StorybookViewer,
    pub notifications: NotificationCenter,
    pub training: TrainingForm,
    pub onboarding: Onboarding,

    /// Storybook "start" / completion request
    pub completion: ActionGate,
    /// Chat send (one reply at a time)
    pub chat: ActionGate,
    /// Next-month request
    pub advance: ActionGate,

    input_enabled: bool,
    /// Text in the chat input box
    pub draft: String,
    /// Persistent error shown above the chat when bootstrap failed
    pub banner: Option<String>,
    pub transition: TransitionPhase,
    /// Final modal once the game is over; the chat never resumes after it
    pub terminal_alert: Option<String>,

    /// Open hints modal and its suggestions
    pub hints: Option<Vec<String>>,
    /// Open special-moments modal and its entries
    pub moments: Option<Vec<Moment>>,
}

impl ClientState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn input_enabled(&self) -> bool {
        self.input_enabled && !self.viewer.is_active() && !self.is_game_over()
    }

    /// Enables chat input unless a storybook is showing or the game is over.
    pub fn enable_input(&mut self) {
        self.input_enabled = !self.viewer.is_active() && !self.is_game_over();
    }

    pub fn disable_input(&mut self) {
        self.input_enabled = false;
    }

    pub fn is_game_over(&self) -> bool {
        self.terminal_alert.is_some()
    }

    pub fn open_storybook(&mut self, storybook: Storybook) {
        self.viewer.open(storybook);
        self.training.close();
        self.disable_input();
    }

    pub fn open_ending(&mut self, storybook: Storybook) {
        self.viewer.open_ending(storybook);
        self.training.close();
        self.disable_input();
    }

    /// Leaves the storybook for chat mode.
    pub fn enter_chat(&mut self) {
        self.viewer.close();
        self.enable_input();
    }

    /// Ends the game: viewer closed, input off for good.
    pub fn end_game(&mut self, message: impl Into<String>) {
        self.viewer.close();
        self.training.close();
        self.terminal_alert = Some(message.into());
        self.disable_input();
    }

    /// Whether the training button is offered right now.
    pub fn training_available(&self) -> bool {
        !self.is_game_over()
            && TrainingForm::is_available(self.stats.month(), self.viewer.is_active())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dugout_domain::{CompletionAction, StoryPage};

    fn book() -> Storybook {
        Storybook {
            id: "4_intro".into(),
            title: "4월".into(),
            subtitle: None,
            pages: vec![StoryPage::default()],
            completion_action: CompletionAction::StartChat,
        }
    }

    #[test]
    fn storybook_and_input_are_exclusive() {
        let mut state = ClientState::new();
        state.enable_input();
        assert!(state.input_enabled());

        state.open_storybook(book());
        assert!(!state.input_enabled());
        state.enable_input();
        assert!(!state.input_enabled());

        state.enter_chat();
        assert!(state.input_enabled());
    }

    #[test]
    fn game_over_keeps_input_disabled() {
        let mut state = ClientState::new();
        state.open_ending(book());
        state.end_game("끝");
        state.enter_chat();
        assert!(!state.input_enabled());
        assert!(!state.viewer.is_active());
    }
}
