//! Request bodies for POST endpoints.

use serde::{Deserialize, Serialize};

use dugout_domain::TrainingFocus;

/// Body of `/api/chat` and `/api/chat/stream`.
///
/// The literal message `init` asks the server for the opening line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatRequest {
    pub message: String,
    pub username: String,
}

impl ChatRequest {
    pub const INIT_MESSAGE: &'static str = "init";

    pub fn new(message: impl Into<String>, username: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            username: username.into(),
        }
    }

    pub fn init(username: impl Into<String>) -> Self {
        Self::new(Self::INIT_MESSAGE, username)
    }
}

/// Body carrying only the player name (`/api/game/advance`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsernameRequest {
    pub username: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorybookCompleteRequest {
    pub username: String,
    pub storybook_id: String,
}

/// Asks the server for the system message that opens a month's chat.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthStartRequest {
    pub username: String,
    pub storybook_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrainingRequest {
    pub username: String,
    pub intensity: u8,
    pub focuses: Vec<TrainingFocus>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventChoiceRequest {
    pub username: String,
    pub event_key: String,
    pub choice_id: String,
}
