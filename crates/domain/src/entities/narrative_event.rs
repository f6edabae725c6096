//! Triggered narrative events pushed by the server during chat.

use serde::{Deserialize, Serialize};

/// A branching option offered by a triggered event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventChoice {
    pub id: String,
    pub text: String,
}

/// An event the server detected in the conversation.
///
/// Events without choices become a notification card; events with choices
/// become an inline chat message with one button per choice.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TriggeredEvent {
    #[serde(default)]
    pub event_key: String,
    #[serde(default)]
    pub event_name: String,
    #[serde(default)]
    pub trigger_message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub choices: Vec<EventChoice>,
}

impl TriggeredEvent {
    pub fn has_choices(&self) -> bool {
        !self.choices.is_empty()
    }
}
