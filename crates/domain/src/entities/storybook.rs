//! Storybook entity - an illustrated narrative segment shown between chats
//!
//! A storybook is an ordered list of pages, each with text and an optional
//! image. Its `completion_action` tells the client what the final button
//! does: hand control back to chat or end the game.

use serde::{Deserialize, Serialize};

/// What happens when the player presses the button on the last page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompletionAction {
    /// Report completion to the server and follow its `next_action`
    #[default]
    StartChat,
    /// Terminal storybook (endings); no further server calls
    GameEnd,
    /// Unknown action for forward compatibility, handled like `StartChat`
    #[serde(other)]
    Unknown,
}

impl CompletionAction {
    pub fn is_game_end(&self) -> bool {
        matches!(self, Self::GameEnd)
    }
}

/// One page of a storybook.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoryPage {
    #[serde(default)]
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Storybook {
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    #[serde(default)]
    pub pages: Vec<StoryPage>,
    #[serde(default)]
    pub completion_action: CompletionAction,
}

impl Storybook {
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }
}

/// Ending payload attached to a `game_end` completion response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EndingData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ending_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    #[serde(default)]
    pub pages: Vec<StoryPage>,
}

impl EndingData {
    /// Builds the terminal storybook for this ending.
    ///
    /// Returns `None` when the server sent no pages; the caller then shows
    /// a plain end-of-game notice instead.
    pub fn into_storybook(self) -> Option<Storybook> {
        if self.pages.is_empty() {
            return None;
        }
        Some(Storybook {
            id: self.id.unwrap_or_else(|| "ending".to_string()),
            title: self.title.unwrap_or_else(|| "엔딩".to_string()),
            subtitle: self.subtitle,
            pages: self.pages,
            completion_action: CompletionAction::GameEnd,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_with_defaults() {
        let sb: Storybook = serde_json::from_str(
            r#"{"id": "4_intro", "title": "4월", "pages": [{"text": "봄"}, {"text": "", "image": "/a.png"}]}"#,
        )
        .unwrap();
        assert_eq!(sb.page_count(), 2);
        assert_eq!(sb.completion_action, CompletionAction::StartChat);
        assert_eq!(sb.pages[1].image.as_deref(), Some("/a.png"));
    }

    #[test]
    fn unknown_completion_action_is_tolerated() {
        let sb: Storybook =
            serde_json::from_str(r#"{"id": "x", "completion_action": "show_credits"}"#).unwrap();
        assert_eq!(sb.completion_action, CompletionAction::Unknown);
        assert!(!sb.completion_action.is_game_end());
    }

    #[test]
    fn ending_without_pages_has_no_storybook() {
        let ending = EndingData {
            title: Some("C 엔딩".into()),
            ..EndingData::default()
        };
        assert!(ending.into_storybook().is_none());
    }

    #[test]
    fn ending_with_pages_becomes_terminal_storybook() {
        let ending = EndingData {
            pages: vec![StoryPage {
                text: "끝".into(),
                image: None,
            }],
            ..EndingData::default()
        };
        let sb = ending.into_storybook().unwrap();
        assert_eq!(sb.id, "ending");
        assert_eq!(sb.title, "엔딩");
        assert!(sb.completion_action.is_game_end());
    }
}
