//! Response envelopes
//!
//! Most endpoints answer `{success, ...}`. Every field except `success` is
//! optional on the wire, so everything here defaults when absent and ignores
//! fields it does not know.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use dugout_domain::{
    EndingData, GameStateSnapshot, Moment, MonthGuide, StatBlock, Storybook, TriggeredEvent,
};

// =============================================================================
// Chat
// =============================================================================

/// The `reply` field of a legacy chat response: plain text or `{reply, image}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ReplyBody {
    Text(String),
    Rich {
        #[serde(default)]
        reply: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        image: Option<String>,
    },
}

impl ReplyBody {
    pub fn text(&self) -> &str {
        match self {
            Self::Text(text) => text,
            Self::Rich { reply, .. } => reply,
        }
    }

    pub fn image(&self) -> Option<&str> {
        match self {
            Self::Text(_) => None,
            Self::Rich { image, .. } => image.as_deref(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StatChangeReport {
    #[serde(default)]
    pub changes: BTreeMap<String, serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub old_stats: Option<StatBlock>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub new_stats: Option<StatBlock>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventCheck {
    #[serde(default)]
    pub triggered: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event_name: Option<String>,
}

/// Diagnostic block attached to every chat reply.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DebugInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub game_state: Option<GameStateSnapshot>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stat_changes: Option<StatChangeReport>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event_check: Option<EventCheck>,
    #[serde(default)]
    pub hint_provided: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conversation_count: Option<u32>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub event_history: Vec<serde_json::Value>,
}

/// What a reply carries besides its text.
///
/// Sent as the `metadata` stream record, or inline in a legacy reply.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChatMetadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub debug: Option<DebugInfo>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event: Option<TriggeredEvent>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
    /// Storybook to open once the reply is shown
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub storybook_id: Option<String>,
}

impl ChatMetadata {
    pub fn game_state(&self) -> Option<&GameStateSnapshot> {
        self.debug.as_ref().and_then(|d| d.game_state.as_ref())
    }
}

/// Legacy `/api/chat` response.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChatReply {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reply: Option<ReplyBody>,
    /// Some server versions put the image beside `reply`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(flatten)]
    pub metadata: ChatMetadata,
}

impl ChatReply {
    pub fn text(&self) -> &str {
        self.reply.as_ref().map(ReplyBody::text).unwrap_or_default()
    }

    pub fn image(&self) -> Option<&str> {
        self.reply
            .as_ref()
            .and_then(ReplyBody::image)
            .or(self.image.as_deref())
    }
}

/// Content of a `full_response` stream record: a scripted reply delivered in
/// one piece, optionally followed by a storybook.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FullResponse {
    #[serde(default)]
    pub reply: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub storybook_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthStartResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub system_message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

// =============================================================================
// Game
// =============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatsResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(flatten)]
    pub snapshot: GameStateSnapshot,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HintsResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub hints: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MomentsResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub moments: Vec<Moment>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdvanceResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub new_month: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transition_storybook_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub guide: Option<MonthGuide>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event: Option<TriggeredEvent>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventChoiceResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub storybook_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TrainingResponse {
    #[serde(default)]
    pub success: bool,
    /// Soft refusal (e.g. monthly limit); the form stays open
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default)]
    pub stat_changes: BTreeMap<String, i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stamina_change: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub intensity_label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
}

// =============================================================================
// Storybook
// =============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorybookResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub storybook: Option<Storybook>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrentStorybookResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub phase: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub storybook: Option<Storybook>,
}

impl CurrentStorybookResponse {
    /// The storybook to open at startup, if the server is in storybook phase.
    pub fn active_storybook_id(&self) -> Option<&str> {
        if !self.success || self.phase != "storybook" {
            return None;
        }
        self.storybook.as_ref().map(|s| s.id.as_str())
    }
}

/// What the client does after a storybook is completed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NextAction {
    #[default]
    StartChatMode,
    ShowNextStorybook,
    GameEnd,
    /// Unknown action for forward compatibility
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorybookCompleteResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub next_action: NextAction,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_storybook_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ending: Option<EndingData>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn legacy_reply_accepts_text_and_object() {
        let plain: ChatReply = serde_json::from_value(json!({"reply": "안녕"})).unwrap();
        assert_eq!(plain.text(), "안녕");
        assert_eq!(plain.image(), None);

        let rich: ChatReply = serde_json::from_value(
            json!({"reply": {"reply": "사진 봐요", "image": "/static/a.png"}}),
        )
        .unwrap();
        assert_eq!(rich.text(), "사진 봐요");
        assert_eq!(rich.image(), Some("/static/a.png"));

        let sibling: ChatReply =
            serde_json::from_value(json!({"reply": "x", "image": "/b.png"})).unwrap();
        assert_eq!(sibling.image(), Some("/b.png"));
    }

    #[test]
    fn legacy_reply_carries_metadata() {
        let reply: ChatReply = serde_json::from_value(json!({
            "reply": "좋아요",
            "hint": "칭찬을 해보세요",
            "event": {"event_key": "k", "event_name": "첫 만남", "trigger_message": "..."},
            "debug": {
                "game_state": {"current_month": 3, "stats": {"intimacy": 12}},
                "stat_changes": {"changes": {"intimacy": 2}, "reason": "칭찬"},
                "event_check": {"triggered": true, "event_name": "첫 만남"},
                "hint_provided": true,
                "conversation_count": 4,
                "event_history": []
            }
        }))
        .unwrap();
        assert_eq!(reply.metadata.hint.as_deref(), Some("칭찬을 해보세요"));
        assert_eq!(reply.metadata.event.as_ref().unwrap().event_name, "첫 만남");
        let state = reply.metadata.game_state().unwrap();
        assert_eq!(state.current_month, Some(3));
        assert_eq!(state.stats.intimacy, Some(12));
    }

    #[test]
    fn stats_response_flattens_snapshot() {
        let stats: StatsResponse = serde_json::from_value(json!({
            "success": true,
            "month": 4,
            "day": 1,
            "stats": {"intimacy": 30, "power": 41.6},
            "flags": {},
            "intimacy_level": "친해지는 중"
        }))
        .unwrap();
        assert!(stats.success);
        assert_eq!(stats.snapshot.current_month, Some(4));
        assert_eq!(stats.snapshot.stats.batting, Some(42));
    }

    #[test]
    fn stats_response_with_both_month_keys_parses() {
        let stats: StatsResponse = serde_json::from_str(
            r#"{"success":true,"current_month":4,"month":4,"stats":{"intimacy":5,"power":30,"batting":30}}"#,
        )
        .unwrap();
        assert_eq!(stats.snapshot.current_month, Some(4));
        assert_eq!(stats.snapshot.stats.intimacy, Some(5));
        assert_eq!(stats.snapshot.stats.batting, Some(30));
    }

    #[test]
    fn current_storybook_only_in_storybook_phase() {
        let chat: CurrentStorybookResponse =
            serde_json::from_value(json!({"success": true, "phase": "chat"})).unwrap();
        assert_eq!(chat.active_storybook_id(), None);

        let book: CurrentStorybookResponse = serde_json::from_value(json!({
            "success": true,
            "phase": "storybook",
            "storybook": {"id": "3_intro", "pages": []}
        }))
        .unwrap();
        assert_eq!(book.active_storybook_id(), Some("3_intro"));
    }

    #[test]
    fn unknown_next_action_is_tolerated() {
        let done: StorybookCompleteResponse =
            serde_json::from_value(json!({"success": true, "next_action": "credits"})).unwrap();
        assert_eq!(done.next_action, NextAction::Unknown);

        let end: StorybookCompleteResponse = serde_json::from_value(json!({
            "success": true,
            "next_action": "game_end",
            "ending": {"ending_type": "A", "title": "A 엔딩", "pages": [{"text": "끝"}]}
        }))
        .unwrap();
        assert_eq!(end.next_action, NextAction::GameEnd);
        assert_eq!(end.ending.unwrap().pages.len(), 1);
    }
}
