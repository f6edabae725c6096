//! Game-state snapshot as reported by the server.

use serde::{Deserialize, Serialize};

use crate::value_objects::StatBlock;

/// A read-only snapshot of the player's game state.
///
/// Replaced wholesale on every fetch. The stats endpoint calls the month
/// `month` (and the day `day`), the chat metadata uses `current_month`;
/// both spellings are accepted, together or alone.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "GameStateWire")]
pub struct GameStateSnapshot {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_month: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_day: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub intimacy_level: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub months_until_draft: Option<u32>,
    pub stats: StatBlock,
}

#[derive(Deserialize)]
struct GameStateWire {
    #[serde(default)]
    current_month: Option<u32>,
    #[serde(default)]
    month: Option<u32>,
    #[serde(default)]
    current_day: Option<u32>,
    #[serde(default)]
    day: Option<u32>,
    #[serde(default)]
    intimacy_level: Option<String>,
    #[serde(default)]
    months_until_draft: Option<u32>,
    #[serde(default)]
    stats: StatBlock,
}

impl From<GameStateWire> for GameStateSnapshot {
    fn from(wire: GameStateWire) -> Self {
        Self {
            current_month: wire.current_month.or(wire.month),
            current_day: wire.current_day.or(wire.day),
            intimacy_level: wire.intimacy_level,
            months_until_draft: wire.months_until_draft,
            stats: wire.stats,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_month_alias() {
        let snap: GameStateSnapshot = serde_json::from_str(
            r#"{"month": 4, "intimacy_level": "친해지는 중", "stats": {"intimacy": 25}}"#,
        )
        .unwrap();
        assert_eq!(snap.current_month, Some(4));
        assert_eq!(snap.stats.intimacy, Some(25));
    }

    #[test]
    fn accepts_both_month_spellings_together() {
        let snap: GameStateSnapshot = serde_json::from_str(
            r#"{"current_month": 6, "month": 6, "day": 3, "stats": {"power": 30, "batting": 30}}"#,
        )
        .unwrap();
        assert_eq!(snap.current_month, Some(6));
        assert_eq!(snap.current_day, Some(3));
        assert_eq!(snap.stats.batting, Some(30));
    }

    #[test]
    fn tolerates_partial_snapshot() {
        let snap: GameStateSnapshot = serde_json::from_str(r#"{"stats": {"intimacy": 5}}"#).unwrap();
        assert_eq!(snap.current_month, None);
        assert_eq!(snap.intimacy_level, None);
    }
}
