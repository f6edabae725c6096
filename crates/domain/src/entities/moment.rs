//! Special moments - memorable events collected during the season.

use chrono::{DateTime, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// A "special moment" card.
///
/// Newer servers send an ISO `timestamp`, older ones a preformatted `date`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Moment {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub month: Option<u32>,
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visual_data: Option<serde_json::Value>,
}

impl Moment {
    pub fn display_title(&self) -> &str {
        if self.title.is_empty() {
            "특별한 순간"
        } else {
            &self.title
        }
    }

    /// Date line for the card: `date` verbatim, else the day of `timestamp`.
    pub fn display_date(&self) -> String {
        if let Some(date) = self.date.as_deref().filter(|d| !d.is_empty()) {
            return date.to_string();
        }
        self.timestamp
            .as_deref()
            .and_then(format_timestamp)
            .unwrap_or_else(|| "날짜 미상".to_string())
    }

    /// Emoji from `visual_data.emoji` or `visual_data.icon`, if any.
    pub fn icon(&self) -> Option<String> {
        let data = self.visual_data.as_ref()?;
        data.get("emoji")
            .or_else(|| data.get("icon"))
            .and_then(|v| v.as_str())
            .map(str::to_string)
    }
}

fn format_timestamp(raw: &str) -> Option<String> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.format("%Y-%m-%d").to_string());
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|dt| dt.format("%Y-%m-%d").to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefers_explicit_date() {
        let moment = Moment {
            date: Some("3월 12일".into()),
            timestamp: Some("2024-03-12T10:00:00".into()),
            ..Moment::default()
        };
        assert_eq!(moment.display_date(), "3월 12일");
    }

    #[test]
    fn formats_naive_and_rfc3339_timestamps() {
        let naive = Moment {
            timestamp: Some("2024-03-12T10:11:12.123456".into()),
            ..Moment::default()
        };
        assert_eq!(naive.display_date(), "2024-03-12");

        let zoned = Moment {
            timestamp: Some("2024-06-01T00:00:00+09:00".into()),
            ..Moment::default()
        };
        assert_eq!(zoned.display_date(), "2024-06-01");
    }

    #[test]
    fn falls_back_for_missing_or_garbled_dates() {
        let moment = Moment {
            timestamp: Some("yesterday".into()),
            ..Moment::default()
        };
        assert_eq!(moment.display_date(), "날짜 미상");
        assert_eq!(moment.display_title(), "특별한 순간");
    }

    #[test]
    fn reads_icon_from_visual_data() {
        let moment: Moment = serde_json::from_str(
            r#"{"title": "첫 홈런", "type": "milestone", "visual_data": {"emoji": "⚾"}}"#,
        )
        .unwrap();
        assert_eq!(moment.kind.as_deref(), Some("milestone"));
        assert_eq!(moment.icon().as_deref(), Some("⚾"));
    }
}
