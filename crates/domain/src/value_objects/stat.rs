//! Stat value objects - the player's stat keys, stat blocks, and bar colors.
//!
//! Provides type safety for stat references instead of using magic strings
//! like "intimacy" or "power" throughout the UI.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DomainError;

/// Stats tracked by the game server and shown in the stat panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatKey {
    /// Relationship with 민석
    Intimacy,
    /// Mental strength
    Mental,
    /// Physical stamina, spent by training
    Stamina,
    /// Batting power (older servers call it "power")
    #[serde(alias = "power")]
    Batting,
    /// Base running
    Speed,
    /// Fielding
    Defense,
}

impl StatKey {
    /// Returns the wire name of the stat (e.g., "intimacy", "batting").
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Intimacy => "intimacy",
            Self::Mental => "mental",
            Self::Stamina => "stamina",
            Self::Batting => "batting",
            Self::Speed => "speed",
            Self::Defense => "defense",
        }
    }

    /// Returns the label shown next to the stat bar.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Intimacy => "친밀도",
            Self::Mental => "멘탈",
            Self::Stamina => "체력",
            Self::Batting => "타격",
            Self::Speed => "주루",
            Self::Defense => "수비",
        }
    }

    /// Returns all stats in panel order.
    pub fn all() -> [StatKey; 6] {
        [
            Self::Intimacy,
            Self::Mental,
            Self::Stamina,
            Self::Batting,
            Self::Speed,
            Self::Defense,
        ]
    }
}

impl fmt::Display for StatKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for StatKey {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "intimacy" => Ok(Self::Intimacy),
            "mental" => Ok(Self::Mental),
            "stamina" => Ok(Self::Stamina),
            "batting" | "power" => Ok(Self::Batting),
            "speed" => Ok(Self::Speed),
            "defense" => Ok(Self::Defense),
            other => Err(DomainError::parse(format!("unknown stat: {other}"))),
        }
    }
}

/// A full or partial set of stat values as sent by the server.
///
/// Every field is optional: the server omits stats that do not exist yet
/// (older saves have no `defense`, for instance).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "StatBlockWire")]
pub struct StatBlock {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub intimacy: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mental: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stamina: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub batting: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub speed: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub defense: Option<i32>,
}

impl StatBlock {
    pub fn get(&self, key: StatKey) -> Option<i32> {
        match key {
            StatKey::Intimacy => self.intimacy,
            StatKey::Mental => self.mental,
            StatKey::Stamina => self.stamina,
            StatKey::Batting => self.batting,
            StatKey::Speed => self.speed,
            StatKey::Defense => self.defense,
        }
    }

    pub fn set(&mut self, key: StatKey, value: i32) {
        let slot = match key {
            StatKey::Intimacy => &mut self.intimacy,
            StatKey::Mental => &mut self.mental,
            StatKey::Stamina => &mut self.stamina,
            StatKey::Batting => &mut self.batting,
            StatKey::Speed => &mut self.speed,
            StatKey::Defense => &mut self.defense,
        };
        *slot = Some(value);
    }

    /// Known stats in panel order.
    pub fn entries(&self) -> Vec<(StatKey, i32)> {
        StatKey::all()
            .into_iter()
            .filter_map(|key| self.get(key).map(|value| (key, value)))
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.entries().is_empty()
    }
}

/// Incoming stat block. Older saves report batting as `power`, and some
/// payloads carry both keys; `batting` wins when both are present.
#[derive(Deserialize)]
struct StatBlockWire {
    #[serde(default, deserialize_with = "lenient_stat")]
    intimacy: Option<i32>,
    #[serde(default, deserialize_with = "lenient_stat")]
    mental: Option<i32>,
    #[serde(default, deserialize_with = "lenient_stat")]
    stamina: Option<i32>,
    #[serde(default, deserialize_with = "lenient_stat")]
    batting: Option<i32>,
    #[serde(default, deserialize_with = "lenient_stat")]
    power: Option<i32>,
    #[serde(default, deserialize_with = "lenient_stat")]
    speed: Option<i32>,
    #[serde(default, deserialize_with = "lenient_stat")]
    defense: Option<i32>,
}

impl From<StatBlockWire> for StatBlock {
    fn from(wire: StatBlockWire) -> Self {
        Self {
            intimacy: wire.intimacy,
            mental: wire.mental,
            stamina: wire.stamina,
            batting: wire.batting.or(wire.power),
            speed: wire.speed,
            defense: wire.defense,
        }
    }
}

/// Accepts integers and floats; floats are rounded to the nearest point.
fn lenient_stat<'de, D>(deserializer: D) -> Result<Option<i32>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<f64>::deserialize(deserializer)?;
    Ok(value.map(|v| v.round() as i32))
}

/// Color tier of a stat bar, chosen by fixed thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorTier {
    /// 80 and above
    Green,
    /// 50 to 79
    Blue,
    /// 30 to 49
    Orange,
    /// Below 30
    Red,
}

impl ColorTier {
    pub fn for_value(value: i32) -> Self {
        if value >= 80 {
            Self::Green
        } else if value >= 50 {
            Self::Blue
        } else if value >= 30 {
            Self::Orange
        } else {
            Self::Red
        }
    }

    /// CSS color used for the bar fill.
    pub fn hex(&self) -> &'static str {
        match self {
            Self::Green => "#4CAF50",
            Self::Blue => "#2196F3",
            Self::Orange => "#FF9800",
            Self::Red => "#F44336",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_tier_boundaries_are_inclusive() {
        assert_eq!(ColorTier::for_value(100), ColorTier::Green);
        assert_eq!(ColorTier::for_value(80), ColorTier::Green);
        assert_eq!(ColorTier::for_value(79), ColorTier::Blue);
        assert_eq!(ColorTier::for_value(50), ColorTier::Blue);
        assert_eq!(ColorTier::for_value(49), ColorTier::Orange);
        assert_eq!(ColorTier::for_value(30), ColorTier::Orange);
        assert_eq!(ColorTier::for_value(29), ColorTier::Red);
        assert_eq!(ColorTier::for_value(0), ColorTier::Red);
    }

    #[test]
    fn stat_block_accepts_power_alias_and_floats() {
        let block: StatBlock =
            serde_json::from_str(r#"{"intimacy": 5, "power": 41.6, "speed": 30}"#).unwrap();
        assert_eq!(block.intimacy, Some(5));
        assert_eq!(block.batting, Some(42));
        assert_eq!(block.speed, Some(30));
        assert_eq!(block.defense, None);
    }

    #[test]
    fn stat_block_tolerates_both_batting_spellings() {
        let block: StatBlock =
            serde_json::from_str(r#"{"power": 30, "batting": 35, "mental": 50}"#).unwrap();
        assert_eq!(block.batting, Some(35));
        assert_eq!(block.mental, Some(50));
    }

    #[test]
    fn entries_follow_panel_order_and_skip_missing() {
        let block = StatBlock {
            speed: Some(10),
            intimacy: Some(3),
            ..StatBlock::default()
        };
        assert_eq!(
            block.entries(),
            vec![(StatKey::Intimacy, 3), (StatKey::Speed, 10)]
        );
    }

    #[test]
    fn stat_key_parses_legacy_power() {
        assert_eq!("power".parse::<StatKey>().unwrap(), StatKey::Batting);
        assert_eq!(" Mental ".parse::<StatKey>().unwrap(), StatKey::Mental);
        assert!("luck".parse::<StatKey>().is_err());
    }
}
