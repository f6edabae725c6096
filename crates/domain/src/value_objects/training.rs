//! Training value objects - focus areas and intensity tiers.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::StatKey;

/// A stat the player can focus a training session on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrainingFocus {
    Batting,
    Speed,
    Defense,
}

impl TrainingFocus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Batting => "batting",
            Self::Speed => "speed",
            Self::Defense => "defense",
        }
    }

    pub fn stat(&self) -> StatKey {
        match self {
            Self::Batting => StatKey::Batting,
            Self::Speed => StatKey::Speed,
            Self::Defense => StatKey::Defense,
        }
    }

    pub fn all() -> [TrainingFocus; 3] {
        [Self::Batting, Self::Speed, Self::Defense]
    }
}

impl fmt::Display for TrainingFocus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Intensity band the server maps the 0-100 lever to.
///
/// The form previews the band so the player knows whether a session spends
/// or restores stamina before submitting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntensityTier {
    Recovery,
    Light,
    Standard,
    Focused,
    HighIntensity,
}

impl IntensityTier {
    pub fn for_intensity(intensity: u8) -> Self {
        match intensity {
            0..=20 => Self::Recovery,
            21..=40 => Self::Light,
            41..=70 => Self::Standard,
            71..=85 => Self::Focused,
            _ => Self::HighIntensity,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Recovery => "Recovery Session",
            Self::Light => "Light Training",
            Self::Standard => "Standard Training",
            Self::Focused => "Focused Training",
            Self::HighIntensity => "High-Intensity Training",
        }
    }

    /// Expected stamina change for the tier.
    pub fn stamina_change(&self) -> i32 {
        match self {
            Self::Recovery => 10,
            Self::Light => 4,
            Self::Standard => -6,
            Self::Focused => -12,
            Self::HighIntensity => -20,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn intensity_tier_boundaries() {
        assert_eq!(IntensityTier::for_intensity(0), IntensityTier::Recovery);
        assert_eq!(IntensityTier::for_intensity(20), IntensityTier::Recovery);
        assert_eq!(IntensityTier::for_intensity(21), IntensityTier::Light);
        assert_eq!(IntensityTier::for_intensity(40), IntensityTier::Light);
        assert_eq!(IntensityTier::for_intensity(70), IntensityTier::Standard);
        assert_eq!(IntensityTier::for_intensity(85), IntensityTier::Focused);
        assert_eq!(IntensityTier::for_intensity(86), IntensityTier::HighIntensity);
        assert_eq!(IntensityTier::for_intensity(100), IntensityTier::HighIntensity);
    }

    #[test]
    fn focus_serializes_snake_case() {
        let json = serde_json::to_string(&[TrainingFocus::Batting, TrainingFocus::Defense]).unwrap();
        assert_eq!(json, r#"["batting","defense"]"#);
    }
}
