//! Training form state and result card.

use std::collections::BTreeSet;

use crate::state::guard::ActionGate;
use crate::value_objects::{is_training_month, IntensityTier, StatKey, TrainingFocus};

const DEFAULT_INTENSITY: u8 = 50;

/// What a submission sends to the server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrainingSubmission {
    pub intensity: u8,
    pub focuses: Vec<TrainingFocus>,
}

/// Training modal state.
///
/// `focuses` is never empty: the form starts with batting selected and the
/// last remaining focus cannot be unchecked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrainingForm {
    is_open: bool,
    gate: ActionGate,
    intensity: u8,
    focuses: BTreeSet<TrainingFocus>,
}

impl Default for TrainingForm {
    fn default() -> Self {
        Self {
            is_open: false,
            gate: ActionGate::new(),
            intensity: DEFAULT_INTENSITY,
            focuses: BTreeSet::from([TrainingFocus::Batting]),
        }
    }
}

impl TrainingForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// The button is offered only in training months and outside storybooks.
    pub fn is_available(month: Option<u32>, storybook_active: bool) -> bool {
        !storybook_active && month.is_some_and(is_training_month)
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn open(&mut self) {
        self.is_open = true;
    }

    pub fn close(&mut self) {
        self.is_open = false;
    }

    pub fn intensity(&self) -> u8 {
        self.intensity
    }

    pub fn set_intensity(&mut self, value: i32) {
        self.intensity = value.clamp(0, 100) as u8;
    }

    pub fn tier(&self) -> IntensityTier {
        IntensityTier::for_intensity(self.intensity)
    }

    pub fn is_selected(&self, focus: TrainingFocus) -> bool {
        self.focuses.contains(&focus)
    }

    pub fn focuses(&self) -> Vec<TrainingFocus> {
        self.focuses.iter().copied().collect()
    }

    /// Toggles a focus. Unchecking the last one is refused and returns `false`.
    pub fn toggle_focus(&mut self, focus: TrainingFocus) -> bool {
        if self.focuses.contains(&focus) {
            if self.focuses.len() == 1 {
                return false;
            }
            self.focuses.remove(&focus);
        } else {
            self.focuses.insert(focus);
        }
        true
    }

    pub fn is_submitting(&self) -> bool {
        self.gate.is_in_flight()
    }

    /// Claims the submit action and returns what to send.
    ///
    /// `None` while a submission is in flight or with no focus selected.
    pub fn begin_submit(&mut self) -> Option<TrainingSubmission> {
        if self.focuses.is_empty() || !self.gate.try_begin() {
            return None;
        }
        Some(TrainingSubmission {
            intensity: self.intensity,
            focuses: self.focuses(),
        })
    }

    pub fn finish_submit(&mut self) {
        self.gate.finish();
    }
}

/// Outcome card appended to the transcript after a successful session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrainingResultCard {
    pub intensity_label: Option<String>,
    /// Per-stat deltas as `(server key, delta)`
    pub stat_changes: Vec<(String, i32)>,
    pub stamina_change: Option<i32>,
    pub summary: Option<String>,
}

impl TrainingResultCard {
    pub fn title(&self) -> String {
        match &self.intensity_label {
            Some(label) => format!("🏋️ {label} 완료"),
            None => "🏋️ 훈련 완료".to_string(),
        }
    }

    /// One display line per change, e.g. `타격 +3`, stamina last.
    pub fn lines(&self) -> Vec<String> {
        let mut lines: Vec<String> = self
            .stat_changes
            .iter()
            .map(|(key, delta)| {
                let name = key
                    .parse::<StatKey>()
                    .map(|k| k.display_name().to_string())
                    .unwrap_or_else(|_| key.clone());
                format!("{name} {delta:+}")
            })
            .collect();
        if let Some(stamina) = self.stamina_change.filter(|s| *s != 0) {
            lines.push(format!("{} {stamina:+}", StatKey::Stamina.display_name()));
        }
        if lines.is_empty() {
            lines.push("변화 없음".to_string());
        }
        lines
    }
}
