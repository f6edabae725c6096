//! Stat panel - bars, month banner and delta indicators.

use std::collections::BTreeMap;

use crate::entities::GameStateSnapshot;
use crate::value_objects::{is_training_month, month_copy, ColorTier, MonthCopy, StatKey};

/// How long a `+N` / `-N` indicator floats before the view removes it.
pub const DELTA_INDICATOR_MS: u64 = 1500;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatTrend {
    Increase,
    Decrease,
}

impl StatTrend {
    pub fn css_class(&self) -> &'static str {
        match self {
            Self::Increase => "stat-increase",
            Self::Decrease => "stat-decrease",
        }
    }
}

/// Render data for one bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatBar {
    pub key: StatKey,
    pub value: i32,
    pub tier: ColorTier,
    /// Transient highlight after a change, cleared by the view
    pub trend: Option<StatTrend>,
}

impl StatBar {
    fn new(key: StatKey, value: i32) -> Self {
        Self {
            key,
            value,
            tier: ColorTier::for_value(value),
            trend: None,
        }
    }

    /// Fill width, clamped to 0-100 percent.
    pub fn width_percent(&self) -> u8 {
        self.value.clamp(0, 100) as u8
    }

    pub fn display_text(&self) -> String {
        format!("{}/100", self.value)
    }
}

/// A floating delta shown next to a bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeltaIndicator {
    pub id: u64,
    pub key: StatKey,
    pub delta: i32,
}

impl DeltaIndicator {
    pub fn label(&self) -> String {
        if self.delta > 0 {
            format!("+{}", self.delta)
        } else {
            format!("{}", self.delta)
        }
    }

    pub fn is_positive(&self) -> bool {
        self.delta > 0
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct StatPanel {
    bars: BTreeMap<StatKey, StatBar>,
    month: Option<u32>,
    intimacy_level: Option<String>,
    indicators: Vec<DeltaIndicator>,
    next_indicator: u64,
}

impl StatPanel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bars in panel order, only for stats the server has reported.
    pub fn bars(&self) -> Vec<&StatBar> {
        StatKey::all()
            .iter()
            .filter_map(|key| self.bars.get(key))
            .collect()
    }

    pub fn bar(&self, key: StatKey) -> Option<&StatBar> {
        self.bars.get(&key)
    }

    pub fn value(&self, key: StatKey) -> Option<i32> {
        self.bars.get(&key).map(|b| b.value)
    }

    pub fn indicators(&self) -> &[DeltaIndicator] {
        &self.indicators
    }

    pub fn month(&self) -> Option<u32> {
        self.month
    }

    pub fn intimacy_level(&self) -> Option<&str> {
        self.intimacy_level.as_deref()
    }

    pub fn month_copy(&self) -> Option<MonthCopy> {
        self.month.and_then(month_copy).copied()
    }

    pub fn is_training_month(&self) -> bool {
        self.month.is_some_and(is_training_month)
    }

    /// Sets one bar's value.
    ///
    /// When a previously known value changes, the bar gets a trend and an
    /// indicator is queued; its id is returned so the caller can schedule the
    /// removal. The first observation and repeated identical values never
    /// animate.
    pub fn update_stat_bar(&mut self, key: StatKey, value: i32) -> Option<u64> {
        let previous = self.bars.get(&key).map(|b| b.value);
        let mut bar = StatBar::new(key, value);

        let indicator = match previous {
            Some(old) if old != value => {
                let delta = value - old;
                bar.trend = Some(if delta > 0 {
                    StatTrend::Increase
                } else {
                    StatTrend::Decrease
                });
                let id = self.next_indicator;
                self.next_indicator += 1;
                self.indicators.push(DeltaIndicator { id, key, delta });
                Some(id)
            }
            Some(_) => {
                bar.trend = self.bars.get(&key).and_then(|b| b.trend);
                None
            }
            None => None,
        };

        self.bars.insert(key, bar);
        indicator
    }

    /// Applies a full snapshot; returns ids of the indicators it queued.
    pub fn apply_snapshot(&mut self, snapshot: &GameStateSnapshot) -> Vec<u64> {
        if let Some(month) = snapshot.current_month {
            self.month = Some(month);
        }
        if let Some(level) = &snapshot.intimacy_level {
            self.intimacy_level = Some(level.clone());
        }
        snapshot
            .stats
            .entries()
            .into_iter()
            .filter_map(|(key, value)| self.update_stat_bar(key, value))
            .collect()
    }

    pub fn remove_indicator(&mut self, id: u64) {
        self.indicators.retain(|i| i.id != id);
    }

    pub fn clear_trend(&mut self, key: StatKey) {
        if let Some(bar) = self.bars.get_mut(&key) {
            bar.trend = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value_objects::StatBlock;

    #[test]
    fn first_observation_does_not_animate() {
        let mut panel = StatPanel::new();
        assert_eq!(panel.update_stat_bar(StatKey::Mental, 55), None);
        let bar = panel.bar(StatKey::Mental).unwrap();
        assert_eq!(bar.display_text(), "55/100");
        assert_eq!(bar.tier, ColorTier::Blue);
        assert_eq!(bar.trend, None);
        assert!(panel.indicators().is_empty());
    }

    #[test]
    fn same_value_is_idempotent() {
        let mut panel = StatPanel::new();
        panel.update_stat_bar(StatKey::Stamina, 40);
        let before = panel.clone();
        assert_eq!(panel.update_stat_bar(StatKey::Stamina, 40), None);
        assert_eq!(panel, before);
    }

    #[test]
    fn change_queues_indicator_with_sign() {
        let mut panel = StatPanel::new();
        panel.update_stat_bar(StatKey::Intimacy, 20);
        let up = panel.update_stat_bar(StatKey::Intimacy, 25).unwrap();
        let down = panel.update_stat_bar(StatKey::Intimacy, 22).unwrap();
        assert_ne!(up, down);

        let labels: Vec<_> = panel.indicators().iter().map(|i| i.label()).collect();
        assert_eq!(labels, vec!["+5", "-3"]);
        assert_eq!(
            panel.bar(StatKey::Intimacy).unwrap().trend,
            Some(StatTrend::Decrease)
        );

        panel.remove_indicator(up);
        panel.clear_trend(StatKey::Intimacy);
        assert_eq!(panel.indicators().len(), 1);
        assert_eq!(panel.bar(StatKey::Intimacy).unwrap().trend, None);
    }

    #[test]
    fn width_is_clamped() {
        let mut panel = StatPanel::new();
        panel.update_stat_bar(StatKey::Speed, 130);
        panel.update_stat_bar(StatKey::Defense, -5);
        assert_eq!(panel.bar(StatKey::Speed).unwrap().width_percent(), 100);
        assert_eq!(panel.bar(StatKey::Defense).unwrap().width_percent(), 0);
        assert_eq!(panel.bar(StatKey::Speed).unwrap().display_text(), "130/100");
    }

    #[test]
    fn snapshot_updates_month_and_bars_in_order() {
        let mut panel = StatPanel::new();
        let mut stats = StatBlock::default();
        stats.set(StatKey::Batting, 30);
        stats.set(StatKey::Intimacy, 10);
        let snapshot = GameStateSnapshot {
            current_month: Some(6),
            intimacy_level: Some("어색한 사이".into()),
            stats,
            ..GameStateSnapshot::default()
        };

        assert!(panel.apply_snapshot(&snapshot).is_empty());
        assert_eq!(panel.month(), Some(6));
        assert!(panel.is_training_month());
        assert_eq!(panel.month_copy().unwrap().month, 6);
        assert_eq!(panel.intimacy_level(), Some("어색한 사이"));
        let keys: Vec<_> = panel.bars().iter().map(|b| b.key).collect();
        assert_eq!(keys, vec![StatKey::Intimacy, StatKey::Batting]);

        // Same snapshot again: nothing animates.
        assert!(panel.apply_snapshot(&snapshot).is_empty());
    }
}
