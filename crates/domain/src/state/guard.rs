//! Per-action re-entrancy guard.

/// Lifecycle of a guarded user action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActionPhase {
    #[default]
    Idle,
    InFlight,
    Done,
}

/// Lets one instance of an action run at a time.
///
/// `try_begin` succeeds from `Idle` or `Done` and moves to `InFlight`;
/// a second `try_begin` while in flight is refused. `finish` always returns
/// the gate to `Done`, whether the action succeeded or not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ActionGate {
    phase: ActionPhase,
}

impl ActionGate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> ActionPhase {
        self.phase
    }

    pub fn is_in_flight(&self) -> bool {
        self.phase == ActionPhase::InFlight
    }

    /// Returns `true` if the caller now owns the action.
    pub fn try_begin(&mut self) -> bool {
        if self.is_in_flight() {
            return false;
        }
        self.phase = ActionPhase::InFlight;
        true
    }

    pub fn finish(&mut self) {
        self.phase = ActionPhase::Done;
    }

    pub fn reset(&mut self) {
        self.phase = ActionPhase::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn refuses_second_begin_while_in_flight() {
        let mut gate = ActionGate::new();
        assert!(gate.try_begin());
        assert!(!gate.try_begin());
        assert_eq!(gate.phase(), ActionPhase::InFlight);
    }

    #[test]
    fn can_run_again_after_finish() {
        let mut gate = ActionGate::new();
        assert!(gate.try_begin());
        gate.finish();
        assert_eq!(gate.phase(), ActionPhase::Done);
        assert!(gate.try_begin());
    }
}
