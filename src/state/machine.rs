use super::error::{StateError, StateResult};
use super::{event::StateTransition, CropEvent, CropPhase};

#[derive(Debug)]
pub struct StateMachine {
    phase: CropPhase,
    transition_history: Vec<StateTransition>,
}

impl StateMachine {
    pub fn new() -> Self {
        Self {
            phase: CropPhase::default(),
            transition_history: Vec::new(),
        }
    }

    pub fn phase(&self) -> CropPhase {
        self.phase
    }

    pub fn can_transition(&self, event: CropEvent) -> bool {
        self.next_phase(event).is_some()
    }

    pub fn next_phase(&self, event: CropEvent) -> Option<CropPhase> {
        use CropEvent::*;
        match (self.phase, event) {
            (_, Cancel) => Some(CropPhase::Closed),
            (CropPhase::Closed, Load) => Some(CropPhase::Idle),
            (CropPhase::Idle, PointerDown) => Some(CropPhase::Dragging),
            (CropPhase::Dragging, PointerMove) => Some(CropPhase::Dragging),
            (CropPhase::Dragging, PointerUp | PointerLeftWindow) => Some(CropPhase::Idle),
            (CropPhase::Idle, Zoom) => Some(CropPhase::Idle),
            (CropPhase::Dragging, Zoom) => Some(CropPhase::Dragging),
            (CropPhase::Idle, Commit) => Some(CropPhase::Committing),
            (CropPhase::Committing, CommitSucceeded) => Some(CropPhase::Closed),
            (CropPhase::Committing, CommitFailed) => Some(CropPhase::Idle),
            _ => None,
        }
    }

    /// Applies `event`, recording the transition when the phase actually changes.
    pub fn transition(&mut self, event: CropEvent) -> StateResult<CropPhase> {
        let next = self.next_phase(event).ok_or_else(|| {
            let from = self.phase;
            tracing::warn!(from = ?from, event = ?event, "invalid crop transition requested");
            StateError::InvalidTransition { from, event }
        })?;

        if next != self.phase {
            tracing::debug!(from = ?self.phase, event = ?event, to = ?next, "crop phase transition");
            self.transition_history
                .push(StateTransition::new(self.phase, event, next));
            self.phase = next;
        }

        Ok(self.phase)
    }

    pub fn history(&self) -> &[StateTransition] {
        &self.transition_history
    }
}

impl Default for StateMachine {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for StateMachine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "CropPhase::{:?}", self.phase)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn can_transition_tracks_valid_and_invalid_events() {
        let mut machine = StateMachine::new();
        assert!(machine.can_transition(CropEvent::Load));
        assert!(machine.can_transition(CropEvent::Cancel));
        assert!(!machine.can_transition(CropEvent::PointerDown));
        assert!(!machine.can_transition(CropEvent::Commit));

        let _ = machine
            .transition(CropEvent::Load)
            .expect("closed -> idle should transition");

        assert!(machine.can_transition(CropEvent::PointerDown));
        assert!(machine.can_transition(CropEvent::Zoom));
        assert!(machine.can_transition(CropEvent::Commit));
        assert!(!machine.can_transition(CropEvent::PointerUp));
        assert!(!machine.can_transition(CropEvent::Load));
    }

    #[test]
    fn transition_records_only_phase_changes_in_order() {
        let mut machine = StateMachine::new();
        machine.transition(CropEvent::Load).expect("load");
        machine.transition(CropEvent::PointerDown).expect("press");
        machine.transition(CropEvent::PointerMove).expect("move");
        machine.transition(CropEvent::Zoom).expect("zoom while dragging");
        machine.transition(CropEvent::PointerUp).expect("release");
        machine.transition(CropEvent::Commit).expect("commit");
        machine
            .transition(CropEvent::CommitSucceeded)
            .expect("commit success");

        assert_eq!(machine.phase(), CropPhase::Closed);
        assert_eq!(
            machine.history(),
            &[
                StateTransition::new(CropPhase::Closed, CropEvent::Load, CropPhase::Idle),
                StateTransition::new(CropPhase::Idle, CropEvent::PointerDown, CropPhase::Dragging),
                StateTransition::new(CropPhase::Dragging, CropEvent::PointerUp, CropPhase::Idle),
                StateTransition::new(CropPhase::Idle, CropEvent::Commit, CropPhase::Committing),
                StateTransition::new(
                    CropPhase::Committing,
                    CropEvent::CommitSucceeded,
                    CropPhase::Closed
                ),
            ]
        );
    }

    #[test]
    fn failed_commit_returns_to_idle() {
        let mut machine = StateMachine::new();
        machine.transition(CropEvent::Load).expect("load");
        machine.transition(CropEvent::Commit).expect("commit");
        let phase = machine
            .transition(CropEvent::CommitFailed)
            .expect("commit failure");
        assert_eq!(phase, CropPhase::Idle);
    }

    #[test]
    fn cancel_closes_from_every_phase() {
        for events in [
            &[][..],
            &[CropEvent::Load][..],
            &[CropEvent::Load, CropEvent::PointerDown][..],
            &[CropEvent::Load, CropEvent::Commit][..],
        ] {
            let mut machine = StateMachine::new();
            for event in events {
                machine.transition(*event).expect("setup transition");
            }
            assert_eq!(
                machine.transition(CropEvent::Cancel).expect("cancel"),
                CropPhase::Closed
            );
        }
    }

    #[test]
    fn invalid_transition_returns_error_without_mutating_history() {
        let mut machine = StateMachine::new();

        let err = machine
            .transition(CropEvent::PointerDown)
            .expect_err("closed -> pointer down should fail");
        assert_eq!(
            err,
            StateError::InvalidTransition {
                from: CropPhase::Closed,
                event: CropEvent::PointerDown
            }
        );
        assert_eq!(machine.phase(), CropPhase::Closed);
        assert!(machine.history().is_empty());
    }
}
