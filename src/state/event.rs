use super::model::CropPhase;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CropEvent {
    Load,
    PointerDown,
    PointerMove,
    PointerUp,
    PointerLeftWindow,
    Zoom,
    Commit,
    CommitSucceeded,
    CommitFailed,
    Cancel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StateTransition {
    pub from: CropPhase,
    pub event: CropEvent,
    pub to: CropPhase,
}

impl StateTransition {
    pub const fn new(from: CropPhase, event: CropEvent, to: CropPhase) -> Self {
        Self { from, event, to }
    }
}
