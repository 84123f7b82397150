use super::event::CropEvent;
use super::model::CropPhase;
use thiserror::Error;

pub type StateResult<T> = std::result::Result<T, StateError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StateError {
    #[error("invalid crop transition: from {from:?} using event {event:?}")]
    InvalidTransition { from: CropPhase, event: CropEvent },
}
