/// Lifecycle phase of one crop session.
///
/// `Idle` is the loaded, at-rest phase; a freshly loaded image enters it directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CropPhase {
    #[default]
    Closed,
    Idle,
    Dragging,
    Committing,
}

impl CropPhase {
    pub const fn is_loaded(self) -> bool {
        !matches!(self, Self::Closed)
    }

    /// Window-wide pointer tracking is only live while dragging.
    pub const fn tracks_window_pointer(self) -> bool {
        matches!(self, Self::Dragging)
    }
}
