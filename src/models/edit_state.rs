/// Single-slot edit state of the activity flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditState {
    #[default]
    Idle,
    Editing(usize),
}

impl EditState {
    /// Where the slot points after the record at `removed` is deleted.
    pub fn after_delete(self, removed: usize) -> Self {
        match self {
            EditState::Editing(p) if p == removed => EditState::Idle,
            EditState::Editing(p) if p > removed => EditState::Editing(p - 1),
            other => other,
        }
    }
}
