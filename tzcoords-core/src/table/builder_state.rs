use std::fmt::Display;

/// lifecycle of a [`super::ZoneTableBuilder`].
///
/// `Empty -> Accumulating -> Finalized`, with any failure moving directly to
/// the terminal `Failed` state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuilderState {
    Empty,
    Accumulating,
    Finalized,
    Failed,
}

impl BuilderState {
    /// true while the builder still accepts rows
    pub fn is_open(&self) -> bool {
        matches!(self, BuilderState::Empty | BuilderState::Accumulating)
    }
}

impl Display for BuilderState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            BuilderState::Empty => "empty",
            BuilderState::Accumulating => "accumulating",
            BuilderState::Finalized => "finalized",
            BuilderState::Failed => "failed",
        };
        write!(f, "{s}")
    }
}
