use serde::{Deserialize, Serialize};

/// What a cell conceals. Fixed during initialization, never rewritten
/// afterwards.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellKind {
    Empty,
    Mine,
    Numbered(u8),
}

/// How far the player has taken a cell. Starts at `Hidden`; `Opened` is
/// terminal.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RevealState {
    Hidden,
    Flagged,
    Opened,
}

/// Display token a renderer maps to its own glyphs.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sign {
    Flag,
    Closed,
    Mine,
    Blank,
    Number(u8),
}

/// One grid position: what it conceals plus the player-visible state.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    kind: CellKind,
    state: RevealState,
}

impl Cell {
    pub const fn kind(self) -> CellKind {
        self.kind
    }

    pub const fn state(self) -> RevealState {
        self.state
    }

    pub const fn is_mine(self) -> bool {
        matches!(self.kind, CellKind::Mine)
    }

    /// Whether this cell borders at least one mine.
    pub const fn has_adjacent_mines(self) -> bool {
        matches!(self.kind, CellKind::Numbered(_))
    }

    pub const fn is_opened(self) -> bool {
        matches!(self.state, RevealState::Opened)
    }

    pub const fn is_flagged(self) -> bool {
        matches!(self.state, RevealState::Flagged)
    }

    /// A cell counts toward completion once it is opened or flagged.
    pub const fn is_checked(self) -> bool {
        matches!(self.state, RevealState::Opened | RevealState::Flagged)
    }

    pub const fn sign(self) -> Sign {
        match self.state {
            RevealState::Flagged => Sign::Flag,
            RevealState::Hidden => Sign::Closed,
            RevealState::Opened => match self.kind {
                CellKind::Mine => Sign::Mine,
                CellKind::Empty => Sign::Blank,
                CellKind::Numbered(count) => Sign::Number(count),
            },
        }
    }

    pub(crate) fn set_mine(&mut self) {
        self.kind = CellKind::Mine;
    }

    pub(crate) fn set_numbered(&mut self, count: u8) {
        self.kind = CellKind::Numbered(count);
    }

    pub(crate) fn open(&mut self) {
        self.state = RevealState::Opened;
    }

    pub(crate) fn flag(&mut self) {
        self.state = RevealState::Flagged;
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            kind: CellKind::Empty,
            state: RevealState::Hidden,
        }
    }
}
