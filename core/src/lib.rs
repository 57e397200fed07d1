use serde::{Deserialize, Serialize};

pub use board::*;
pub use cell::*;
pub use error::*;
pub use level::*;
pub use placement::*;
pub use types::*;

mod board;
mod cell;
mod error;
mod level;
mod placement;
mod types;

/// Grid dimensions and target mine count for one session.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardConfig {
    pub rows: Coord,
    pub cols: Coord,
    pub mines: CellCount,
}

impl BoardConfig {
    pub const fn new_unchecked(rows: Coord, cols: Coord, mines: CellCount) -> Self {
        Self { rows, cols, mines }
    }

    /// Validates the shape up front so gameplay never has to.
    pub fn new(rows: Coord, cols: Coord, mines: CellCount) -> Result<Self> {
        if rows == 0 || cols == 0 {
            return Err(BoardError::ZeroDimension);
        }
        let cells = types::total_cells(rows, cols);
        if mines > cells {
            return Err(BoardError::TooManyMines { mines, cells });
        }
        Ok(Self::new_unchecked(rows, cols, mines))
    }

    pub const fn total_cells(&self) -> CellCount {
        types::total_cells(self.rows, self.cols)
    }

    pub(crate) const fn dim(&self) -> (usize, usize) {
        (self.rows as usize, self.cols as usize)
    }
}
