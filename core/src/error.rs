use thiserror::Error;

use crate::types::{CellCount, Coord2};

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum BoardError {
    #[error("position {0:?} is outside the grid")]
    OutOfBounds(Coord2),
    #[error("cell {0:?} does not allow that transition")]
    InvalidTransition(Coord2),
    #[error("grid dimensions must be at least 1x1")]
    ZeroDimension,
    #[error("{mines} mines do not fit the {cells} available cells")]
    TooManyMines { mines: CellCount, cells: CellCount },
}

pub type Result<T> = core::result::Result<T, BoardError>;
