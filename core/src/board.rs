use std::collections::VecDeque;

use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::BoardConfig;
use crate::cell::{Cell, Sign};
use crate::error::{BoardError, Result};
use crate::placement::{MinePlacement, ScatterPlacement};
use crate::types::{Coord, Coord2, nd, neighbors};

/// Owns the cell grid and drives the open/flag/reveal state machine.
///
/// A board lives for one session: construct it, initialize it once, then
/// play it to a win or a loss. Cell kinds are fixed by initialization and
/// only the reveal states move afterwards.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Board {
    config: BoardConfig,
    cells: Array2<Cell>,
}

impl Board {
    /// Allocates the grid with every cell a hidden placeholder. Call
    /// [`initialize`](Self::initialize) before playing.
    pub fn new(config: BoardConfig) -> Self {
        Self {
            config,
            cells: Array2::default(config.dim()),
        }
    }

    pub const fn config(&self) -> BoardConfig {
        self.config
    }

    pub const fn row_count(&self) -> Coord {
        self.config.rows
    }

    pub const fn col_count(&self) -> Coord {
        self.config.cols
    }

    fn bounds(&self) -> Coord2 {
        (self.config.rows, self.config.cols)
    }

    fn in_bounds(&self, (row, col): Coord2) -> bool {
        row < self.config.rows && col < self.config.cols
    }

    fn cell(&self, coords: Coord2) -> Result<&Cell> {
        if self.in_bounds(coords) {
            Ok(&self.cells[nd(coords)])
        } else {
            Err(BoardError::OutOfBounds(coords))
        }
    }

    /// Places mines with the default scatter strategy.
    pub fn initialize(&mut self, seed: u64) {
        self.initialize_with(ScatterPlacement::new(seed));
    }

    /// Resets every cell to a hidden empty, applies the placement's mine
    /// mask, then derives the numbered kinds from the in-bounds neighbor
    /// counts. Kinds do not change again until the next initialization.
    pub fn initialize_with<P: MinePlacement>(&mut self, placement: P) {
        self.cells.fill(Cell::default());

        let mask = placement.place(self.config);
        for ((row, col), &mine) in mask.indexed_iter() {
            if mine {
                self.cells[(row, col)].set_mine();
            }
        }

        let bounds = self.bounds();
        for row in 0..self.config.rows {
            for col in 0..self.config.cols {
                if self.cells[nd((row, col))].is_mine() {
                    continue;
                }
                let count = neighbors((row, col), bounds)
                    .filter(|&pos| self.cells[nd(pos)].is_mine())
                    .count() as u8;
                if count > 0 {
                    self.cells[nd((row, col))].set_numbered(count);
                }
            }
        }
        log::debug!(
            "initialized {}x{} board targeting {} mines",
            self.config.rows,
            self.config.cols,
            self.config.mines
        );
    }

    pub fn is_mine(&self, coords: Coord2) -> Result<bool> {
        Ok(self.cell(coords)?.is_mine())
    }

    pub fn sign_at(&self, coords: Coord2) -> Result<Sign> {
        Ok(self.cell(coords)?.sign())
    }

    pub fn cell_at(&self, coords: Coord2) -> Result<Cell> {
        self.cell(coords).copied()
    }

    /// Flags a hidden cell. Re-flagging a flagged cell is accepted and
    /// changes nothing; there is no way back to hidden.
    pub fn flag(&mut self, coords: Coord2) -> Result<()> {
        if !self.in_bounds(coords) {
            return Err(BoardError::OutOfBounds(coords));
        }
        let cell = &mut self.cells[nd(coords)];
        if cell.is_opened() {
            return Err(BoardError::InvalidTransition(coords));
        }
        cell.flag();
        Ok(())
    }

    /// Opens a single hidden cell, whatever it conceals. Never cascades.
    pub fn open(&mut self, coords: Coord2) -> Result<()> {
        if !self.in_bounds(coords) {
            return Err(BoardError::OutOfBounds(coords));
        }
        let cell = &mut self.cells[nd(coords)];
        if cell.is_opened() || cell.is_flagged() {
            return Err(BoardError::InvalidTransition(coords));
        }
        cell.open();
        Ok(())
    }

    /// Flood-opens the connected zero-count region around `start` together
    /// with its numbered border.
    ///
    /// Positions that are off the grid, already opened, flagged, or mined
    /// are skipped rather than rejected; the traversal probes neighbors
    /// freely and every cell opens at most once, so the pending queue
    /// drains after at most one pass over the grid.
    pub fn open_surrounded(&mut self, start: Coord2) {
        let bounds = self.bounds();
        let mut pending = VecDeque::from([start]);

        while let Some(coords) = pending.pop_front() {
            if !self.in_bounds(coords) {
                continue;
            }
            let cell = &mut self.cells[nd(coords)];
            if cell.is_opened() || cell.is_flagged() || cell.is_mine() {
                continue;
            }
            cell.open();
            log::trace!("cascade opened {coords:?}");
            if cell.has_adjacent_mines() {
                continue;
            }
            pending.extend(neighbors(coords, bounds));
        }
    }

    /// The session is complete once every cell is opened or flagged.
    pub fn is_all_checked(&self) -> bool {
        self.cells.iter().all(|cell| cell.is_checked())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cell::CellKind;
    use crate::placement::FixedPlacement;

    /// 5x4 board with mines in opposite corners:
    ///
    /// ```text
    /// * 1 . .
    /// 1 1 . .
    /// . . . .
    /// . . 1 1
    /// . . 1 *
    /// ```
    fn corner_board() -> Board {
        let mut board = Board::new(BoardConfig::new_unchecked(5, 4, 2));
        board.initialize_with(FixedPlacement::new([(0, 0), (4, 3)]));
        board
    }

    fn opened_count(board: &Board) -> usize {
        let mut opened = 0;
        for row in 0..board.row_count() {
            for col in 0..board.col_count() {
                if board.cell_at((row, col)).unwrap().is_opened() {
                    opened += 1;
                }
            }
        }
        opened
    }

    #[test]
    fn new_board_is_fully_hidden() {
        let board = Board::new(BoardConfig::new_unchecked(3, 3, 1));

        for row in 0..3 {
            for col in 0..3 {
                let cell = board.cell_at((row, col)).unwrap();
                assert_eq!(cell.kind(), CellKind::Empty);
                assert!(!cell.is_checked());
            }
        }
    }

    #[test]
    fn initialize_derives_the_exact_neighbor_counts() {
        let board = corner_board();

        let numbered = [
            ((0, 1), 1),
            ((1, 0), 1),
            ((1, 1), 1),
            ((3, 2), 1),
            ((3, 3), 1),
            ((4, 2), 1),
        ];
        for (coords, count) in numbered {
            assert_eq!(
                board.cell_at(coords).unwrap().kind(),
                CellKind::Numbered(count),
                "at {coords:?}"
            );
        }

        assert_eq!(board.cell_at((0, 0)).unwrap().kind(), CellKind::Mine);
        assert_eq!(board.cell_at((4, 3)).unwrap().kind(), CellKind::Mine);
        assert_eq!(board.cell_at((2, 2)).unwrap().kind(), CellKind::Empty);
        assert_eq!(board.cell_at((0, 3)).unwrap().kind(), CellKind::Empty);
    }

    #[test]
    fn is_mine_is_a_stable_query() {
        let board = corner_board();

        assert!(board.is_mine((0, 0)).unwrap());
        assert!(board.is_mine((0, 0)).unwrap());
        assert!(!board.is_mine((2, 2)).unwrap());
        assert!(!board.is_mine((2, 2)).unwrap());
    }

    #[test]
    fn queries_reject_positions_off_the_grid() {
        let mut board = corner_board();

        assert_eq!(board.is_mine((5, 0)), Err(BoardError::OutOfBounds((5, 0))));
        assert_eq!(board.sign_at((0, 4)), Err(BoardError::OutOfBounds((0, 4))));
        assert_eq!(board.flag((5, 4)), Err(BoardError::OutOfBounds((5, 4))));
        assert_eq!(board.open((255, 255)), Err(BoardError::OutOfBounds((255, 255))));
    }

    #[test]
    fn cascade_treats_positions_off_the_grid_as_a_no_op() {
        let mut board = corner_board();

        board.open_surrounded((5, 4));
        board.open_surrounded((255, 0));

        assert_eq!(opened_count(&board), 0);
    }

    #[test]
    fn cascade_opens_the_zero_region_and_its_numbered_border() {
        let mut board = corner_board();

        board.open_surrounded((2, 2));

        // every non-mine cell is connected to the zero region here
        assert_eq!(opened_count(&board), 18);
        assert!(!board.cell_at((0, 0)).unwrap().is_opened());
        assert!(!board.cell_at((4, 3)).unwrap().is_opened());

        // the mines were never checked, so the session is not complete
        assert!(!board.is_all_checked());
        board.flag((0, 0)).unwrap();
        board.flag((4, 3)).unwrap();
        assert!(board.is_all_checked());
    }

    #[test]
    fn cascade_stops_at_a_wall_of_mines() {
        // row 2 is all mines, splitting the grid in two
        let mut board = Board::new(BoardConfig::new_unchecked(5, 4, 4));
        board.initialize_with(FixedPlacement::new([(2, 0), (2, 1), (2, 2), (2, 3)]));

        board.open_surrounded((0, 0));

        // rows 0 and 1 open, rows 2 through 4 stay untouched
        assert_eq!(opened_count(&board), 8);
        assert_eq!(board.cell_at((1, 1)).unwrap().kind(), CellKind::Numbered(3));
        assert!(board.cell_at((1, 1)).unwrap().is_opened());
        assert!(!board.cell_at((3, 0)).unwrap().is_opened());
        assert!(!board.cell_at((4, 3)).unwrap().is_opened());
    }

    #[test]
    fn cascade_never_opens_a_mine() {
        let mut board = corner_board();

        board.open_surrounded((0, 0));

        assert!(!board.cell_at((0, 0)).unwrap().is_opened());
        assert_eq!(opened_count(&board), 0);
    }

    #[test]
    fn cascade_started_on_a_numbered_cell_opens_only_that_cell() {
        let mut board = corner_board();

        board.open_surrounded((0, 1));

        assert_eq!(opened_count(&board), 1);
        assert!(board.cell_at((0, 1)).unwrap().is_opened());
    }

    #[test]
    fn cascade_skips_flagged_cells() {
        let mut board = corner_board();
        board.flag((2, 3)).unwrap();

        board.open_surrounded((2, 2));

        let skipped = board.cell_at((2, 3)).unwrap();
        assert!(skipped.is_flagged());
        assert!(!skipped.is_opened());
        // the region flows around the flag
        assert_eq!(opened_count(&board), 17);
    }

    #[test]
    fn cascade_on_a_mineless_board_opens_every_cell_once() {
        let mut board = Board::new(BoardConfig::new_unchecked(9, 9, 0));
        board.initialize_with(FixedPlacement::new([]));

        board.open_surrounded((4, 4));

        assert_eq!(opened_count(&board), 81);
        assert!(board.is_all_checked());
    }

    #[test]
    fn flagging_is_one_way() {
        let mut board = corner_board();

        board.flag((1, 1)).unwrap();
        board.flag((1, 1)).unwrap();

        assert!(board.cell_at((1, 1)).unwrap().is_flagged());
    }

    #[test]
    fn opened_cells_reject_further_transitions() {
        let mut board = corner_board();
        board.open((2, 2)).unwrap();

        assert_eq!(
            board.flag((2, 2)),
            Err(BoardError::InvalidTransition((2, 2)))
        );
        assert_eq!(
            board.open((2, 2)),
            Err(BoardError::InvalidTransition((2, 2)))
        );
    }

    #[test]
    fn flagged_cells_cannot_be_opened_directly() {
        let mut board = corner_board();
        board.flag((2, 2)).unwrap();

        assert_eq!(
            board.open((2, 2)),
            Err(BoardError::InvalidTransition((2, 2)))
        );
    }

    #[test]
    fn open_marks_a_single_cell_whatever_its_kind() {
        let mut board = corner_board();

        board.open((0, 0)).unwrap();

        assert!(board.cell_at((0, 0)).unwrap().is_opened());
        assert_eq!(board.sign_at((0, 0)).unwrap(), Sign::Mine);
        // no cascade happened
        assert_eq!(opened_count(&board), 1);
    }

    #[test]
    fn signs_track_cell_state() {
        let mut board = corner_board();

        assert_eq!(board.sign_at((2, 2)).unwrap(), Sign::Closed);

        board.flag((0, 0)).unwrap();
        assert_eq!(board.sign_at((0, 0)).unwrap(), Sign::Flag);

        board.open_surrounded((2, 2));
        assert_eq!(board.sign_at((2, 2)).unwrap(), Sign::Blank);
        assert_eq!(board.sign_at((0, 1)).unwrap(), Sign::Number(1));
    }

    #[test]
    fn completion_uses_the_literal_checked_predicate() {
        // flagging every cell completes the session even without opening
        let mut board = Board::new(BoardConfig::new_unchecked(1, 2, 0));
        board.initialize_with(FixedPlacement::new([]));

        board.flag((0, 0)).unwrap();
        assert!(!board.is_all_checked());
        board.flag((0, 1)).unwrap();
        assert!(board.is_all_checked());
    }

    #[test]
    fn initialize_resets_previous_progress() {
        let mut board = corner_board();
        board.open_surrounded((2, 2));
        assert!(opened_count(&board) > 0);

        board.initialize_with(FixedPlacement::new([(0, 0)]));

        assert_eq!(opened_count(&board), 0);
        assert!(!board.is_mine((4, 3)).unwrap());
    }

    #[test]
    fn seeded_boards_stay_within_the_configured_shape() {
        let mut board = Board::new(crate::Level::Beginner.config());
        board.initialize(42);

        let mut cells = 0;
        for row in 0..board.row_count() {
            for col in 0..board.col_count() {
                cells += 1;
                match board.cell_at((row, col)).unwrap().kind() {
                    CellKind::Empty | CellKind::Mine => {}
                    CellKind::Numbered(count) => {
                        assert!((1..=8).contains(&count), "bad count {count}")
                    }
                }
            }
        }
        assert_eq!(cells, 80);
    }
}
