use ndarray::Array2;
use rand::prelude::*;

use crate::BoardConfig;
use crate::types::{CellCount, Coord2, nd};

/// Produces the mine mask a [`Board`](crate::Board) applies during
/// initialization.
pub trait MinePlacement {
    fn place(self, config: BoardConfig) -> Array2<bool>;
}

/// The classic strategy: one independent uniform `(row, col)` draw per
/// requested mine. Draws may land on the same cell, so the distinct mine
/// count can fall short of the target.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ScatterPlacement {
    seed: u64,
}

impl ScatterPlacement {
    pub const fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl MinePlacement for ScatterPlacement {
    fn place(self, config: BoardConfig) -> Array2<bool> {
        let mut mask: Array2<bool> = Array2::default(config.dim());
        let mut rng = SmallRng::seed_from_u64(self.seed);

        for _ in 0..config.mines {
            let row = rng.random_range(0..config.rows);
            let col = rng.random_range(0..config.cols);
            mask[nd((row, col))] = true;
        }

        let placed = mask.iter().filter(|&&mine| mine).count() as CellCount;
        if placed < config.mines {
            log::warn!(
                "mine draws collided, placed {placed} of {} requested",
                config.mines
            );
        }
        mask
    }
}

/// Samples exactly the requested number of distinct cells, so the placed
/// count always matches the configured one.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ExactPlacement {
    seed: u64,
}

impl ExactPlacement {
    pub const fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl MinePlacement for ExactPlacement {
    fn place(self, config: BoardConfig) -> Array2<bool> {
        let mut mask: Array2<bool> = Array2::default(config.dim());
        let mut rng = SmallRng::seed_from_u64(self.seed);
        let mut free = config.total_cells();
        let mut placed: CellCount = 0;

        let cells = mask.as_slice_mut().expect("layout should be standard");
        while placed < config.mines && free > 0 {
            // draw a rank among the still-free cells and walk to it
            let mut target = rng.random_range(0..free);
            for cell in cells.iter_mut() {
                if *cell {
                    continue;
                }
                if target == 0 {
                    *cell = true;
                    placed += 1;
                    free -= 1;
                    break;
                }
                target -= 1;
            }
        }
        mask
    }
}

/// Explicit mine coordinates for deterministic layouts and replays.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FixedPlacement {
    mines: Vec<Coord2>,
}

impl FixedPlacement {
    pub fn new(mines: impl Into<Vec<Coord2>>) -> Self {
        Self {
            mines: mines.into(),
        }
    }
}

impl MinePlacement for FixedPlacement {
    fn place(self, config: BoardConfig) -> Array2<bool> {
        let mut mask: Array2<bool> = Array2::default(config.dim());
        for (row, col) in self.mines {
            if row < config.rows && col < config.cols {
                mask[nd((row, col))] = true;
            } else {
                log::warn!(
                    "ignoring mine at ({row}, {col}) outside the {}x{} grid",
                    config.rows,
                    config.cols
                );
            }
        }
        mask
    }
}
