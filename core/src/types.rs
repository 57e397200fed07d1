/// Single axis index for rows and columns.
pub type Coord = u8;

/// Wide enough to count every cell on the largest representable grid.
pub type CellCount = u16;

/// Grid position as `(row, col)`, zero-based.
pub type Coord2 = (Coord, Coord);

pub(crate) const fn total_cells(rows: Coord, cols: Coord) -> CellCount {
    (rows as CellCount).saturating_mul(cols as CellCount)
}

pub(crate) fn nd((row, col): Coord2) -> (usize, usize) {
    (row as usize, col as usize)
}

/// Row-major offsets of the eight surrounding positions.
const OFFSETS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Applies one offset, returning a position only while it stays on the grid.
fn step((row, col): Coord2, (d_row, d_col): (i8, i8), (rows, cols): Coord2) -> Option<Coord2> {
    let row = row.checked_add_signed(d_row)?;
    let col = col.checked_add_signed(d_col)?;
    (row < rows && col < cols).then_some((row, col))
}

/// Iterates the in-bounds neighbors of `center` on a `rows x cols` grid.
///
/// Positions that would leave the grid are dropped, so a corner yields three
/// neighbors, an edge five, and an interior cell all eight.
pub fn neighbors(center: Coord2, bounds: Coord2) -> impl Iterator<Item = Coord2> {
    OFFSETS
        .into_iter()
        .filter_map(move |delta| step(center, delta, bounds))
}
