//! Winning-line utilities.
//!
//! Pure functions computing the 3-cell lines that pass through a given
//! cell. Eight lines exist in total: 3 rows, 3 columns, 2 diagonals.

use crate::cell::Cell;

/// A winning line: three cells whose full capture by one side ends the game.
pub type Line = [Cell; 3];

const ROWS: [Line; 3] = [
    [Cell::TopLeft, Cell::TopCenter, Cell::TopRight],
    [Cell::MiddleLeft, Cell::Center, Cell::MiddleRight],
    [Cell::BottomLeft, Cell::BottomCenter, Cell::BottomRight],
];

const COLUMNS: [Line; 3] = [
    [Cell::TopLeft, Cell::MiddleLeft, Cell::BottomLeft],
    [Cell::TopCenter, Cell::Center, Cell::BottomCenter],
    [Cell::TopRight, Cell::MiddleRight, Cell::BottomRight],
];

const MAIN_DIAGONAL: Line = [Cell::TopLeft, Cell::Center, Cell::BottomRight];
const ANTI_DIAGONAL: Line = [Cell::TopRight, Cell::Center, Cell::BottomLeft];

/// Returns the row containing `cell`.
pub fn row_through(cell: Cell) -> Line {
    ROWS[cell.row_index()]
}

/// Returns the column containing `cell`.
pub fn column_through(cell: Cell) -> Line {
    COLUMNS[cell.column_index()]
}

/// Returns every diagonal containing `cell`.
///
/// Empty for edge cells, one line for corners. The center lies on both
/// diagonals and gets both.
pub fn diagonals_through(cell: Cell) -> Vec<Line> {
    let mut lines = Vec::with_capacity(2);
    if MAIN_DIAGONAL.contains(&cell) {
        lines.push(MAIN_DIAGONAL);
    }
    if ANTI_DIAGONAL.contains(&cell) {
        lines.push(ANTI_DIAGONAL);
    }
    lines
}

/// Returns every winning line through `cell`: its row, its column, and any
/// diagonals it lies on.
pub fn lines_through(cell: Cell) -> Vec<Line> {
    let mut lines = vec![row_through(cell), column_through(cell)];
    lines.extend(diagonals_through(cell));
    lines
}
