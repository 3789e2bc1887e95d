//! Cells of the 3x3 board.

use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;

/// A cell on the board, numbered 1-9 in row-major order.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    strum::EnumIter,
)]
pub enum Cell {
    /// Top-left (cell 1)
    TopLeft,
    /// Top-center (cell 2)
    TopCenter,
    /// Top-right (cell 3)
    TopRight,
    /// Middle-left (cell 4)
    MiddleLeft,
    /// Center (cell 5)
    Center,
    /// Middle-right (cell 6)
    MiddleRight,
    /// Bottom-left (cell 7)
    BottomLeft,
    /// Bottom-center (cell 8)
    BottomCenter,
    /// Bottom-right (cell 9)
    BottomRight,
}

impl Cell {
    /// All 9 cells in row-major order.
    pub const ALL: [Cell; 9] = [
        Cell::TopLeft,
        Cell::TopCenter,
        Cell::TopRight,
        Cell::MiddleLeft,
        Cell::Center,
        Cell::MiddleRight,
        Cell::BottomLeft,
        Cell::BottomCenter,
        Cell::BottomRight,
    ];

    /// Get label for this cell (for display).
    pub fn label(&self) -> &'static str {
        match self {
            Cell::TopLeft => "Top-left",
            Cell::TopCenter => "Top-center",
            Cell::TopRight => "Top-right",
            Cell::MiddleLeft => "Middle-left",
            Cell::Center => "Center",
            Cell::MiddleRight => "Middle-right",
            Cell::BottomLeft => "Bottom-left",
            Cell::BottomCenter => "Bottom-center",
            Cell::BottomRight => "Bottom-right",
        }
    }

    /// The cell's number, 1-9 in row-major order.
    pub fn number(self) -> u8 {
        match self {
            Cell::TopLeft => 1,
            Cell::TopCenter => 2,
            Cell::TopRight => 3,
            Cell::MiddleLeft => 4,
            Cell::Center => 5,
            Cell::MiddleRight => 6,
            Cell::BottomLeft => 7,
            Cell::BottomCenter => 8,
            Cell::BottomRight => 9,
        }
    }

    /// Creates a cell from its 1-9 number.
    pub fn from_number(number: u8) -> Option<Self> {
        Cell::iter().find(|cell| cell.number() == number)
    }

    /// Row of this cell, 0-2 top to bottom.
    pub(crate) fn row_index(self) -> usize {
        (self.number() as usize - 1) / 3
    }

    /// Column of this cell, 0-2 left to right.
    pub(crate) fn column_index(self) -> usize {
        (self.number() as usize - 1) % 3
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
