//! First-class move records.
//!
//! Moves are domain events, not side effects. Each one captures a side
//! claiming a cell on a particular turn, and can be validated, serialized,
//! and logged independently of execution.

use crate::cell::Cell;
use crate::types::Side;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A single placement: one side claiming one cell at one turn.
///
/// Immutable once created. Owned by the [`Player`](crate::Player) that made
/// it; the game aggregate only reads it by reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    side: Side,
    cell: Cell,
    turn: usize,
}

impl Move {
    /// Creates a new move.
    pub fn new(side: Side, cell: Cell, turn: usize) -> Self {
        Self { side, cell, turn }
    }

    /// The side making this move.
    pub fn side(&self) -> Side {
        self.side
    }

    /// The cell this move claims.
    pub fn cell(&self) -> Cell {
        self.cell
    }

    /// The turn on which this move was made.
    pub fn turn(&self) -> usize {
        self.turn
    }

    /// True if this move targets a cell already in `claimed`.
    ///
    /// `claimed` must be the union of BOTH players' captured cells, not
    /// just the mover's own. This is the sole legality check on a move;
    /// turn order and game-over state are the aggregate's responsibility.
    pub fn conflicts_with(&self, claimed: &HashSet<Cell>) -> bool {
        claimed.contains(&self.cell)
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.side, self.cell.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conflict_with_claimed_cell() {
        let claimed: HashSet<Cell> = [Cell::Center, Cell::TopLeft].into_iter().collect();
        let mov = Move::new(Side::O, Cell::Center, 2);
        assert!(mov.conflicts_with(&claimed));
    }

    #[test]
    fn test_no_conflict_with_free_cell() {
        let claimed: HashSet<Cell> = [Cell::Center].into_iter().collect();
        let mov = Move::new(Side::O, Cell::TopRight, 1);
        assert!(!mov.conflicts_with(&claimed));
    }

    #[test]
    fn test_no_conflict_on_empty_board() {
        let mov = Move::new(Side::X, Cell::Center, 0);
        assert!(!mov.conflicts_with(&HashSet::new()));
    }

    #[test]
    fn test_display() {
        let mov = Move::new(Side::X, Cell::Center, 0);
        assert_eq!(mov.to_string(), "X -> Center");
    }
}
