//! Players and their move histories.

use crate::action::Move;
use crate::cell::Cell;
use crate::lines::lines_through;
use crate::types::Side;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::instrument;

/// One of the two players: a side plus the moves it has made.
///
/// The move history is append-only during play and cleared wholesale on
/// restart. Everything else about the player (captured cells, win
/// detection) is derived from it on demand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub(crate) side: Side,
    pub(crate) moves: Vec<Move>,
}

impl Player {
    /// Creates a player with an empty history.
    pub(crate) fn new(side: Side) -> Self {
        Self {
            side,
            moves: Vec::new(),
        }
    }

    /// The side this player plays.
    pub fn side(&self) -> Side {
        self.side
    }

    /// The moves this player has made, in order.
    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    /// The set of cells this player has claimed.
    pub fn captured_cells(&self) -> HashSet<Cell> {
        self.moves.iter().map(Move::cell).collect()
    }

    /// This player's most recent move, if any.
    pub fn recent_move(&self) -> Option<&Move> {
        self.moves.last()
    }

    /// True iff the most recent move completed a winning line.
    ///
    /// Only lines through the most recent move's cell are inspected, so a
    /// win is detected on the turn that completes it.
    #[instrument(skip(self), fields(side = %self.side))]
    pub fn has_recent_winning_move(&self) -> bool {
        let Some(recent) = self.recent_move() else {
            return false;
        };
        let captured = self.captured_cells();
        lines_through(recent.cell())
            .iter()
            .any(|line| line.iter().all(|cell| captured.contains(cell)))
    }

    /// Appends an already-validated move to the history.
    pub(crate) fn record(&mut self, mov: Move) {
        self.moves.push(mov);
    }

    /// Clears the move history. The side is unchanged.
    pub(crate) fn reset(&mut self) {
        self.moves.clear();
    }
}
