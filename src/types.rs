//! Core domain types: sides and game status.

use serde::{Deserialize, Serialize};

/// One of the two competing sides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    /// Side X (moves on even turns, goes first).
    X,
    /// Side O (moves on odd turns).
    O,
}

impl Side {
    /// Returns the opposing side.
    pub fn opponent(self) -> Self {
        match self {
            Side::X => Side::O,
            Side::O => Side::X,
        }
    }

    /// Returns the side whose move it is on the given turn.
    ///
    /// Turn parity determines the mover: X on even turns, O on odd.
    pub fn for_turn(turn: usize) -> Self {
        if turn % 2 == 0 { Side::X } else { Side::O }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::X => write!(f, "X"),
            Side::O => write!(f, "O"),
        }
    }
}

/// Current status of a game, derived from player histories on demand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing.
    InProgress,
    /// Game ended with a winning side.
    Won(Side),
    /// Board is full with no winner.
    Tied,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opponent_is_involution() {
        assert_eq!(Side::X.opponent(), Side::O);
        assert_eq!(Side::O.opponent(), Side::X);
        assert_eq!(Side::X.opponent().opponent(), Side::X);
    }

    #[test]
    fn test_turn_parity() {
        assert_eq!(Side::for_turn(0), Side::X);
        assert_eq!(Side::for_turn(1), Side::O);
        assert_eq!(Side::for_turn(8), Side::X);
    }
}
