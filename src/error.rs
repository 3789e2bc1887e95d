//! Engine error types.

use crate::cell::Cell;

/// Error returned when a turn is rejected.
///
/// Both variants are recoverable rejections: the game state is left
/// untouched and the caller may re-prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum GameError {
    /// The game has already ended in a win or a tie.
    #[display("Game is already over")]
    GameOver,

    /// The target cell is already claimed by either side.
    #[display("{} is already occupied", _0)]
    CellOccupied(Cell),
}

impl std::error::Error for GameError {}
