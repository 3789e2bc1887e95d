//! Turn count invariant: the counter tracks the recorded histories.

use super::Invariant;
use crate::cell::Cell;
use crate::game::Game;

/// Invariant: the turn counter is consistent with the histories.
///
/// The counter equals the total number of recorded moves, never exceeds
/// the board's capacity, and the recorded turn indices are exactly
/// 0..total with no gaps or repeats.
pub struct TurnCountInvariant;

impl Invariant<Game> for TurnCountInvariant {
    fn holds(game: &Game) -> bool {
        let total = game.total_moves();
        if game.turn() != total || total > Cell::ALL.len() {
            return false;
        }

        let mut turns: Vec<usize> = game
            .players()
            .iter()
            .flat_map(|player| player.moves())
            .map(|mov| mov.turn())
            .collect();
        turns.sort_unstable();
        turns.iter().enumerate().all(|(expected, &turn)| expected == turn)
    }

    fn description() -> &'static str {
        "Turn counter matches recorded histories (dense indices 0..total, total <= 9)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Move, Side};

    #[test]
    fn test_new_game_holds() {
        let game = Game::new();
        assert!(TurnCountInvariant::holds(&game));
    }

    #[test]
    fn test_played_game_holds() {
        let game = Game::replay(&[Cell::TopLeft, Cell::Center, Cell::BottomRight]).unwrap();
        assert!(TurnCountInvariant::holds(&game));
    }

    #[test]
    fn test_counter_drift_violates() {
        let mut game = Game::replay(&[Cell::TopLeft, Cell::Center]).unwrap();
        game.turn = 5;
        assert!(!TurnCountInvariant::holds(&game));
    }

    #[test]
    fn test_gapped_turn_indices_violate() {
        let mut game = Game::new();
        game.players[0].moves.push(Move::new(Side::X, Cell::TopLeft, 0));
        game.players[1].moves.push(Move::new(Side::O, Cell::Center, 2));
        game.turn = 2;

        assert!(!TurnCountInvariant::holds(&game));
    }
}
