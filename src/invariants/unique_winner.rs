//! Unique winner invariant: at most one side can be winning.

use super::Invariant;
use crate::game::Game;

/// Invariant: at most one side satisfies the win predicate.
///
/// The no-overwrite rule should make a simultaneous two-side win
/// impossible, but that is not enforced by construction, so it is checked
/// here.
pub struct UniqueWinnerInvariant;

impl Invariant<Game> for UniqueWinnerInvariant {
    fn holds(game: &Game) -> bool {
        game.players()
            .iter()
            .filter(|player| player.has_recent_winning_move())
            .count()
            <= 1
    }

    fn description() -> &'static str {
        "At most one side satisfies the win predicate"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Cell, Move, Side};

    #[test]
    fn test_new_game_holds() {
        let game = Game::new();
        assert!(UniqueWinnerInvariant::holds(&game));
    }

    #[test]
    fn test_single_winner_holds() {
        // X completes the top row.
        let game = Game::replay(&[
            Cell::TopLeft,
            Cell::MiddleLeft,
            Cell::TopCenter,
            Cell::Center,
            Cell::TopRight,
        ])
        .unwrap();
        assert!(game.is_won());
        assert!(UniqueWinnerInvariant::holds(&game));
    }

    #[test]
    fn test_two_winners_violate() {
        // Hand-built impossible state: both sides hold a complete row.
        let mut game = Game::new();
        for (i, cell) in [Cell::TopLeft, Cell::TopCenter, Cell::TopRight]
            .into_iter()
            .enumerate()
        {
            game.players[0].moves.push(Move::new(Side::X, cell, i * 2));
        }
        for (i, cell) in [Cell::BottomLeft, Cell::BottomCenter, Cell::BottomRight]
            .into_iter()
            .enumerate()
        {
            game.players[1].moves.push(Move::new(Side::O, cell, i * 2 + 1));
        }
        game.turn = 6;

        assert!(!UniqueWinnerInvariant::holds(&game));
    }
}
