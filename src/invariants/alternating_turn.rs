//! Alternating turn invariant: sides alternate X, O, X, O, ...

use super::Invariant;
use crate::game::Game;
use crate::types::Side;

/// Invariant: sides strictly alternate.
///
/// Every recorded move belongs to the player that holds it, and its turn
/// index has the parity of that side (X on even turns, O on odd). No side
/// can move twice in a row.
pub struct AlternatingTurnInvariant;

impl Invariant<Game> for AlternatingTurnInvariant {
    fn holds(game: &Game) -> bool {
        game.players().iter().all(|player| {
            player.moves().iter().all(|mov| {
                mov.side() == player.side() && Side::for_turn(mov.turn()) == mov.side()
            })
        })
    }

    fn description() -> &'static str {
        "Sides alternate turns (X, O, X, O, ...)"
    }
}
