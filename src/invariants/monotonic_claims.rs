//! Monotonic claims invariant: a claimed cell is never claimed again.

use super::Invariant;
use crate::game::Game;
use std::collections::HashSet;

/// Invariant: cell claims are monotonic.
///
/// Once any move from any player claims a cell, no later move targets it.
/// Equivalently, no cell appears twice across the two histories.
pub struct MonotonicClaimsInvariant;

impl Invariant<Game> for MonotonicClaimsInvariant {
    fn holds(game: &Game) -> bool {
        let mut seen = HashSet::new();
        game.players()
            .iter()
            .flat_map(|player| player.moves())
            .all(|mov| seen.insert(mov.cell()))
    }

    fn description() -> &'static str {
        "Cell claims are monotonic (no cell is claimed twice)"
    }
}
