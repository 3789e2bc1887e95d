//! Game aggregate: turn orchestration and outcome queries.

use crate::action::Move;
use crate::cell::Cell;
use crate::error::GameError;
use crate::invariants::assert_invariants;
use crate::player::Player;
use crate::types::{GameStatus, Side};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::{debug, instrument, warn};

/// A two-player game on the 3x3 board.
///
/// Owns both players exclusively. The turn counter's parity determines the
/// side to move; win and tie outcomes are computed on demand from the
/// players' histories, never cached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    pub(crate) players: [Player; 2],
    pub(crate) turn: usize,
}

impl Game {
    /// Creates a new game with X to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            players: [Player::new(Side::X), Player::new(Side::O)],
            turn: 0,
        }
    }

    /// The number of accepted moves so far.
    pub fn turn(&self) -> usize {
        self.turn
    }

    /// Both players, X first.
    pub fn players(&self) -> &[Player; 2] {
        &self.players
    }

    /// The player for the given side.
    pub fn player(&self, side: Side) -> &Player {
        match side {
            Side::X => &self.players[0],
            Side::O => &self.players[1],
        }
    }

    /// The side whose move it is.
    pub fn current_side(&self) -> Side {
        Side::for_turn(self.turn)
    }

    /// The player whose move it is.
    pub fn current_player(&self) -> &Player {
        self.player(self.current_side())
    }

    /// The union of both players' captured cells.
    pub fn occupied_cells(&self) -> HashSet<Cell> {
        self.players
            .iter()
            .flat_map(Player::captured_cells)
            .collect()
    }

    /// The side that has claimed `cell`, if any.
    pub fn claimant(&self, cell: Cell) -> Option<Side> {
        self.players
            .iter()
            .find(|player| player.captured_cells().contains(&cell))
            .map(Player::side)
    }

    /// Total moves made by both players.
    pub fn total_moves(&self) -> usize {
        self.players.iter().map(|player| player.moves().len()).sum()
    }

    /// Attempts to claim `cell` for the side whose move it is.
    ///
    /// On success the move is recorded and the turn counter advances.
    /// On failure nothing changes: the turn does not advance and no move
    /// is recorded.
    ///
    /// # Errors
    ///
    /// - [`GameError::GameOver`] if the game has already ended. Terminal
    ///   states are sticky until [`restart`](Self::restart).
    /// - [`GameError::CellOccupied`] if either side has already claimed
    ///   the cell.
    #[instrument(skip(self), fields(turn = self.turn, side = %self.current_side()))]
    pub fn take_turn(&mut self, cell: Cell) -> Result<(), GameError> {
        if self.is_over() {
            warn!("move rejected: game already over");
            return Err(GameError::GameOver);
        }

        let mov = Move::new(self.current_side(), cell, self.turn);
        if mov.conflicts_with(&self.occupied_cells()) {
            warn!(%cell, "move rejected: cell occupied");
            return Err(GameError::CellOccupied(cell));
        }

        let mover = self.turn % 2;
        self.players[mover].record(mov);
        self.turn += 1;
        debug!(%mov, "move accepted");

        assert_invariants(self);
        Ok(())
    }

    /// True iff either player's most recent move completed a line.
    pub fn is_won(&self) -> bool {
        self.players
            .iter()
            .any(Player::has_recent_winning_move)
    }

    /// True iff the board is full and nobody has won.
    pub fn is_tied(&self) -> bool {
        !self.is_won() && self.total_moves() >= Cell::ALL.len()
    }

    /// True iff the game has ended in a win or a tie.
    pub fn is_over(&self) -> bool {
        self.is_tied() || self.is_won()
    }

    /// The winning player, if any.
    pub fn winner(&self) -> Option<&Player> {
        let mut winners = self
            .players
            .iter()
            .filter(|player| player.has_recent_winning_move());
        let winner = winners.next();
        // The no-overwrite rule should make a double win impossible.
        debug_assert!(
            winners.next().is_none(),
            "both sides satisfy the win predicate"
        );
        winner
    }

    /// The derived status of the game.
    pub fn status(&self) -> GameStatus {
        match self.winner() {
            Some(player) => GameStatus::Won(player.side()),
            None if self.is_tied() => GameStatus::Tied,
            None => GameStatus::InProgress,
        }
    }

    /// Resets both players and the turn counter in place.
    ///
    /// Players are reset rather than recreated, so references held across
    /// a session keep pointing at the same objects.
    #[instrument(skip(self))]
    pub fn restart(&mut self) {
        for player in &mut self.players {
            player.reset();
        }
        self.turn = 0;
        debug!("game restarted");
    }

    /// Builds a game by taking the given turns from the initial state.
    ///
    /// Turns after the game ends are ignored.
    ///
    /// # Errors
    ///
    /// Returns the first rejection encountered, with the partially played
    /// game discarded.
    #[instrument]
    pub fn replay(cells: &[Cell]) -> Result<Game, GameError> {
        let mut game = Game::new();
        for &cell in cells {
            if game.is_over() {
                break;
            }
            game.take_turn(cell)?;
        }
        Ok(game)
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_game_initial_state() {
        let game = Game::new();
        assert_eq!(game.turn(), 0);
        assert_eq!(game.current_side(), Side::X);
        assert_eq!(game.total_moves(), 0);
        assert_eq!(game.status(), GameStatus::InProgress);
        assert!(!game.is_over());
    }

    #[test]
    fn test_sides_alternate() {
        let mut game = Game::new();
        game.take_turn(Cell::Center).unwrap();
        assert_eq!(game.current_side(), Side::O);
        game.take_turn(Cell::TopLeft).unwrap();
        assert_eq!(game.current_side(), Side::X);
    }

    #[test]
    fn test_claimant_tracks_both_sides() {
        let mut game = Game::new();
        game.take_turn(Cell::Center).unwrap();
        game.take_turn(Cell::TopLeft).unwrap();
        assert_eq!(game.claimant(Cell::Center), Some(Side::X));
        assert_eq!(game.claimant(Cell::TopLeft), Some(Side::O));
        assert_eq!(game.claimant(Cell::BottomRight), None);
    }

    #[test]
    fn test_occupied_cell_rejected_without_state_change() {
        let mut game = Game::new();
        game.take_turn(Cell::Center).unwrap();
        let result = game.take_turn(Cell::Center);
        assert_eq!(result, Err(GameError::CellOccupied(Cell::Center)));
        assert_eq!(game.turn(), 1);
        assert!(game.player(Side::O).moves().is_empty());
    }

    #[test]
    fn test_winner_is_reported_once_line_completes() {
        // X takes the top row; O plays elsewhere.
        let game = Game::replay(&[
            Cell::TopLeft,
            Cell::MiddleLeft,
            Cell::TopCenter,
            Cell::Center,
            Cell::TopRight,
        ])
        .unwrap();
        assert!(game.is_won());
        assert_eq!(game.winner().map(Player::side), Some(Side::X));
        assert_eq!(game.status(), GameStatus::Won(Side::X));
    }

    #[test]
    fn test_replay_ignores_trailing_moves_after_finish() {
        let game = Game::replay(&[
            Cell::TopLeft,
            Cell::MiddleLeft,
            Cell::TopCenter,
            Cell::Center,
            Cell::TopRight,
            Cell::BottomLeft,
        ])
        .unwrap();
        assert_eq!(game.total_moves(), 5);
        assert_eq!(game.status(), GameStatus::Won(Side::X));
    }

    #[test]
    fn test_restart_restores_initial_state() {
        let mut game = Game::replay(&[Cell::Center, Cell::TopLeft]).unwrap();
        game.restart();
        assert_eq!(game, Game::new());
        game.restart();
        assert_eq!(game, Game::new());
    }
}
