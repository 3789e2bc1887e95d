//! Terminal adapter for the engine.
//!
//! Translates a line of user input into a [`Game::take_turn`] call and
//! renders the returned state. The engine never sees raw input; anything
//! that is not a cell number 1-9 is rejected here.

use crate::cell::Cell;
use crate::game::Game;
use crate::types::GameStatus;
use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use tracing::{debug, instrument};

/// Commands the adapter understands, one per input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    /// Claim a cell for the side to move.
    Claim(Cell),
    /// Restart the game.
    Restart,
    /// Leave the session.
    Quit,
}

/// Parses one line of input.
///
/// Returns `None` for anything that is not a cell number, `r`, or `q`.
pub fn parse_input(line: &str) -> Option<Input> {
    let line = line.trim();
    match line {
        "q" | "quit" => Some(Input::Quit),
        "r" | "restart" => Some(Input::Restart),
        _ => line
            .parse::<u8>()
            .ok()
            .and_then(Cell::from_number)
            .map(Input::Claim),
    }
}

/// Formats the board as a 3x3 grid.
///
/// Claimed cells show their side's mark; free cells show their number.
pub fn render_board(game: &Game) -> String {
    let mut result = String::new();
    for (i, cell) in Cell::ALL.iter().enumerate() {
        let symbol = match game.claimant(*cell) {
            Some(side) => side.to_string(),
            None => cell.number().to_string(),
        };
        result.push_str(&symbol);
        if i % 3 < 2 {
            result.push('|');
        } else if i < 8 {
            result.push_str("\n-+-+-\n");
        }
    }
    result
}

/// Returns a status line for display.
pub fn status_line(game: &Game) -> String {
    match game.status() {
        GameStatus::InProgress => {
            format!("In progress. {} to move.", game.current_side())
        }
        GameStatus::Won(side) => format!("Game over. {} wins!", side),
        GameStatus::Tied => "Game over. Tie!".to_string(),
    }
}

/// Interactive session: renders, prompts, dispatches, repeats.
pub struct Session {
    game: Game,
}

impl Session {
    /// Creates a session with a fresh game.
    pub fn new() -> Self {
        Self { game: Game::new() }
    }

    /// The underlying game.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Applies one parsed input, returning the message to show the user.
    ///
    /// Returns `None` when the input asks to quit.
    #[instrument(skip(self))]
    pub fn dispatch(&mut self, input: Input) -> Option<String> {
        match input {
            Input::Quit => None,
            Input::Restart => {
                self.game.restart();
                debug!("session restarted");
                Some(status_line(&self.game))
            }
            Input::Claim(cell) => match self.game.take_turn(cell) {
                Ok(()) => Some(status_line(&self.game)),
                Err(err) => Some(format!("{}. {}", err, status_line(&self.game))),
            },
        }
    }

    /// Runs the read-render loop until quit or end of input.
    pub fn run(&mut self, input: impl BufRead, mut output: impl Write) -> Result<()> {
        writeln!(output, "{}", render_board(&self.game))?;
        writeln!(
            output,
            "{} Enter a cell (1-9), r to restart, q to quit.",
            status_line(&self.game)
        )?;

        for line in input.lines() {
            let line = line.context("failed to read input")?;
            let Some(parsed) = parse_input(&line) else {
                writeln!(output, "Enter a cell (1-9), r to restart, q to quit.")?;
                continue;
            };
            let Some(message) = self.dispatch(parsed) else {
                break;
            };
            writeln!(output, "{}", render_board(&self.game))?;
            writeln!(output, "{}", message)?;
        }

        Ok(())
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

/// Serializable summary of a game for machine consumption.
pub fn json_summary(game: &Game) -> serde_json::Value {
    serde_json::json!({
        "status": game.status(),
        "turn": game.turn(),
        "moves": game
            .players()
            .iter()
            .flat_map(|player| player.moves())
            .collect::<Vec<_>>(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Side;

    #[test]
    fn test_parse_cell_numbers() {
        assert_eq!(parse_input("5"), Some(Input::Claim(Cell::Center)));
        assert_eq!(parse_input(" 1 "), Some(Input::Claim(Cell::TopLeft)));
    }

    #[test]
    fn test_parse_commands() {
        assert_eq!(parse_input("q"), Some(Input::Quit));
        assert_eq!(parse_input("restart"), Some(Input::Restart));
    }

    #[test]
    fn test_parse_rejects_out_of_range() {
        assert_eq!(parse_input("0"), None);
        assert_eq!(parse_input("10"), None);
        assert_eq!(parse_input("banana"), None);
    }

    #[test]
    fn test_render_empty_board() {
        let game = Game::new();
        assert_eq!(render_board(&game), "1|2|3\n-+-+-\n4|5|6\n-+-+-\n7|8|9");
    }

    #[test]
    fn test_render_after_moves() {
        let game = Game::replay(&[Cell::Center, Cell::TopLeft]).unwrap();
        assert_eq!(render_board(&game), "O|2|3\n-+-+-\n4|X|6\n-+-+-\n7|8|9");
    }

    #[test]
    fn test_dispatch_surfaces_rejection_and_keeps_state() {
        let mut session = Session::new();
        session.dispatch(Input::Claim(Cell::Center));
        let message = session.dispatch(Input::Claim(Cell::Center)).unwrap();
        assert!(message.contains("occupied"));
        assert_eq!(session.game().turn(), 1);
    }

    #[test]
    fn test_dispatch_restart() {
        let mut session = Session::new();
        session.dispatch(Input::Claim(Cell::Center));
        session.dispatch(Input::Restart);
        assert_eq!(session.game().turn(), 0);
        assert_eq!(session.game().current_side(), Side::X);
    }

    #[test]
    fn test_run_quits_on_q() {
        let mut session = Session::new();
        let input = b"5\n5\nq\n";
        let mut output = Vec::new();
        session.run(&input[..], &mut output).unwrap();
        let transcript = String::from_utf8(output).unwrap();
        assert!(transcript.contains("O to move"));
        assert!(transcript.contains("already occupied"));
    }

    #[test]
    fn test_json_summary_shape() {
        let game = Game::replay(&[Cell::Center]).unwrap();
        let summary = json_summary(&game);
        assert_eq!(summary["turn"], 1);
        assert_eq!(summary["moves"].as_array().unwrap().len(), 1);
    }
}
