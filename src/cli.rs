//! Command-line interface for ttt.

use clap::{Parser, Subcommand};

/// ttt - two-player tic-tac-toe in the terminal
#[derive(Parser, Debug)]
#[command(name = "ttt")]
#[command(about = "Two-player tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play an interactive two-player game
    Play,

    /// Apply a fixed sequence of cells and print the result
    Script {
        /// Cells to play in order, each 1-9
        #[arg(required = true)]
        cells: Vec<u8>,

        /// Print a JSON summary instead of the rendered board
        #[arg(long)]
        json: bool,
    },
}
