//! ttt - two-player tic-tac-toe in the terminal.

#![warn(missing_docs)]

mod cli;

use anyhow::{Result, anyhow};
use clap::Parser;
use cli::{Cli, Command};
use tracing::info;
use tracing_subscriber::EnvFilter;
use ttt_engine::adapter::{self, Session};
use ttt_engine::{Cell, Game};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Play => run_play(),
        Command::Script { cells, json } => run_script(&cells, json),
    }
}

/// Run an interactive two-player session on stdin/stdout.
fn run_play() -> Result<()> {
    info!("starting interactive session");
    let mut session = Session::new();
    session.run(std::io::stdin().lock(), std::io::stdout())
}

/// Apply a fixed move sequence and print the outcome.
fn run_script(cells: &[u8], json: bool) -> Result<()> {
    let cells = cells
        .iter()
        .map(|&number| {
            Cell::from_number(number).ok_or_else(|| anyhow!("cell must be 1-9, got {}", number))
        })
        .collect::<Result<Vec<Cell>>>()?;

    let game = Game::replay(&cells)?;

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&adapter::json_summary(&game))?
        );
    } else {
        println!("{}", adapter::render_board(&game));
        println!("{}", adapter::status_line(&game));
    }
    Ok(())
}
