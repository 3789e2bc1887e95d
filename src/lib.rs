//! Turn-based tic-tac-toe rules engine.
//!
//! The engine tracks turn order, validates moves against occupied cells
//! and game-over state, and determines win and tie outcomes.
//!
//! # Architecture
//!
//! - **Lines**: pure functions computing the winning lines through a cell
//! - **Move**: immutable record of one side claiming one cell on one turn
//! - **Player**: owns its move history; captured cells and win detection
//!   are derived from it
//! - **Game**: orchestrates turn order across the two players and exposes
//!   the aggregate queries (winner, tied, over)
//! - **Invariants**: first-class game properties, checked after every
//!   accepted move in debug builds
//! - **Adapter**: terminal front end translating input lines into engine
//!   calls
//!
//! # Example
//!
//! ```
//! use ttt_engine::{Cell, Game, GameStatus, Side};
//!
//! let mut game = Game::new();
//! game.take_turn(Cell::Center)?;   // X
//! game.take_turn(Cell::TopLeft)?;  // O
//! assert_eq!(game.current_side(), Side::X);
//! assert_eq!(game.status(), GameStatus::InProgress);
//! # Ok::<(), ttt_engine::GameError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod action;
mod cell;
mod error;
mod game;
mod player;
mod types;

// Public modules
pub mod adapter;
pub mod invariants;
pub mod lines;

// Crate-level exports - domain types
pub use action::Move;
pub use cell::Cell;
pub use error::GameError;
pub use game::Game;
pub use player::Player;
pub use types::{GameStatus, Side};

// Crate-level exports - line utilities
pub use lines::{Line, column_through, diagonals_through, lines_through, row_through};
