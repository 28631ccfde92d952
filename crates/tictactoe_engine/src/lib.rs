//! Tic-tac-toe game-state engine.
//!
//! Tracks moves on an N×N grid, validates them, detects a winner or a tie
//! and supports resetting for another round. Presentation is left to the
//! caller: ask [`GameEngine::is_valid_move`], call
//! [`GameEngine::apply_move`], and redraw from the returned [`Outcome`].
//!
//! ```
//! use tictactoe_engine::{GameEngine, Outcome, Position};
//!
//! let mut engine = GameEngine::default();
//! for (row, col) in [(0, 0), (1, 1), (0, 1), (2, 2), (0, 2)] {
//!     if engine.apply_move(Position::new(row, col)) == Outcome::Continue {
//!         engine.toggle_player();
//!     }
//! }
//! assert!(engine.has_winner());
//! assert_eq!(engine.winner().map(|p| p.label().as_str()), Some("X"));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod error;
mod game;
pub mod rules;
mod types;

pub use action::{MoveError, Outcome};
pub use error::{ConfigurationError, ConfigurationErrorKind};
pub use game::{GameEngine, GameStatus};
pub use types::{BOARD_SIZE, Board, Move, Player, Position, WinningCombo, default_players};
