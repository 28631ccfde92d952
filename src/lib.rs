//! Tic-tac-toe in the terminal.
//!
//! The rules live in the [`tictactoe_engine`] crate; this crate adds the
//! terminal board that presents them and the settings that configure a
//! game.
//!
//! # Architecture
//!
//! - **Engine**: board state, turn rotation, win/tie detection, reset
//! - **Presenter** ([`tui`]): renders cells, forwards selections to the engine
//! - **Settings**: board size, players and log file from TOML

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod settings;
pub mod tui;

// Crate-level exports - Settings
pub use settings::{DEFAULT_SETTINGS_PATH, MAX_BOARD_SIZE, Settings, SettingsError};

// Crate-level exports - Game types
pub use tictactoe_engine::{
    BOARD_SIZE, Board, ConfigurationError, ConfigurationErrorKind, GameEngine, GameStatus, Move,
    MoveError, Outcome, Player, Position, WinningCombo, default_players,
};
