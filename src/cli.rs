//! Command-line interface for the tic-tac-toe board.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Tic-Tac-Toe - play on an N×N board in the terminal
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
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
    /// Play a game on the terminal board
    Play {
        /// Path to a TOML settings file (defaults to tictactoe.toml if present)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Board side length, overrides the settings file
        #[arg(short, long)]
        board_size: Option<usize>,
    },

    /// Print the effective settings as TOML
    ShowConfig {
        /// Path to a TOML settings file (defaults to tictactoe.toml if present)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}
