//! Tic-Tac-Toe - terminal board
//!
//! Two or more players take turns on an N×N board.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tictactoe_board::{Settings, tui};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Command::Play { config, board_size } => run_play(config, board_size),
        Command::ShowConfig { config } => run_show_config(config),
    }
}

/// Run the terminal board
fn run_play(config: Option<PathBuf>, board_size: Option<usize>) -> Result<()> {
    let settings = Settings::load(config.as_deref())?.with_board_size(board_size);
    initialize_file_tracing(settings.log_file())?;

    info!(
        board_size = settings.board_size(),
        players = settings.players().len(),
        "Starting Tic-Tac-Toe"
    );
    let engine = settings.engine().context("Settings cannot start a game")?;
    tui::run_tui(engine)
}

/// Print the effective settings
fn run_show_config(config: Option<PathBuf>) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let settings = Settings::load(config.as_deref())?;
    settings.engine().context("Settings cannot start a game")?;
    print!("{}", settings.to_toml()?);
    Ok(())
}

/// Sends logs to a file so they do not interfere with the board.
fn initialize_file_tracing(path: &Path) -> Result<()> {
    let log_file = std::fs::File::create(path)
        .with_context(|| format!("Failed to create log file {}", path.display()))?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(Arc::new(log_file))
        .with_ansi(false)
        .try_init(); // Don't panic if already initialized
    Ok(())
}
