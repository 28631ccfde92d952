//! User settings: board size, players and log destination.
//!
//! Settings come from an optional TOML file; anything left out takes its
//! default. The CLI may override the board size afterwards.
//!
//! ```toml
//! board_size = 4
//! log_file = "tictactoe.log"
//!
//! [[players]]
//! label = "X"
//! color = "#4169E1"
//!
//! [[players]]
//! label = "O"
//! color = "#228B22"
//! ```

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tictactoe_engine::{BOARD_SIZE, GameEngine, Player, default_players};
use tracing::{debug, info, instrument};

/// Settings file read when no `--config` is given, if it exists.
pub const DEFAULT_SETTINGS_PATH: &str = "tictactoe.toml";

/// Largest board side the terminal board will draw.
pub const MAX_BOARD_SIZE: usize = 12;

/// Game and logging settings.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Side length of the board.
    board_size: usize,

    /// Players in turn order.
    players: Vec<Player>,

    /// File that receives the tracing output.
    log_file: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            board_size: BOARD_SIZE,
            players: default_players(),
            log_file: PathBuf::from("tictactoe.log"),
        }
    }
}

impl Settings {
    /// Loads settings from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        debug!("Loading settings from file");
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            SettingsError::new(format!(
                "Failed to read settings file {}: {}",
                path.as_ref().display(),
                e
            ))
        })?;

        let settings: Self = toml::from_str(&content)
            .map_err(|e| SettingsError::new(format!("Failed to parse settings: {}", e)))?;

        info!(
            board_size = settings.board_size,
            players = settings.players.len(),
            "Settings loaded successfully"
        );
        Ok(settings)
    }

    /// Resolves the settings to use.
    ///
    /// An explicit path must exist. Without one, [`DEFAULT_SETTINGS_PATH`] is
    /// read when present and defaults are used otherwise.
    #[instrument]
    pub fn load(path: Option<&Path>) -> Result<Self, SettingsError> {
        match path {
            Some(path) => Self::from_file(path),
            None if Path::new(DEFAULT_SETTINGS_PATH).is_file() => {
                Self::from_file(DEFAULT_SETTINGS_PATH)
            }
            None => {
                debug!("No settings file, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Replaces the board size when `board_size` is given.
    #[instrument(skip(self))]
    pub fn with_board_size(mut self, board_size: Option<usize>) -> Self {
        if let Some(board_size) = board_size {
            self.board_size = board_size;
        }
        self
    }

    /// Builds a fresh engine from these settings.
    ///
    /// # Errors
    ///
    /// Fails if the board is larger than [`MAX_BOARD_SIZE`] or the engine
    /// rejects the players or board size.
    #[instrument(skip(self))]
    pub fn engine(&self) -> Result<GameEngine, SettingsError> {
        if self.board_size > MAX_BOARD_SIZE {
            return Err(SettingsError::new(format!(
                "Board size {} exceeds the maximum of {}",
                self.board_size, MAX_BOARD_SIZE
            )));
        }
        GameEngine::new(self.players.clone(), self.board_size)
            .map_err(|e| SettingsError::new(format!("Invalid game configuration: {}", e)))
    }

    /// Renders the settings as TOML.
    #[instrument(skip(self))]
    pub fn to_toml(&self) -> Result<String, SettingsError> {
        toml::to_string_pretty(self)
            .map_err(|e| SettingsError::new(format!("Failed to serialize settings: {}", e)))
    }
}

/// Settings error.
#[derive(Debug, Clone, Display, Error)]
#[display("Settings error: {} at {}:{}", message, file, line)]
pub struct SettingsError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl SettingsError {
    /// Creates a new settings error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
