//! Construction errors.

use derive_more::{Display, Error};
use tracing::instrument;

/// What was wrong with the requested game setup.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ConfigurationErrorKind {
    /// Board side length below one.
    #[display("board size must be at least 1, got {}", _0)]
    BoardTooSmall(usize),
    /// Fewer than two players.
    #[display("at least 2 players are required, got {}", _0)]
    TooFewPlayers(usize),
    /// Label that is not a single character.
    #[display("player label {:?} must be exactly one character", _0)]
    InvalidLabel(String),
    /// Two players share a label.
    #[display("player label {:?} is used more than once", _0)]
    DuplicateLabel(String),
}

/// The game cannot start with the given board size or players.
#[derive(Debug, Clone, Display, Error)]
#[display("Configuration error: {} at {}:{}", kind, file, line)]
pub struct ConfigurationError {
    /// What went wrong.
    pub kind: ConfigurationErrorKind,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigurationError {
    /// Creates a new configuration error with caller location tracking.
    #[track_caller]
    #[instrument]
    pub fn new(kind: ConfigurationErrorKind) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
