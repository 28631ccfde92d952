//! Results of applying a move.
//!
//! Every call to [`GameEngine::apply_move`](crate::GameEngine::apply_move)
//! yields an [`Outcome`]. Illegal requests come back as
//! [`Outcome::Rejected`] instead of corrupting the board.

use crate::{Player, Position, WinningCombo};
use std::fmt;

/// Why a move was refused.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The game already has a winner or ended in a tie.
    #[display("Game is already over")]
    GameOver,

    /// The cell at the position is already occupied.
    #[display("Cell {} is already occupied", _0)]
    CellOccupied(Position),

    /// The position lies outside the board.
    #[display("Cell {} is outside a {}x{} board", _0, _1, _1)]
    OutOfBounds(Position, usize),
}

impl std::error::Error for MoveError {}

/// Result of applying a move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Move accepted, game goes on. The caller advances the turn.
    Continue,
    /// Move completed a line.
    Win {
        /// The player who completed it.
        player: Player,
        /// The completed line.
        combo: WinningCombo,
    },
    /// Move filled the last cell without completing a line.
    Tie,
    /// Move refused; the board is unchanged.
    Rejected(MoveError),
}

impl Outcome {
    /// Whether the move was refused.
    pub fn is_rejected(&self) -> bool {
        matches!(self, Outcome::Rejected(_))
    }

    /// Whether the move ended the game.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Outcome::Win { .. } | Outcome::Tie)
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Continue => write!(f, "Continue"),
            Outcome::Win { player, combo } => write!(f, "Player {} wins on {}", player, combo),
            Outcome::Tie => write!(f, "Tie"),
            Outcome::Rejected(error) => write!(f, "Rejected: {}", error),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_error_messages() {
        let pos = Position::new(1, 2);
        assert_eq!(MoveError::GameOver.to_string(), "Game is already over");
        assert_eq!(
            MoveError::CellOccupied(pos).to_string(),
            "Cell (1, 2) is already occupied"
        );
        assert_eq!(
            MoveError::OutOfBounds(Position::new(3, 0), 3).to_string(),
            "Cell (3, 0) is outside a 3x3 board"
        );
    }

    #[test]
    fn test_outcome_predicates() {
        assert!(Outcome::Tie.is_terminal());
        assert!(!Outcome::Continue.is_terminal());
        assert!(Outcome::Rejected(MoveError::GameOver).is_rejected());
        assert!(!Outcome::Rejected(MoveError::GameOver).is_terminal());
    }
}
