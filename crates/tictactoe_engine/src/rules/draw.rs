//! Draw detection logic for tic-tac-toe.

use crate::Board;
use tracing::instrument;

/// Checks if the board is full (all cells occupied).
///
/// A full board with no winner indicates a tie.
#[instrument(skip(board), fields(size = board.size()))]
pub fn is_full(board: &Board) -> bool {
    board.cells().iter().all(|cell| cell.is_played())
}

#[cfg(test)]
mod tests {
    use super::super::win::{find_winning_combo, winning_combos};
    use super::*;
    use crate::Position;

    fn board_from(rows: &[&str]) -> Board {
        let mut board = Board::new(rows.len());
        for (row, line) in rows.iter().enumerate() {
            for (col, mark) in line.chars().enumerate() {
                if mark != '.' {
                    if let Some(cell) = board.get_mut(Position::new(row, col)) {
                        cell.mark(&mark.to_string());
                    }
                }
            }
        }
        board
    }

    #[test]
    fn test_empty_board_not_full() {
        assert!(!is_full(&Board::new(3)));
    }

    #[test]
    fn test_partial_board_not_full() {
        let board = board_from(&["XO.", "...", "..."]);
        assert!(!is_full(&board));
    }

    #[test]
    fn test_draw_detection() {
        // X O X / O X X / O X O
        let board = board_from(&["XOX", "OXX", "OXO"]);
        assert!(is_full(&board));
        assert_eq!(find_winning_combo(&board, &winning_combos(3)), None);
    }

    #[test]
    fn test_full_board_with_winner_still_full() {
        let board = board_from(&["XXX", "OOX", "XOO"]);
        assert!(is_full(&board));
        assert!(find_winning_combo(&board, &winning_combos(3)).is_some());
    }
}
