//! Win detection logic for tic-tac-toe.

use crate::{Board, Position, WinningCombo};
use tracing::instrument;

/// Enumerates every winning line for a `board_size`×`board_size` board.
///
/// Order is significant: rows top to bottom, columns left to right, the main
/// diagonal, then the anti-diagonal. When one move completes several lines,
/// the first in this order is the one reported.
#[instrument]
pub fn winning_combos(board_size: usize) -> Vec<WinningCombo> {
    let rows = (0..board_size).map(|row| {
        (0..board_size)
            .map(|col| Position::new(row, col))
            .collect::<WinningCombo>()
    });
    let columns = (0..board_size).map(|col| {
        (0..board_size)
            .map(|row| Position::new(row, col))
            .collect::<WinningCombo>()
    });
    let main_diagonal: WinningCombo = (0..board_size).map(|i| Position::new(i, i)).collect();
    let anti_diagonal: WinningCombo = (0..board_size)
        .map(|i| Position::new(i, board_size - 1 - i))
        .collect();

    rows.chain(columns)
        .chain([main_diagonal, anti_diagonal])
        .collect()
}

/// Returns the label holding every cell of `combo`, if a single player does.
///
/// A line wins when its cells carry exactly one distinct label and that
/// label is not empty.
pub fn completed_label<'a>(board: &'a Board, combo: &WinningCombo) -> Option<&'a str> {
    let mut labels = combo.iter().map(|pos| board.label(*pos));
    let first = labels.next()?;
    (!first.is_empty() && labels.all(|label| label == first)).then_some(first)
}

/// Finds the first completed line on the board.
#[instrument(skip_all, fields(size = board.size()))]
pub fn find_winning_combo<'c>(
    board: &Board,
    combos: &'c [WinningCombo],
) -> Option<&'c WinningCombo> {
    combos
        .iter()
        .find(|combo| completed_label(board, combo).is_some())
}
