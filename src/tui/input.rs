//! Keyboard and mouse translation for the board.

use crossterm::event::KeyCode;
use ratatui::layout::{Position as ScreenPosition, Rect};
use strum::IntoEnumIterator;
use tictactoe_engine::Position;

/// Entries of the Options menu, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display, strum::EnumIter)]
pub enum MenuItem {
    /// Clear the board and play again.
    Restart,
    /// Leave the game.
    Quit,
}

impl MenuItem {
    /// Key that triggers the entry.
    pub fn key(self) -> char {
        match self {
            Self::Restart => 'r',
            Self::Quit => 'q',
        }
    }

    /// Action the entry performs.
    pub fn action(self) -> UiAction {
        match self {
            Self::Restart => UiAction::Restart,
            Self::Quit => UiAction::Quit,
        }
    }
}

/// Cursor step requested by an arrow key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorMove {
    /// One row up.
    Up,
    /// One row down.
    Down,
    /// One column left.
    Left,
    /// One column right.
    Right,
}

/// What the user asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiAction {
    /// Move the keyboard cursor.
    MoveCursor(CursorMove),
    /// Play the cell under the cursor.
    Select,
    /// Play the n-th cell (0-based, row-major).
    SelectIndex(usize),
    /// Clear the board and start over.
    Restart,
    /// Leave the game.
    Quit,
}

/// Maps a key press to an action.
pub fn action_for_key(key: KeyCode) -> Option<UiAction> {
    if let KeyCode::Char(c) = key
        && let Some(item) = MenuItem::iter().find(|item| item.key() == c)
    {
        return Some(item.action());
    }

    match key {
        KeyCode::Up => Some(UiAction::MoveCursor(CursorMove::Up)),
        KeyCode::Down => Some(UiAction::MoveCursor(CursorMove::Down)),
        KeyCode::Left => Some(UiAction::MoveCursor(CursorMove::Left)),
        KeyCode::Right => Some(UiAction::MoveCursor(CursorMove::Right)),
        KeyCode::Enter | KeyCode::Char(' ') => Some(UiAction::Select),
        KeyCode::Esc => Some(UiAction::Quit),
        KeyCode::Char(c @ '1'..='9') => c
            .to_digit(10)
            .map(|digit| UiAction::SelectIndex(digit as usize - 1)),
        _ => None,
    }
}

/// Moves cursor one step, staying on the board.
pub fn move_cursor(cursor: Position, step: CursorMove, board_size: usize) -> Position {
    let last = board_size.saturating_sub(1);
    match step {
        CursorMove::Up => Position::new(cursor.row.saturating_sub(1), cursor.col),
        CursorMove::Down => Position::new((cursor.row + 1).min(last), cursor.col),
        CursorMove::Left => Position::new(cursor.row, cursor.col.saturating_sub(1)),
        CursorMove::Right => Position::new(cursor.row, (cursor.col + 1).min(last)),
    }
}

/// Finds the board cell under a mouse pointer.
///
/// `areas` holds the screen rectangle of each cell in row-major order.
pub fn cell_at(areas: &[Rect], board_size: usize, column: u16, row: u16) -> Option<Position> {
    let pointer = ScreenPosition::new(column, row);
    areas
        .iter()
        .position(|area| area.contains(pointer))
        .filter(|_| board_size > 0)
        .map(|index| Position::new(index / board_size, index % board_size))
}
