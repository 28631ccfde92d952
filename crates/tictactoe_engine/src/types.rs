//! Core domain types for tic-tac-toe.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Default side length of the board.
pub const BOARD_SIZE: usize = 3;

/// A participant in the game.
///
/// Players are immutable once configured. The label is what ends up in the
/// cells they claim, the color is a display hint for presenters (a color
/// name such as `"blue"` or a hex triple such as `"#4169E1"`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Getters, Serialize, Deserialize)]
pub struct Player {
    /// Single-character mark, e.g. `"X"`.
    label: String,
    /// Display color.
    color: String,
}

impl Player {
    /// Creates a new player.
    pub fn new(label: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            color: color.into(),
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label)
    }
}

/// The classic X (royal blue) and O (forest green) pairing.
pub fn default_players() -> Vec<Player> {
    vec![Player::new("X", "#4169E1"), Player::new("O", "#228B22")]
}

/// A cell coordinate, 0-indexed from the top-left corner.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct Position {
    /// Row, top to bottom.
    pub row: usize,
    /// Column, left to right.
    pub col: usize,
}

impl Position {
    /// Creates a new position.
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl From<(usize, usize)> for Position {
    fn from((row, col): (usize, usize)) -> Self {
        Self::new(row, col)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// The contents of one cell: where it is and who, if anyone, played there.
///
/// An empty label means the cell is unoccupied. The position never changes
/// after the board is built.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    position: Position,
    label: String,
}

impl Move {
    /// Creates an unoccupied cell at `position`.
    pub fn empty(position: Position) -> Self {
        Self {
            position,
            label: String::new(),
        }
    }

    /// Returns the cell's coordinates.
    pub fn position(&self) -> Position {
        self.position
    }

    /// Returns the occupying label, empty if unoccupied.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Whether a player has claimed this cell.
    pub fn is_played(&self) -> bool {
        !self.label.is_empty()
    }

    pub(crate) fn mark(&mut self, label: &str) {
        self.label = label.to_owned();
    }

    pub(crate) fn clear(&mut self) {
        self.label.clear();
    }
}

/// One line of `board_size` cells that wins the game when a single player
/// holds all of them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WinningCombo(Vec<Position>);

impl WinningCombo {
    /// Returns the positions in scan order.
    pub fn positions(&self) -> &[Position] {
        &self.0
    }

    /// Whether `position` lies on this line.
    pub fn contains(&self, position: Position) -> bool {
        self.0.contains(&position)
    }

    /// Number of cells in the line.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the line has no cells.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over the positions.
    pub fn iter(&self) -> impl Iterator<Item = &Position> {
        self.0.iter()
    }
}

impl FromIterator<Position> for WinningCombo {
    fn from_iter<I: IntoIterator<Item = Position>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl fmt::Display for WinningCombo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cells: Vec<String> = self.0.iter().map(ToString::to_string).collect();
        write!(f, "[{}]", cells.join(", "))
    }
}

/// Square grid of cells stored in row-major order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    size: usize,
    cells: Vec<Move>,
}

impl Board {
    /// Creates an empty `size`×`size` board.
    pub fn new(size: usize) -> Self {
        let cells = (0..size)
            .flat_map(|row| (0..size).map(move |col| Move::empty(Position::new(row, col))))
            .collect();
        Self { size, cells }
    }

    /// Side length of the board.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Flat index of `position`, or `None` if it lies outside the board.
    pub fn index_of(&self, position: Position) -> Option<usize> {
        (position.row < self.size && position.col < self.size)
            .then(|| position.row * self.size + position.col)
    }

    /// Gets the cell at `position`.
    pub fn get(&self, position: Position) -> Option<&Move> {
        self.cells.get(self.index_of(position)?)
    }

    pub(crate) fn get_mut(&mut self, position: Position) -> Option<&mut Move> {
        let index = self.index_of(position)?;
        self.cells.get_mut(index)
    }

    /// Label at `position`, empty for unoccupied or out-of-bounds cells.
    pub fn label(&self, position: Position) -> &str {
        self.get(position).map(Move::label).unwrap_or("")
    }

    /// Checks if the cell exists and is unoccupied.
    pub fn is_empty(&self, position: Position) -> bool {
        matches!(self.get(position), Some(cell) if !cell.is_played())
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> &[Move] {
        &self.cells
    }

    /// Clears every label, keeping positions.
    pub(crate) fn clear(&mut self) {
        self.cells.iter_mut().for_each(Move::clear);
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, chunk) in self.cells.chunks(self.size.max(1)).enumerate() {
            if row > 0 {
                writeln!(f)?;
            }
            let line: Vec<&str> = chunk
                .iter()
                .map(|cell| if cell.is_played() { cell.label() } else { "." })
                .collect();
            write!(f, "{}", line.join("|"))?;
        }
        Ok(())
    }
}
