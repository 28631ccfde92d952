//! Board presenter state: what each cell shows and how input reaches the engine.

use ratatui::style::Color;
use tictactoe_engine::{GameEngine, Outcome, Player, Position};
use tracing::{debug, info, instrument, warn};

use super::input::{self, UiAction};

/// Background treatment of a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CellHighlight {
    /// Normal play.
    #[default]
    Idle,
    /// Part of the completed line.
    Winning,
    /// The game was tied.
    Tied,
}

/// What one cell currently displays.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CellView {
    /// Label drawn in the cell.
    pub text: String,
    /// Color of the label, `None` for the terminal default.
    pub color: Option<Color>,
    /// Background treatment.
    pub highlight: CellHighlight,
}

/// Main application state.
pub struct App {
    engine: GameEngine,
    cells: Vec<CellView>,
    cursor: Position,
    status_message: String,
    should_quit: bool,
}

impl App {
    /// Creates a new application around a fresh engine.
    pub fn new(engine: GameEngine) -> Self {
        let size = engine.board_size();
        let status_message = turn_message(engine.current_player());
        Self {
            engine,
            cells: vec![CellView::default(); size * size],
            cursor: Position::new(0, 0),
            status_message,
            should_quit: false,
        }
    }

    /// Gets the engine.
    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    /// Cell views in row-major order.
    pub fn cells(&self) -> &[CellView] {
        &self.cells
    }

    /// Cell view at `position`.
    pub fn cell_view(&self, position: Position) -> Option<&CellView> {
        self.index_of(position).map(|index| &self.cells[index])
    }

    /// Keyboard cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Gets the current status message.
    pub fn status_message(&self) -> &str {
        &self.status_message
    }

    /// Whether the user asked to leave.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Applies a keyboard action.
    #[instrument(skip(self))]
    pub fn handle_action(&mut self, action: UiAction) {
        let size = self.engine.board_size();
        match action {
            UiAction::MoveCursor(step) => {
                self.cursor = input::move_cursor(self.cursor, step, size);
            }
            UiAction::Select => {
                self.select(self.cursor);
            }
            UiAction::SelectIndex(index) if index < size * size => {
                self.cursor = Position::new(index / size, index % size);
                self.select(self.cursor);
            }
            UiAction::SelectIndex(index) => {
                debug!(index, "No such cell");
            }
            UiAction::Restart => self.restart(),
            UiAction::Quit => {
                info!("User quit");
                self.should_quit = true;
            }
        }
    }

    /// Handles a mouse click on a cell.
    #[instrument(skip(self))]
    pub fn click(&mut self, position: Position) -> Option<Outcome> {
        self.cursor = position;
        self.select(position)
    }

    /// Plays `position` for the current player and updates the affected cells.
    ///
    /// Returns `None` when the game is already over. A rejected move leaves
    /// every cell and the status line as they were.
    #[instrument(skip(self))]
    pub fn select(&mut self, position: Position) -> Option<Outcome> {
        if self.engine.has_winner() || self.engine.is_tied() {
            debug!("Game over, ignoring selection");
            return None;
        }

        let player = self.engine.current_player().clone();
        let outcome = self.engine.apply_move(position);
        match &outcome {
            Outcome::Rejected(error) => {
                debug!(%error, "Selection rejected");
            }
            Outcome::Continue => {
                self.paint(position, &player);
                self.engine.toggle_player();
                self.status_message = turn_message(self.engine.current_player());
            }
            Outcome::Win { player, combo } => {
                self.paint(position, player);
                for (view, cell) in self.cells.iter_mut().zip(self.engine.cells()) {
                    if combo.contains(cell.position()) {
                        view.highlight = CellHighlight::Winning;
                    }
                }
                self.status_message = format!(
                    "Player {} wins! Press 'r' to restart or 'q' to quit.",
                    player
                );
            }
            Outcome::Tie => {
                self.paint(position, &player);
                for cell in &mut self.cells {
                    cell.highlight = CellHighlight::Tied;
                }
                self.status_message =
                    "Tied game! Press 'r' to restart or 'q' to quit.".to_string();
            }
        }
        if outcome.is_terminal() {
            info!(status = %self.engine.status(), "Game over");
        }
        Some(outcome)
    }

    /// Restarts the game.
    ///
    /// Clears every cell and resets the engine. The player to move stays
    /// the same.
    #[instrument(skip(self))]
    pub fn restart(&mut self) {
        debug!("Restarting game");
        self.cells.iter_mut().for_each(|cell| *cell = CellView::default());
        self.engine.reset();
        self.status_message = turn_message(self.engine.current_player());
    }

    fn paint(&mut self, position: Position, player: &Player) {
        if let Some(index) = self.index_of(position) {
            let cell = &mut self.cells[index];
            cell.text = player.label().clone();
            cell.color = player_color(player);
        }
    }

    fn index_of(&self, position: Position) -> Option<usize> {
        self.engine.board().index_of(position)
    }
}

fn turn_message(player: &Player) -> String {
    format!("Player {}'s turn", player)
}

/// Parses a player's display color, falling back to the terminal default.
pub fn player_color(player: &Player) -> Option<Color> {
    match player.color().parse::<Color>() {
        Ok(color) => Some(color),
        Err(_) => {
            warn!(color = %player.color(), player = %player, "Unrecognized color");
            None
        }
    }
}
