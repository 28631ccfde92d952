//! Terminal board for tic-tac-toe.
//!
//! The presenter translates keys and mouse clicks into engine calls and
//! redraws the grid from what the engine reports. It owns all view state
//! (cell text and colors, cursor, status line); the engine never sees it.

mod app;
mod input;
mod ui;

pub use app::{App, CellHighlight, CellView, player_color};
pub use input::{CursorMove, MenuItem, UiAction, action_for_key, cell_at, move_cursor};
pub use ui::{CELL_HEIGHT, CELL_WIDTH, cell_areas, draw};

use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind, MouseButton,
        MouseEvent, MouseEventKind,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use std::time::Duration;
use tictactoe_engine::GameEngine;
use tracing::{debug, error, info, instrument};

/// Runs the board until the user quits.
#[instrument(skip_all, fields(board_size = engine.board_size()))]
pub fn run_tui(engine: GameEngine) -> Result<()> {
    info!("Starting terminal board");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, App::new(engine));

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Board loop error");
    }
    info!("Terminal board closed");
    res
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<Stdout>>, mut app: App) -> Result<()> {
    loop {
        let area = terminal.draw(|f| ui::draw(f, &app))?.area;

        if app.should_quit() {
            return Ok(());
        }

        if !event::poll(Duration::from_millis(100))? {
            continue;
        }

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if let Some(action) = input::action_for_key(key.code) {
                    app.handle_action(action);
                }
            }
            Event::Mouse(MouseEvent {
                kind: MouseEventKind::Down(MouseButton::Left),
                column,
                row,
                ..
            }) => {
                let board_size = app.engine().board_size();
                let areas = ui::cell_areas(area, board_size);
                match input::cell_at(&areas, board_size, column, row) {
                    Some(position) => {
                        app.click(position);
                    }
                    None => debug!(column, row, "Click outside the board"),
                }
            }
            _ => {}
        }
    }
}
