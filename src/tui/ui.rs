//! Stateless UI rendering for the board.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use strum::IntoEnumIterator;

use super::app::{App, CellHighlight, CellView};
use super::input::MenuItem;

/// Width of one cell including its border.
pub const CELL_WIDTH: u16 = 9;
/// Height of one cell including its border.
pub const CELL_HEIGHT: u16 = 3;

const IDLE_BACKGROUND: Color = Color::Gray;
const WINNING_BACKGROUND: Color = Color::Yellow;
const TIED_BACKGROUND: Color = Color::Rgb(255, 165, 0);

/// Renders menu, title, board and status line.
pub fn draw(frame: &mut Frame, app: &App) {
    let chunks = screen_layout(frame.area());

    frame.render_widget(menu_bar(), chunks[0]);

    let title = Paragraph::new("Tic-Tac-Toe!")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[1]);

    let board_size = app.engine().board_size();
    let areas = board_cell_areas(chunks[2], board_size);
    for (index, (view, area)) in app.cells().iter().zip(areas).enumerate() {
        let is_cursor = app.engine().board().index_of(app.cursor()) == Some(index);
        draw_cell(frame, area, view, is_cursor);
    }

    let status = Paragraph::new(app.status_message())
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, chunks[3]);
}

/// Screen rectangle of every cell, row-major, for a full-screen `area`.
///
/// Shares its geometry with [`draw`] so mouse clicks land on the cell
/// that was drawn there.
pub fn cell_areas(area: Rect, board_size: usize) -> Vec<Rect> {
    board_cell_areas(screen_layout(area)[2], board_size)
}

fn screen_layout(area: Rect) -> Vec<Rect> {
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Menu
            Constraint::Length(2), // Title
            Constraint::Min(3),    // Board
            Constraint::Length(3), // Status
        ])
        .split(area)
        .to_vec()
}

fn board_cell_areas(area: Rect, board_size: usize) -> Vec<Rect> {
    let cells = u16::try_from(board_size).unwrap_or(u16::MAX);
    let board = center_rect(
        area,
        cells.saturating_mul(CELL_WIDTH),
        cells.saturating_mul(CELL_HEIGHT),
    );

    (0..board_size)
        .flat_map(|row| (0..board_size).map(move |col| (row, col)))
        .map(|(row, col)| {
            let x = offset(board.x, col, CELL_WIDTH);
            let y = offset(board.y, row, CELL_HEIGHT);
            Rect::new(x, y, CELL_WIDTH, CELL_HEIGHT).intersection(area)
        })
        .collect()
}

fn offset(origin: u16, index: usize, step: u16) -> u16 {
    let index = u16::try_from(index).unwrap_or(u16::MAX);
    origin.saturating_add(index.saturating_mul(step))
}

fn menu_bar() -> Paragraph<'static> {
    let key = Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD);
    let mut spans = vec![
        Span::styled(" Options ", Style::default().add_modifier(Modifier::REVERSED)),
        Span::raw("  "),
    ];
    for item in MenuItem::iter() {
        spans.push(Span::styled(item.key().to_string(), key));
        spans.push(Span::raw(format!(" {item}  ")));
    }
    spans.extend([
        Span::styled("←↑↓→", key),
        Span::raw(" Move  "),
        Span::styled("Enter", key),
        Span::raw(" Play"),
    ]);
    Paragraph::new(Line::from(spans))
}

fn draw_cell(frame: &mut Frame, area: Rect, view: &CellView, is_cursor: bool) {
    if area.is_empty() {
        return;
    }

    let background = match view.highlight {
        CellHighlight::Idle => IDLE_BACKGROUND,
        CellHighlight::Winning => WINNING_BACKGROUND,
        CellHighlight::Tied => TIED_BACKGROUND,
    };

    let block = if is_cursor {
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Thick)
            .border_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
    } else {
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
    };

    let text_style = Style::default()
        .fg(view.color.unwrap_or(Color::Black))
        .add_modifier(Modifier::BOLD);

    let paragraph = Paragraph::new(Line::from(Span::styled(view.text.as_str(), text_style)))
        .alignment(Alignment::Center)
        .style(Style::default().bg(background))
        .block(block);

    frame.render_widget(paragraph, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(vert[1])[1]
}
