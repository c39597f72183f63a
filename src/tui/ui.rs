//! Stateless UI rendering for 2048.

use super::app::App;
use crate::games::twenty48::{Coord, SIZE};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
};

const CELL_WIDTH: u16 = 8;
const CELL_HEIGHT: u16 = 3;

/// Renders title, scores, board and status.
pub fn draw(frame: &mut Frame, app: &App) {
    let theme = app.theme();
    let area = frame.area();
    frame.render_widget(Block::default().style(Style::default().bg(theme.background)), area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Length(3), // Scores
            Constraint::Min(CELL_HEIGHT * SIZE as u16 + 2), // Board
            Constraint::Length(3), // Status
        ])
        .split(area);

    let title = Paragraph::new("Strictly 2048")
        .style(Style::default().fg(theme.text).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    let engine = app.engine();
    let scores = Paragraph::new(format!(
        "Score: {}    Best: {}",
        engine.score(),
        engine.best_score()
    ))
    .style(Style::default().fg(theme.text))
    .alignment(Alignment::Center);
    frame.render_widget(scores, chunks[1]);

    draw_board(frame, chunks[2], app);

    let status = Paragraph::new(app.status_message())
        .style(Style::default().fg(theme.text))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, chunks[3]);
}

fn draw_board(frame: &mut Frame, area: Rect, app: &App) {
    let theme = app.theme();
    let board_area = center_rect(area, CELL_WIDTH * SIZE as u16 + 2, CELL_HEIGHT * SIZE as u16 + 2);
    let block = Block::default()
        .borders(Borders::ALL)
        .style(Style::default().bg(theme.grid).fg(theme.grid));
    let inner = block.inner(board_area);
    frame.render_widget(block, board_area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(CELL_HEIGHT); SIZE])
        .split(inner);

    for (row, row_area) in rows.iter().enumerate() {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(CELL_WIDTH); SIZE])
            .split(*row_area);
        for (col, cell_area) in cols.iter().enumerate() {
            draw_cell(frame, *cell_area, app, Coord::new(row, col));
        }
    }
}

fn draw_cell(frame: &mut Frame, area: Rect, app: &App, coord: Coord) {
    let value = app.engine().grid().get(coord);
    let mut style = app.theme().tile_style(value);
    if app.was_merged(coord) {
        style = style.add_modifier(Modifier::UNDERLINED);
    }
    if app.was_spawned(coord) {
        style = style.add_modifier(Modifier::ITALIC);
    }

    let label = match value {
        0 => String::new(),
        v => v.to_string(),
    };
    // vertical centring inside a 3-line cell
    let text = vec![Line::from(""), Line::from(label)];
    let paragraph = Paragraph::new(text)
        .style(style)
        .alignment(Alignment::Center);
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
