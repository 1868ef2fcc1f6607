//! Stateless UI rendering: a pure projection of the current snapshot.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};
use strictly_rewind::{MoveEntry, Player, Position, Snapshot, Square};

use crate::app::{App, Focus};

const HELP: &str =
    "1-9/Enter: play  Tab: switch panel  u/r: undo/redo  Home: start  ?: help  q: quit";

/// Draws one frame.
pub fn draw(frame: &mut Frame, app: &App) {
    let help_height = if app.show_help() { 1 } else { 0 };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),           // Title
            Constraint::Min(13),             // Board + moves
            Constraint::Length(3),           // Status
            Constraint::Length(help_height), // Help
        ])
        .split(frame.area());

    let title = Paragraph::new("Strictly Rewind - Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(chunks[1]);
    draw_board(frame, body[0], app);
    draw_moves(frame, body[1], app);

    let status = Paragraph::new(vec![
        Line::from(Span::styled(
            app.view().status().to_string(),
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        )),
        Line::from(app.status_message()),
    ])
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::TOP));
    frame.render_widget(status, chunks[2]);

    if app.show_help() {
        let help = Paragraph::new(HELP)
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center);
        frame.render_widget(help, chunks[3]);
    }
}

fn panel(title: &str, focused: bool) -> Block<'_> {
    let border = if focused { Color::Cyan } else { Color::DarkGray };
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border))
}

fn draw_board(frame: &mut Frame, area: Rect, app: &App) {
    let block = panel("Board", app.focus() == Focus::Board);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let board_area = center_rect(inner, 38, 11);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(board_area);

    for row in 0..3 {
        draw_row(frame, rows[row * 2], app, row);
        if row < 2 {
            draw_separator(frame, rows[row * 2 + 1]);
        }
    }
}

fn draw_row(frame: &mut Frame, area: Rect, app: &App, row: usize) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(12),
            Constraint::Length(1),
            Constraint::Length(12),
            Constraint::Length(1),
            Constraint::Length(12),
        ])
        .split(area);

    for col in 0..3 {
        if let Some(pos) = Position::from_row_col(row, col) {
            draw_cell(frame, cols[col * 2], app, pos);
        }
        if col < 2 {
            draw_separator_vertical(frame, cols[col * 2 + 1]);
        }
    }
}

fn draw_cell(frame: &mut Frame, area: Rect, app: &App, pos: Position) {
    let snapshot = app.view();
    let (symbol, mut style) = match snapshot.board().get(pos) {
        Square::Empty => ("   ", Style::default().fg(Color::DarkGray)),
        Square::Occupied(Player::X) => (
            " X ",
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Square::Occupied(Player::O) => (
            " O ",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
    };

    if is_winning(snapshot, pos) {
        style = style.bg(Color::Green);
    }
    if pos == app.cursor() && app.focus() == Focus::Board {
        style = style.bg(Color::White).fg(Color::Black);
    }

    // Vertically center the mark in the 3-line cell.
    let lines = vec![
        Line::default(),
        Line::from(Span::styled(symbol, style)),
        Line::default(),
    ];
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}

fn is_winning(snapshot: &Snapshot, pos: Position) -> bool {
    snapshot
        .winning_line()
        .is_some_and(|line| line.contains(&pos))
}

fn draw_moves(frame: &mut Frame, area: Rect, app: &App) {
    let focused = app.focus() == Focus::History;
    let items: Vec<ListItem> = app.view().moves().iter().map(move_item).collect();

    let list = List::new(items)
        .block(panel("Moves", focused))
        .highlight_style(Style::default().bg(Color::DarkGray))
        .highlight_symbol("> ");

    let mut state = ListState::default();
    if focused {
        state.select(Some(app.selected()));
    }
    frame.render_stateful_widget(list, area, &mut state);
}

fn move_item(entry: &MoveEntry) -> ListItem<'static> {
    let mut spans = vec![Span::raw(entry.label())];
    if let Some((pos, player)) = entry.played() {
        spans.push(Span::styled(
            format!(" ({} at {})", player, pos.label()),
            Style::default().fg(Color::DarkGray),
        ));
    }
    let style = if entry.is_current() {
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };
    ListItem::new(Line::from(spans)).style(style)
}

fn draw_separator(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("──────────────────────────────────────")
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn draw_separator_vertical(frame: &mut Frame, area: Rect) {
    let sep =
        Paragraph::new(vec![Line::from("│"); 3]).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
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
