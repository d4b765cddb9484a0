//! Rendering: board, status line, and the sortable move list.
//!
//! Everything drawn here is derived from [`GameView`]; no widget reads
//! engine internals.

mod board;

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};
use tictactoe_engine::GameView;

/// Draws one frame from the given view and move-list cursor.
pub fn draw(f: &mut Frame, view: &GameView, cursor: usize) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(f.area());

    board::render_board(f, chunks[0], view);
    render_info(f, chunks[1], view, cursor);
}

fn render_info(f: &mut Frame, area: Rect, view: &GameView, cursor: usize) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(2),
            Constraint::Min(0),
        ])
        .split(area);

    let status = Paragraph::new(view.status.as_str())
        .block(Block::default().borders(Borders::ALL).title("Status"));
    f.render_widget(status, chunks[0]);

    let sort = if view.sort_ascending {
        "ascending"
    } else {
        "descending"
    };
    let hints = Paragraph::new(format!(
        "1-9 place  up/down select  Enter jump  s sort ({sort})  q quit"
    ))
    .style(Style::default().fg(Color::DarkGray));
    f.render_widget(hints, chunks[1]);

    render_moves(f, chunks[2], view, cursor);
}

/// Renders the move list in the view's display order.
///
/// The entry for the active step is bold, matching the original UI's
/// treatment of the current history entry; the cursor row is highlighted
/// separately so selection and time-travel position stay distinguishable.
fn render_moves(f: &mut Frame, area: Rect, view: &GameView, cursor: usize) {
    let items: Vec<ListItem> = view
        .moves
        .iter()
        .map(|label| {
            let style = if label.step == view.step {
                Style::default().add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            ListItem::new(label.text.clone()).style(style)
        })
        .collect();

    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title("Moves"))
        .highlight_style(Style::default().bg(Color::Blue).fg(Color::White))
        .highlight_symbol("> ");

    let mut state = ListState::default();
    state.select(Some(cursor));
    f.render_stateful_widget(list, area, &mut state);
}
