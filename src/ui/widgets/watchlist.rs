//! Watchlist panel.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::state::{Store, WATCHLIST_CAPACITY};

/// The watched-symbols panel on the dashboard sidebar.
pub struct Watchlist;

impl Watchlist {
    /// Render the watchlist.
    pub fn render(frame: &mut Frame, area: Rect, store: &Store) {
        let selected = store.dashboard.selected.as_deref();

        let lines: Vec<Line> = store
            .dashboard
            .watchlist
            .iter()
            .map(|symbol| {
                let style = if selected == Some(symbol.as_str()) {
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(Color::White)
                };
                Line::from(vec![
                    Span::styled("★ ", Style::default().fg(Color::Yellow)),
                    Span::styled(symbol.clone(), style),
                ])
            })
            .collect();

        let block = Block::default()
            .title(format!(
                " Watchlist ({}/{WATCHLIST_CAPACITY}) ",
                store.dashboard.watchlist.len()
            ))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan));

        frame.render_widget(Paragraph::new(lines).block(block), area);
    }
}
