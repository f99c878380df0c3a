//! Screener results table.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Cell, Row, Table, TableState},
};

use super::{pagination, signal_color};
use crate::state::Store;

/// Paginated screener results with signal and score columns.
pub struct ScreenerTable;

impl ScreenerTable {
    /// Render the screener table and pager.
    pub fn render(frame: &mut Frame, area: Rect, store: &Store) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(3), Constraint::Length(1)])
            .split(area);

        let page = store.screener.page(store.page_size);

        let header_cells = ["Symbol", "Signal", "Score"].iter().map(|h| {
            Cell::from(*h).style(
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )
        });
        let header = Row::new(header_cells).height(1);

        let rows = page.items.iter().map(|row| {
            let score_style = if row.score >= 70 {
                Style::default().fg(Color::Green)
            } else if row.score >= 50 {
                Style::default().fg(Color::Yellow)
            } else {
                Style::default().fg(Color::Red)
            };
            let cells = vec![
                Cell::from(row.symbol.clone()),
                Cell::from(row.signal.to_string())
                    .style(Style::default().fg(signal_color(row.signal))),
                Cell::from(row.score.to_string()).style(score_style),
            ];
            Row::new(cells).height(1)
        });

        let table = Table::new(
            rows,
            [
                Constraint::Length(12),
                Constraint::Length(8),
                Constraint::Length(7),
            ],
        )
        .header(header)
        .block(
            Block::default()
                .title(format!(" Screener Results ({}) ", page.total_items))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .row_highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .highlight_symbol("▶ ");

        let mut state = TableState::default();
        if !page.items.is_empty() {
            state.select(Some(store.screener.cursor.min(page.items.len() - 1)));
        }

        frame.render_stateful_widget(table, chunks[0], &mut state);

        pagination::render_pager(frame, chunks[1], page.page, page.total_pages);
    }
}
