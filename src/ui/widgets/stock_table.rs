//! Dashboard results table.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Cell, Row, Table, TableState},
};

use super::{pagination, trend_color};
use crate::state::Store;

/// Paginated stock listing with a pager footer.
pub struct StockTable;

impl StockTable {
    /// Render the results table and pager.
    pub fn render(frame: &mut Frame, area: Rect, store: &Store) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(3), Constraint::Length(1)])
            .split(area);

        let page = store.dashboard.page(store.page_size);

        let header_cells = ["Symbol", "Price", "% Change", "Trend"].iter().map(|h| {
            Cell::from(*h).style(
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )
        });
        let header = Row::new(header_cells).height(1);

        let selected = store.dashboard.selected.as_deref();
        let rows = page.items.iter().map(|stock| {
            let trend = stock.trend();
            let style = if selected == Some(stock.symbol.as_str()) {
                Style::default()
                    .bg(Color::DarkGray)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };

            let cells = vec![
                Cell::from(stock.symbol.clone()),
                Cell::from(format!("{:.2}", stock.price)),
                Cell::from(stock.change_label()).style(Style::default().fg(trend_color(trend))),
                Cell::from(trend.arrow()).style(Style::default().fg(trend_color(trend))),
            ];

            Row::new(cells).style(style).height(1)
        });

        let table = Table::new(
            rows,
            [
                Constraint::Length(12),
                Constraint::Length(10),
                Constraint::Length(10),
                Constraint::Length(6),
            ],
        )
        .header(header)
        .block(
            Block::default()
                .title(format!(" Results ({}) ", page.total_items))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .row_highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .highlight_symbol("▶ ");

        let mut state = TableState::default();
        if !page.items.is_empty() {
            state.select(Some(store.dashboard.cursor.min(page.items.len() - 1)));
        }

        frame.render_stateful_widget(table, chunks[0], &mut state);

        pagination::render_pager(frame, chunks[1], page.page, page.total_pages);
    }
}
