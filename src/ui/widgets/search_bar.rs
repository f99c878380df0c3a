//! Search input widget shared by the dashboard and screener views.

use ratatui::{
    Frame,
    layout::{Position, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::state::Store;

/// The search box at the top of a listing view.
pub struct SearchBar;

impl SearchBar {
    /// Render the search box. `committed` is the view's current query; the
    /// live input buffer takes over while a search is being typed.
    pub fn render(frame: &mut Frame, area: Rect, store: &Store, committed: &str) {
        let searching = store.app.is_searching();
        let term = if searching {
            store.app.input_buffer.as_str()
        } else {
            committed
        };

        let content = if term.is_empty() && !searching {
            Line::from(Span::styled(
                "Search stock (e.g., TCS)",
                Style::default().fg(Color::DarkGray),
            ))
        } else {
            Line::from(vec![
                Span::styled("🔍 ", Style::default().fg(Color::DarkGray)),
                Span::raw(term),
            ])
        };

        let border_color = if searching { Color::Magenta } else { Color::Cyan };
        let block = Block::default()
            .title(" Search Stock ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_color));

        frame.render_widget(Paragraph::new(content).block(block), area);

        if searching {
            // Icon plus space take three columns inside the border
            let x = area.x + 4 + store.app.cursor_position as u16;
            frame.set_cursor_position(Position::new(x.min(area.right().saturating_sub(2)), area.y + 1));
        }
    }
}
