//! UI rendering using ratatui.
//!
//! Widgets are stateless: they consume derived page results and selection
//! state from the store and draw them, producing nothing back.

mod layout;
mod widgets;

pub use layout::{Layout, centered_rect};
pub use widgets::{
    ChartPanel, DetailsPanel, HelpPanel, NewsList, ScreenerTable, SearchBar, StatusBar, StockTable,
    TabBar, Watchlist,
};

use crate::state::{Store, View};
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout as RatatuiLayout, Rect};

/// Main UI renderer.
pub struct Ui;

impl Ui {
    /// Render the entire UI.
    pub fn render(frame: &mut Frame, store: &Store) {
        let layout = Layout::new(frame.area());

        StatusBar::render(frame, layout.status_area, store);
        TabBar::render(frame, layout.tab_area, store);

        match store.app.current_view {
            View::Dashboard => Self::render_dashboard(frame, layout.main_area, store),
            View::Screener => Self::render_screener(frame, layout.main_area, store),
            View::StockDetails => DetailsPanel::render(frame, layout.main_area, store),
            View::News => NewsList::render(frame, layout.main_area, store),
        }

        if store.app.show_help {
            HelpPanel::render(frame, frame.area());
        }

        if let Some(notification) = &store.app.notification {
            widgets::render_notification(frame, layout.notification_area, notification);
        }

        if let Some(error) = &store.app.error {
            widgets::render_error(frame, layout.notification_area, error);
        }
    }

    /// Dashboard: search + watchlist + paginated listing on the left, the
    /// chart panel with signal badges on the right.
    fn render_dashboard(frame: &mut Frame, area: Rect, store: &Store) {
        let (sidebar, chart) = layout::dashboard_columns(area);

        let rows = RatatuiLayout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Search box
                Constraint::Length(6), // Watchlist
                Constraint::Min(5),    // Results table
            ])
            .split(sidebar);

        SearchBar::render(frame, rows[0], store, store.dashboard.query.search());
        Watchlist::render(frame, rows[1], store);
        StockTable::render(frame, rows[2], store);

        ChartPanel::render(frame, chart, store);
    }

    /// Screener: search on top, the paginated results table below.
    fn render_screener(frame: &mut Frame, area: Rect, store: &Store) {
        let rows = RatatuiLayout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Min(5)])
            .split(area);

        SearchBar::render(frame, rows[0], store, store.screener.query.search());
        ScreenerTable::render(frame, rows[1], store);
    }
}
