//! State management for stockdeck.
//!
//! Centralized state with a unidirectional data flow: every mutation goes
//! through [`Store::reduce`], widgets only read derived data. The
//! filtering and pagination rules live in [`filter`] and are shared by the
//! dashboard and screener listings.

mod app_state;
mod dashboard_state;
mod details_state;
pub mod filter;
mod news_state;
mod screener_state;

pub use app_state::{AppState, InputMode, View};
pub use dashboard_state::{DashboardState, Stock, Timeframe, Trend, WATCHLIST_CAPACITY};
pub use details_state::{DetailsState, Indicator, SignalEntry, SignalSet, StockDetails};
pub use filter::{ListingQuery, PageResult};
pub use news_state::{NewsItem, NewsState, Sentiment};
pub use screener_state::{ScreenerRow, ScreenerState, Signal};

use crate::error::Result;
use chrono::{DateTime, Utc};
use tokio::sync::mpsc;

/// Actions that can be dispatched to modify state.
#[derive(Debug, Clone)]
pub enum Action {
    // Navigation
    SetView(View),
    NextView,
    PrevView,
    /// Navigate to the details view for a symbol (the screener hand-off).
    OpenDetails(String),

    // Search input
    BeginSearch,
    SearchInput(char),
    SearchBackspace,
    SearchCursorLeft,
    SearchCursorRight,
    SearchCommit,
    SearchCancel,

    // Pagination
    RequestPage(usize),
    NextPage,
    PrevPage,

    // Cursor and selection
    ScrollUp,
    ScrollDown,
    GoToTop,
    GoToBottom,
    Select,

    // Dashboard
    SetTimeframe(Timeframe),
    CycleTimeframe,
    WatchlistAdd(String),
    WatchlistRemove(String),

    // News
    CycleSentimentFilter,

    // Data loading
    Refresh,
    StocksLoaded(Vec<Stock>),
    WatchlistLoaded(Vec<String>),
    SignalsLoaded(SignalSet),
    ScreenerLoaded(Vec<ScreenerRow>),
    NewsLoaded(Vec<NewsItem>),
    DetailsLoaded(StockDetails),

    // UI
    ToggleHelp,
    ShowNotification(Notification),
    DismissNotification,
    Tick,

    // Error handling
    SetError(String),
    ClearError,
    SetLoading(bool),

    // Quit
    Quit,
}

/// A notification to display to the user.
#[derive(Debug, Clone)]
pub struct Notification {
    pub message: String,
    pub level: NotificationLevel,
    pub expires_at: DateTime<Utc>,
}

/// Notification severity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Info,
    Success,
    Warning,
    Error,
}

impl Notification {
    fn with_ttl(message: impl Into<String>, level: NotificationLevel, secs: i64) -> Self {
        Self {
            message: message.into(),
            level,
            expires_at: Utc::now() + chrono::Duration::seconds(secs),
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::with_ttl(message, NotificationLevel::Info, 3)
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::with_ttl(message, NotificationLevel::Success, 3)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::with_ttl(message, NotificationLevel::Warning, 5)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::with_ttl(message, NotificationLevel::Error, 10)
    }

    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }
}

/// The global state store.
#[derive(Debug)]
pub struct Store {
    /// Application state.
    pub app: AppState,
    /// Dashboard state.
    pub dashboard: DashboardState,
    /// Screener state.
    pub screener: ScreenerState,
    /// Stock details state.
    pub details: DetailsState,
    /// News state.
    pub news: NewsState,
    /// Items per listing page, fixed for the session.
    pub page_size: usize,
    /// Action sender for dispatching actions.
    action_tx: mpsc::UnboundedSender<Action>,
}

impl Store {
    /// Create a new store with the given action sender and page size.
    pub fn new(action_tx: mpsc::UnboundedSender<Action>, page_size: usize) -> Self {
        Self {
            app: AppState::default(),
            dashboard: DashboardState::default(),
            screener: ScreenerState::default(),
            details: DetailsState::default(),
            news: NewsState::default(),
            page_size: page_size.max(1),
            action_tx,
        }
    }

    /// Dispatch an action to the store.
    pub fn dispatch(&self, action: Action) -> Result<()> {
        self.action_tx
            .send(action)
            .map_err(|e| crate::Error::channel(e.to_string()))
    }

    /// Apply an action to update state.
    pub fn reduce(&mut self, action: Action) {
        match action {
            // Navigation
            Action::SetView(view) => self.set_view(view),
            Action::NextView => self.set_view(self.app.current_view.next()),
            Action::PrevView => self.set_view(self.app.current_view.prev()),
            Action::OpenDetails(symbol) => {
                self.screener.selected = Some(symbol.clone());
                self.details.symbol = Some(symbol);
                self.set_view(View::StockDetails);
            }

            // Search input
            Action::BeginSearch => {
                if self.app.current_view.has_listing() {
                    let current = self.active_search().to_string();
                    self.app.begin_search(&current);
                }
            }
            Action::SearchInput(c) => {
                self.app.push_char(c);
                self.apply_search();
            }
            Action::SearchBackspace => {
                self.app.pop_char();
                self.apply_search();
            }
            Action::SearchCursorLeft => self.app.cursor_left(),
            Action::SearchCursorRight => self.app.cursor_right(),
            Action::SearchCommit => {
                self.app.input_mode = InputMode::Normal;
            }
            Action::SearchCancel => {
                self.app.input_buffer = self.app.search_restore.clone();
                self.app.cursor_position = self.app.input_buffer.chars().count();
                self.apply_search();
                self.app.input_mode = InputMode::Normal;
            }

            // Pagination
            Action::RequestPage(page) => self.request_page(page),
            Action::NextPage => self.request_page(self.active_page() + 1),
            Action::PrevPage => self.request_page(self.active_page().saturating_sub(1)),

            // Cursor and selection
            Action::ScrollUp => self.scroll(-1),
            Action::ScrollDown => self.scroll(1),
            Action::GoToTop => self.move_cursor_to(0),
            Action::GoToBottom => self.move_cursor_to(usize::MAX),
            Action::Select => self.select_under_cursor(),

            // Dashboard
            Action::SetTimeframe(frame) => self.dashboard.timeframe = frame,
            Action::CycleTimeframe => {
                self.dashboard.timeframe = self.dashboard.timeframe.next();
            }
            Action::WatchlistAdd(symbol) => self.watchlist_add(symbol),
            Action::WatchlistRemove(symbol) => self.watchlist_remove(&symbol),

            // News
            Action::CycleSentimentFilter => self.news.cycle_filter(),

            // Data loading
            Action::Refresh => {
                self.app.loading = true;
            }
            Action::StocksLoaded(stocks) => {
                self.dashboard.stocks = stocks;
                self.dashboard.loading = false;
                self.dashboard.last_updated = Some(Utc::now());
                self.dashboard.cursor = 0;
                // A reload may shrink the listing under the current page.
                let total = self.dashboard.total_pages(self.page_size);
                self.dashboard.query.clamp(total);
            }
            Action::WatchlistLoaded(watchlist) => {
                self.dashboard.watchlist = watchlist;
                self.dashboard.watchlist.truncate(WATCHLIST_CAPACITY);
            }
            Action::SignalsLoaded(signals) => self.dashboard.signals = signals,
            Action::ScreenerLoaded(rows) => {
                self.screener.rows = rows;
                self.screener.loading = false;
                self.screener.last_updated = Some(Utc::now());
                self.screener.cursor = 0;
                let total = self.screener.total_pages(self.page_size);
                self.screener.query.clamp(total);
            }
            Action::NewsLoaded(items) => {
                self.news.items = items;
                self.news.loading = false;
                self.news.last_updated = Some(Utc::now());
                self.news.cursor = 0;
            }
            Action::DetailsLoaded(details) => {
                self.details.details = details;
                self.details.loading = false;
            }

            // UI
            Action::ToggleHelp => self.app.show_help = !self.app.show_help,
            Action::ShowNotification(notification) => {
                self.app.notification = Some(notification);
            }
            Action::DismissNotification => {
                self.app.notification = None;
            }
            Action::Tick => {
                let now = Utc::now();
                if self
                    .app
                    .notification
                    .as_ref()
                    .is_some_and(|n| n.is_expired(now))
                {
                    self.app.notification = None;
                }
            }

            // Error handling
            Action::SetError(error) => {
                self.app.error = Some(error);
                self.app.loading = false;
            }
            Action::ClearError => {
                self.app.error = None;
            }
            Action::SetLoading(loading) => {
                self.app.loading = loading;
            }

            // Quit
            Action::Quit => {
                self.app.should_quit = true;
            }
        }
    }

    fn set_view(&mut self, view: View) {
        // Leaving a half-typed search behind would desync buffer and query.
        if self.app.is_searching() {
            self.app.input_mode = InputMode::Normal;
        }
        self.app.current_view = view;
    }

    /// The search term of the active listing view.
    fn active_search(&self) -> &str {
        match self.app.current_view {
            View::Dashboard => self.dashboard.query.search(),
            View::Screener => self.screener.query.search(),
            _ => "",
        }
    }

    /// The current page of the active listing view.
    fn active_page(&self) -> usize {
        match self.app.current_view {
            View::Dashboard => self.dashboard.query.page(),
            View::Screener => self.screener.query.page(),
            _ => 1,
        }
    }

    /// Push the input buffer into the active view's query. Resets the page
    /// and cursor; selection is left alone.
    fn apply_search(&mut self) {
        let term = self.app.input_buffer.clone();
        match self.app.current_view {
            View::Dashboard => {
                self.dashboard.query.set_search(term);
                self.dashboard.cursor = 0;
            }
            View::Screener => {
                self.screener.query.set_search(term);
                self.screener.cursor = 0;
            }
            _ => {}
        }
    }

    /// Request a page on the active view. Out-of-range requests are
    /// silent no-ops.
    fn request_page(&mut self, page: usize) {
        match self.app.current_view {
            View::Dashboard => {
                let total = self.dashboard.total_pages(self.page_size);
                if self.dashboard.query.request_page(page, total) {
                    self.dashboard.cursor = 0;
                }
            }
            View::Screener => {
                let total = self.screener.total_pages(self.page_size);
                if self.screener.query.request_page(page, total) {
                    self.screener.cursor = 0;
                }
            }
            _ => {}
        }
    }

    /// Number of rows the cursor can move over in the active view.
    fn cursor_span(&self) -> usize {
        match self.app.current_view {
            View::Dashboard => self.dashboard.page(self.page_size).items.len(),
            View::Screener => self.screener.page(self.page_size).items.len(),
            View::News => self.news.filtered().len(),
            View::StockDetails => 0,
        }
    }

    fn scroll(&mut self, delta: i32) {
        let span = self.cursor_span();
        let cursor = match self.app.current_view {
            View::Dashboard => &mut self.dashboard.cursor,
            View::Screener => &mut self.screener.cursor,
            View::News => &mut self.news.cursor,
            View::StockDetails => return,
        };
        if span == 0 {
            *cursor = 0;
            return;
        }
        let next = (*cursor as i32 + delta).clamp(0, span as i32 - 1);
        *cursor = next as usize;
    }

    fn move_cursor_to(&mut self, position: usize) {
        let span = self.cursor_span();
        let clamped = position.min(span.saturating_sub(1));
        match self.app.current_view {
            View::Dashboard => self.dashboard.cursor = clamped,
            View::Screener => self.screener.cursor = clamped,
            View::News => self.news.cursor = clamped,
            View::StockDetails => {}
        }
    }

    /// Enter on a listing row: the dashboard selects, the screener hands
    /// the symbol off to the details view.
    fn select_under_cursor(&mut self) {
        match self.app.current_view {
            View::Dashboard => {
                if let Some(symbol) = self.dashboard.cursor_symbol(self.page_size) {
                    self.dashboard.selected = Some(symbol);
                }
            }
            View::Screener => {
                if let Some(symbol) = self.screener.cursor_symbol(self.page_size) {
                    self.reduce(Action::OpenDetails(symbol));
                }
            }
            _ => {}
        }
    }

    fn watchlist_add(&mut self, symbol: String) {
        if self.dashboard.is_watched(&symbol) {
            self.app.notification = Some(Notification::info(format!("{symbol} already watched")));
            return;
        }
        if self.dashboard.watchlist.len() >= WATCHLIST_CAPACITY {
            self.app.notification = Some(Notification::warning(format!(
                "Watchlist is full ({WATCHLIST_CAPACITY})"
            )));
            return;
        }
        self.app.notification = Some(Notification::success(format!("{symbol} added to watchlist")));
        self.dashboard.watchlist.push(symbol);
    }

    fn watchlist_remove(&mut self, symbol: &str) {
        let before = self.dashboard.watchlist.len();
        self.dashboard.watchlist.retain(|w| w != symbol);
        if self.dashboard.watchlist.len() < before {
            self.app.notification =
                Some(Notification::info(format!("{symbol} removed from watchlist")));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    fn sample_stocks() -> Vec<Stock> {
        vec![
            Stock::new("TCS", dec!(3925.25), dec!(-1.01)),
            Stock::new("TATASTEEL", dec!(126.35), dec!(2.1)),
            Stock::new("HCL", dec!(1598.40), dec!(-0.5)),
            Stock::new("ITC", dec!(412.85), dec!(3.15)),
            Stock::new("TATACAP", dec!(757.90), dec!(-1.5)),
            Stock::new("INFY", dec!(1652.10), dec!(0.65)),
            Stock::new("RELIANCE", dec!(2865.70), dec!(1.2)),
        ]
    }

    fn store() -> Store {
        let (tx, _rx) = mpsc::unbounded_channel();
        let mut store = Store::new(tx, 5);
        store.reduce(Action::StocksLoaded(sample_stocks()));
        store
    }

    fn type_search(store: &mut Store, term: &str) {
        store.reduce(Action::BeginSearch);
        for c in term.chars() {
            store.reduce(Action::SearchInput(c));
        }
        store.reduce(Action::SearchCommit);
    }

    #[test]
    fn dispatched_actions_arrive_on_the_channel() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let store = Store::new(tx, 5);
        store.dispatch(Action::Quit).unwrap();
        assert!(matches!(rx.try_recv(), Ok(Action::Quit)));
    }

    #[test]
    fn dispatch_on_a_closed_channel_is_a_channel_error() {
        let (tx, rx) = mpsc::unbounded_channel();
        drop(rx);
        let store = Store::new(tx, 5);
        let err = store.dispatch(Action::Quit).unwrap_err();
        assert!(matches!(err, crate::Error::Channel(_)));
    }

    #[test]
    fn typing_a_search_filters_and_resets_the_page() {
        let mut store = store();
        store.reduce(Action::NextPage);
        assert_eq!(store.dashboard.query.page(), 2);

        type_search(&mut store, "ta");
        let page = store.dashboard.page(store.page_size);
        let symbols: Vec<&str> = page.items.iter().map(|s| s.symbol.as_str()).collect();
        assert_eq!(symbols, vec!["TATASTEEL", "TATACAP"]);
        assert_eq!(page.total_pages, 1);
        assert_eq!(page.page, 1);
    }

    #[test]
    fn page_requests_outside_bounds_are_no_ops() {
        let mut store = store();
        store.reduce(Action::RequestPage(0));
        assert_eq!(store.dashboard.query.page(), 1);
        store.reduce(Action::RequestPage(3));
        assert_eq!(store.dashboard.query.page(), 1);
        store.reduce(Action::NextPage);
        assert_eq!(store.dashboard.query.page(), 2);
        store.reduce(Action::NextPage);
        assert_eq!(store.dashboard.query.page(), 2);
    }

    #[test]
    fn shrinking_reload_clamps_the_screener_page() {
        let (tx, _rx) = mpsc::unbounded_channel();
        let mut store = Store::new(tx, 5);
        let rows: Vec<ScreenerRow> = (0..6)
            .map(|i| ScreenerRow::new(format!("SYM{i}"), Signal::Hold, 50))
            .collect();
        store.reduce(Action::ScreenerLoaded(rows));
        store.reduce(Action::SetView(View::Screener));
        store.reduce(Action::NextPage);
        assert_eq!(store.screener.query.page(), 2);

        store.reduce(Action::ScreenerLoaded(vec![ScreenerRow::new(
            "SYM0",
            Signal::Hold,
            50,
        )]));
        assert_eq!(store.screener.query.page(), 1);
        assert_eq!(store.screener.page(store.page_size).items.len(), 1);
    }

    #[test]
    fn shrinking_reload_clamps_the_dashboard_page() {
        let mut store = store();
        store.reduce(Action::NextPage);
        assert_eq!(store.dashboard.query.page(), 2);

        store.reduce(Action::StocksLoaded(sample_stocks()[..3].to_vec()));
        assert_eq!(store.dashboard.query.page(), 1);
        assert_eq!(store.dashboard.query.search(), "");
    }

    #[test]
    fn selection_persists_across_search_and_page_changes() {
        let mut store = store();
        store.reduce(Action::ScrollDown);
        store.reduce(Action::Select);
        assert_eq!(store.dashboard.selected.as_deref(), Some("TATASTEEL"));

        type_search(&mut store, "zzz");
        assert!(store.dashboard.page(store.page_size).items.is_empty());
        assert_eq!(store.dashboard.selected.as_deref(), Some("TATASTEEL"));
    }

    #[test]
    fn cancelling_a_search_restores_the_previous_term() {
        let mut store = store();
        type_search(&mut store, "ta");
        store.reduce(Action::BeginSearch);
        store.reduce(Action::SearchInput('x'));
        assert_eq!(store.dashboard.query.search(), "tax");
        store.reduce(Action::SearchCancel);
        assert_eq!(store.dashboard.query.search(), "ta");
        assert_eq!(store.app.input_mode, InputMode::Normal);
    }

    #[test]
    fn screener_enter_hands_the_symbol_to_details() {
        let (tx, _rx) = mpsc::unbounded_channel();
        let mut store = Store::new(tx, 5);
        store.reduce(Action::ScreenerLoaded(vec![
            ScreenerRow::new("TCS", Signal::Buy, 82),
            ScreenerRow::new("RELIANCE", Signal::Buy, 88),
        ]));
        store.reduce(Action::SetView(View::Screener));
        store.reduce(Action::ScrollDown);
        store.reduce(Action::Select);
        assert_eq!(store.app.current_view, View::StockDetails);
        assert_eq!(store.details.symbol.as_deref(), Some("RELIANCE"));
        assert_eq!(store.screener.selected.as_deref(), Some("RELIANCE"));
    }

    #[test]
    fn scrolling_stays_inside_the_visible_page() {
        let mut store = store();
        for _ in 0..20 {
            store.reduce(Action::ScrollDown);
        }
        assert_eq!(store.dashboard.cursor, 4);
        store.reduce(Action::GoToTop);
        assert_eq!(store.dashboard.cursor, 0);
        store.reduce(Action::GoToBottom);
        assert_eq!(store.dashboard.cursor, 4);
    }

    #[test]
    fn watchlist_enforces_capacity_and_uniqueness() {
        let mut store = store();
        store.reduce(Action::WatchlistAdd("TCS".into()));
        assert_eq!(store.dashboard.watchlist, vec!["TCS"]);

        store.reduce(Action::WatchlistAdd("TCS".into()));
        assert_eq!(store.dashboard.watchlist.len(), 1);

        for i in 0..WATCHLIST_CAPACITY {
            store.reduce(Action::WatchlistAdd(format!("SYM{i}")));
        }
        assert_eq!(store.dashboard.watchlist.len(), WATCHLIST_CAPACITY);
        assert_eq!(
            store.app.notification.as_ref().map(|n| n.level),
            Some(NotificationLevel::Warning)
        );

        store.reduce(Action::WatchlistRemove("TCS".into()));
        assert!(!store.dashboard.is_watched("TCS"));
    }

    #[test]
    fn sentiment_filter_cycles_and_narrows() {
        let (tx, _rx) = mpsc::unbounded_channel();
        let mut store = Store::new(tx, 5);
        store.reduce(Action::NewsLoaded(vec![
            NewsItem::new("a", "s", Utc::now(), Sentiment::Positive),
            NewsItem::new("b", "s", Utc::now(), Sentiment::Negative),
        ]));
        store.reduce(Action::SetView(View::News));
        assert_eq!(store.news.filtered().len(), 2);
        store.reduce(Action::CycleSentimentFilter);
        assert_eq!(store.news.filter, Some(Sentiment::Positive));
        assert_eq!(store.news.filtered().len(), 1);
    }

    #[test]
    fn expired_notifications_are_pruned_on_tick() {
        let mut store = store();
        let mut stale = Notification::info("old");
        stale.expires_at = Utc::now() - chrono::Duration::seconds(1);
        store.reduce(Action::ShowNotification(stale));
        store.reduce(Action::Tick);
        assert!(store.app.notification.is_none());
    }

    #[test]
    fn switching_views_leaves_search_mode() {
        let mut store = store();
        store.reduce(Action::BeginSearch);
        assert!(store.app.is_searching());
        store.reduce(Action::NextView);
        assert!(!store.app.is_searching());
        assert_eq!(store.app.current_view, View::Screener);
    }
}
