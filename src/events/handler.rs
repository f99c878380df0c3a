//! Event handler turning terminal input into actions.

use crate::config::KeyBindings;
use crate::error::Result;
use crate::state::{Action, InputMode, Store, View};
use crossterm::event::{
    self, Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind, MouseEvent, MouseEventKind,
};
use std::time::Duration;
use tokio::sync::mpsc;

/// Handles input events and produces actions.
pub struct EventHandler {
    /// Action sender (for future async dispatch).
    #[allow(dead_code)]
    action_tx: mpsc::UnboundedSender<Action>,
    /// Key bindings.
    keybindings: KeyBindings,
    /// Poll timeout; doubles as the UI tick rate.
    poll_timeout: Duration,
    /// Store snapshot for mode and view aware handling.
    store_snapshot: Option<StoreSnapshot>,
}

/// Snapshot of relevant store state for event handling.
#[derive(Clone)]
struct StoreSnapshot {
    input_mode: InputMode,
    current_view: View,
    cursor_symbol: Option<String>,
    has_error: bool,
    has_notification: bool,
}

impl EventHandler {
    /// Create a new event handler.
    pub fn new(
        action_tx: mpsc::UnboundedSender<Action>,
        keybindings: KeyBindings,
        poll_timeout: Duration,
    ) -> Self {
        Self {
            action_tx,
            keybindings,
            poll_timeout,
            store_snapshot: None,
        }
    }

    /// Update the store snapshot.
    pub fn update_store_snapshot(&mut self, store: &Store) {
        let cursor_symbol = match store.app.current_view {
            View::Dashboard => store.dashboard.cursor_symbol(store.page_size),
            View::Screener => store.screener.cursor_symbol(store.page_size),
            _ => None,
        };
        self.store_snapshot = Some(StoreSnapshot {
            input_mode: store.app.input_mode,
            current_view: store.app.current_view,
            cursor_symbol,
            has_error: store.app.error.is_some(),
            has_notification: store.app.notification.is_some(),
        });
    }

    /// Get the next action from user input. Returns `Action::Tick` when
    /// the poll times out so the store can expire notifications.
    pub async fn next(&mut self) -> Result<Option<Action>> {
        if event::poll(self.poll_timeout)? {
            let event = event::read()?;
            match event {
                CrosstermEvent::Key(key) => {
                    if let Some(action) = self.handle_key(key) {
                        return Ok(Some(action));
                    }
                }
                CrosstermEvent::Mouse(mouse) => {
                    if let Some(action) = self.handle_mouse(mouse) {
                        return Ok(Some(action));
                    }
                }
                CrosstermEvent::Resize(_, _) => {
                    // Terminal will redraw on the next frame
                }
                _ => {}
            }
            Ok(None)
        } else {
            Ok(Some(Action::Tick))
        }
    }

    fn handle_key(&self, key: KeyEvent) -> Option<Action> {
        // Only process key press events
        if key.kind != KeyEventKind::Press {
            return None;
        }

        let snapshot = self.store_snapshot.as_ref()?;

        match snapshot.input_mode {
            InputMode::Normal => self.handle_normal_mode(key, snapshot),
            InputMode::Search => Self::handle_search_mode(key),
        }
    }

    fn handle_mouse(&self, mouse: MouseEvent) -> Option<Action> {
        match mouse.kind {
            MouseEventKind::ScrollUp => Some(Action::ScrollUp),
            MouseEventKind::ScrollDown => Some(Action::ScrollDown),
            _ => None,
        }
    }

    fn handle_normal_mode(&self, key: KeyEvent, snapshot: &StoreSnapshot) -> Option<Action> {
        let input = super::InputEvent::from(key);

        // Global shortcuts
        if input.matches(&self.keybindings.quit) || input.matches("Ctrl+c") {
            return Some(Action::Quit);
        }
        if input.matches(&self.keybindings.help) {
            return Some(Action::ToggleHelp);
        }
        if input.matches(&self.keybindings.refresh) {
            return Some(Action::Refresh);
        }

        // Esc dismisses transient chrome before acting as back
        if input.matches(&self.keybindings.back) {
            if snapshot.has_error {
                return Some(Action::ClearError);
            }
            if snapshot.has_notification {
                return Some(Action::DismissNotification);
            }
            if snapshot.current_view == View::StockDetails {
                return Some(Action::SetView(View::Screener));
            }
            return None;
        }

        // View switching
        if input.matches(&self.keybindings.dashboard) {
            return Some(Action::SetView(View::Dashboard));
        }
        if input.matches(&self.keybindings.screener) {
            return Some(Action::SetView(View::Screener));
        }
        if input.matches(&self.keybindings.details) {
            return Some(Action::SetView(View::StockDetails));
        }
        if input.matches(&self.keybindings.news) {
            return Some(Action::SetView(View::News));
        }
        if key.code == KeyCode::Tab {
            return Some(Action::NextView);
        }
        if key.code == KeyCode::BackTab {
            return Some(Action::PrevView);
        }

        // Search applies to the listing views
        if input.matches(&self.keybindings.search) && snapshot.current_view.has_listing() {
            return Some(Action::BeginSearch);
        }

        // Cursor movement
        if input.matches(&self.keybindings.up) || key.code == KeyCode::Up {
            return Some(Action::ScrollUp);
        }
        if input.matches(&self.keybindings.down) || key.code == KeyCode::Down {
            return Some(Action::ScrollDown);
        }
        // The matcher is case-insensitive for characters, so g/G are
        // distinguished on the raw key code.
        if key.code == KeyCode::Home || key.code == KeyCode::Char('g') {
            return Some(Action::GoToTop);
        }
        if key.code == KeyCode::End || key.code == KeyCode::Char('G') {
            return Some(Action::GoToBottom);
        }

        // Page navigation
        if input.matches(&self.keybindings.page_prev) || key.code == KeyCode::PageUp {
            return Some(Action::PrevPage);
        }
        if input.matches(&self.keybindings.page_next) || key.code == KeyCode::PageDown {
            return Some(Action::NextPage);
        }

        if input.matches(&self.keybindings.select) {
            return Some(Action::Select);
        }

        // View-specific actions
        match snapshot.current_view {
            View::Dashboard => self.handle_dashboard_view(&input, snapshot),
            View::News => self.handle_news_view(&input),
            View::Screener | View::StockDetails => None,
        }
    }

    fn handle_dashboard_view(
        &self,
        input: &super::InputEvent,
        snapshot: &StoreSnapshot,
    ) -> Option<Action> {
        if input.matches(&self.keybindings.timeframe) {
            return Some(Action::CycleTimeframe);
        }
        if input.matches(&self.keybindings.watch) {
            return snapshot.cursor_symbol.clone().map(Action::WatchlistAdd);
        }
        if input.matches(&self.keybindings.unwatch) {
            return snapshot.cursor_symbol.clone().map(Action::WatchlistRemove);
        }
        None
    }

    fn handle_news_view(&self, input: &super::InputEvent) -> Option<Action> {
        if input.matches(&self.keybindings.sentiment) {
            return Some(Action::CycleSentimentFilter);
        }
        None
    }

    fn handle_search_mode(key: KeyEvent) -> Option<Action> {
        match key.code {
            KeyCode::Esc => Some(Action::SearchCancel),
            KeyCode::Enter => Some(Action::SearchCommit),
            KeyCode::Backspace => Some(Action::SearchBackspace),
            KeyCode::Left => Some(Action::SearchCursorLeft),
            KeyCode::Right => Some(Action::SearchCursorRight),
            KeyCode::Char(c) => Some(Action::SearchInput(c)),
            _ => None,
        }
    }
}
