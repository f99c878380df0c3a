//! Application-level state.

use super::Notification;

/// The current view/screen, one per dashboard page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Dashboard,
    Screener,
    StockDetails,
    News,
}

impl View {
    pub const ALL: [View; 4] = [
        Self::Dashboard,
        Self::Screener,
        Self::StockDetails,
        Self::News,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            Self::Dashboard => "Dashboard",
            Self::Screener => "Screener",
            Self::StockDetails => "Stock Details",
            Self::News => "News",
        }
    }

    pub fn next(&self) -> Self {
        match self {
            Self::Dashboard => Self::Screener,
            Self::Screener => Self::StockDetails,
            Self::StockDetails => Self::News,
            Self::News => Self::Dashboard,
        }
    }

    pub fn prev(&self) -> Self {
        match self {
            Self::Dashboard => Self::News,
            Self::Screener => Self::Dashboard,
            Self::StockDetails => Self::Screener,
            Self::News => Self::StockDetails,
        }
    }

    /// Whether the view carries a searchable, paginated listing.
    pub fn has_listing(&self) -> bool {
        matches!(self, Self::Dashboard | Self::Screener)
    }
}

/// Input mode for the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    #[default]
    Normal,
    Search,
}

/// Global application state.
#[derive(Debug, Default)]
pub struct AppState {
    /// Current view.
    pub current_view: View,
    /// Current input mode.
    pub input_mode: InputMode,
    /// Whether to show the help overlay.
    pub show_help: bool,
    /// Current notification.
    pub notification: Option<Notification>,
    /// Current error message.
    pub error: Option<String>,
    /// Whether the app is loading data.
    pub loading: bool,
    /// Whether the app should quit.
    pub should_quit: bool,
    /// Live search input.
    pub input_buffer: String,
    /// Cursor position in the input buffer, in characters.
    pub cursor_position: usize,
    /// Search term to restore when a search is cancelled.
    pub search_restore: String,
}

impl AppState {
    pub fn is_searching(&self) -> bool {
        self.input_mode == InputMode::Search
    }

    /// Seed the input buffer when entering search mode, remembering the
    /// term to restore on cancel.
    pub fn begin_search(&mut self, current: &str) {
        self.search_restore = current.to_string();
        self.input_buffer = current.to_string();
        self.cursor_position = self.input_buffer.chars().count();
        self.input_mode = InputMode::Search;
    }

    /// Add a character to the input buffer at the cursor.
    pub fn push_char(&mut self, c: char) {
        let byte_idx = self
            .input_buffer
            .char_indices()
            .nth(self.cursor_position)
            .map(|(i, _)| i)
            .unwrap_or(self.input_buffer.len());
        self.input_buffer.insert(byte_idx, c);
        self.cursor_position += 1;
    }

    /// Remove the character before the cursor.
    pub fn pop_char(&mut self) {
        if self.cursor_position > 0 {
            self.cursor_position -= 1;
            let byte_idx = self
                .input_buffer
                .char_indices()
                .nth(self.cursor_position)
                .map(|(i, _)| i)
                .unwrap_or(self.input_buffer.len());
            self.input_buffer.remove(byte_idx);
        }
    }

    pub fn cursor_left(&mut self) {
        self.cursor_position = self.cursor_position.saturating_sub(1);
    }

    pub fn cursor_right(&mut self) {
        if self.cursor_position < self.input_buffer.chars().count() {
            self.cursor_position += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn tab_order_wraps_in_both_directions() {
        let mut view = View::Dashboard;
        for _ in 0..View::ALL.len() {
            view = view.next();
        }
        assert_eq!(view, View::Dashboard);
        assert_eq!(View::Dashboard.prev(), View::News);
    }

    #[test]
    fn begin_search_seeds_and_remembers_the_current_term() {
        let mut state = AppState::default();
        state.begin_search("tcs");
        assert!(state.is_searching());
        assert_eq!(state.input_buffer, "tcs");
        assert_eq!(state.search_restore, "tcs");
        assert_eq!(state.cursor_position, 3);
    }

    #[test]
    fn buffer_edits_respect_the_cursor() {
        let mut state = AppState::default();
        state.begin_search("tc");
        state.cursor_left();
        state.push_char('x');
        assert_eq!(state.input_buffer, "txc");
        state.pop_char();
        assert_eq!(state.input_buffer, "tc");
    }
}
