//! Screener state: rule-based signal results with the shared search and
//! pagination behavior.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::filter::{self, Keyed, ListingQuery, PageResult};

/// A precomputed trading signal label. Opaque display data; never derived
/// here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Signal {
    Buy,
    #[default]
    Hold,
    Sell,
}

impl std::fmt::Display for Signal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Buy => write!(f, "BUY"),
            Self::Hold => write!(f, "HOLD"),
            Self::Sell => write!(f, "SELL"),
        }
    }
}

/// One screener result row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScreenerRow {
    /// Ticker symbol, unique within the results.
    pub symbol: String,
    /// Rule-based signal for the symbol.
    pub signal: Signal,
    /// Composite score, 0-100.
    pub score: u8,
}

impl ScreenerRow {
    pub fn new(symbol: impl Into<String>, signal: Signal, score: u8) -> Self {
        Self {
            symbol: symbol.into(),
            signal,
            score,
        }
    }
}

impl Keyed for ScreenerRow {
    fn key(&self) -> &str {
        &self.symbol
    }
}

/// State for the screener view.
#[derive(Debug, Default)]
pub struct ScreenerState {
    /// All screener rows, in score order as provided.
    pub rows: Vec<ScreenerRow>,
    /// Search term and current page.
    pub query: ListingQuery,
    /// Highlighted row within the visible page.
    pub cursor: usize,
    /// Selected symbol, independent of the filter like the dashboard's.
    pub selected: Option<String>,
    /// Whether the rows are currently loading.
    pub loading: bool,
    /// Last load timestamp.
    pub last_updated: Option<DateTime<Utc>>,
}

impl ScreenerState {
    /// The rows narrowed by the current search term.
    pub fn filtered(&self) -> Vec<&ScreenerRow> {
        filter::filter_by_key(&self.rows, self.query.search())
    }

    /// The visible page of the filtered rows.
    pub fn page(&self, page_size: usize) -> PageResult<'_, ScreenerRow> {
        filter::paginate(self.filtered(), &self.query, page_size)
    }

    pub fn total_pages(&self, page_size: usize) -> usize {
        filter::total_pages(self.filtered().len(), page_size)
    }

    /// The symbol under the cursor on the visible page.
    pub fn cursor_symbol(&self, page_size: usize) -> Option<String> {
        self.page(page_size)
            .items
            .get(self.cursor)
            .map(|r| r.symbol.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn rows() -> Vec<ScreenerRow> {
        vec![
            ScreenerRow::new("TCS", Signal::Buy, 82),
            ScreenerRow::new("TATASTEEL", Signal::Hold, 56),
            ScreenerRow::new("ITC", Signal::Sell, 38),
            ScreenerRow::new("RELIANCE", Signal::Buy, 88),
        ]
    }

    #[test]
    fn signal_labels_match_the_badges() {
        assert_eq!(Signal::Buy.to_string(), "BUY");
        assert_eq!(Signal::Hold.to_string(), "HOLD");
        assert_eq!(Signal::Sell.to_string(), "SELL");
    }

    #[test]
    fn screener_shares_the_filter_semantics() {
        let state = ScreenerState {
            rows: rows(),
            ..Default::default()
        };
        let filtered: Vec<&str> = state.filtered().iter().map(|r| r.symbol.as_str()).collect();
        assert_eq!(filtered, vec!["TCS", "TATASTEEL", "ITC", "RELIANCE"]);

        let mut narrowed = state;
        narrowed.query.set_search("t");
        let filtered: Vec<&str> = narrowed
            .filtered()
            .iter()
            .map(|r| r.symbol.as_str())
            .collect();
        assert_eq!(filtered, vec!["TCS", "TATASTEEL", "ITC"]);
    }

    #[test]
    fn cursor_symbol_reads_from_the_visible_page() {
        let mut state = ScreenerState {
            rows: rows(),
            ..Default::default()
        };
        state.cursor = 1;
        assert_eq!(state.cursor_symbol(2), Some("TATASTEEL".to_string()));
        assert!(state.query.request_page(2, state.total_pages(2)));
        state.cursor = 0;
        assert_eq!(state.cursor_symbol(2), Some("ITC".to_string()));
    }
}
