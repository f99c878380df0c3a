//! Dashboard state: the searchable stock listing, watchlist, and chart
//! selection.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::SignalSet;
use super::filter::{self, Keyed, ListingQuery, PageResult};

/// Maximum number of symbols the watchlist accepts.
pub const WATCHLIST_CAPACITY: usize = 50;

/// Price direction derived from the day's change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trend {
    Up,
    Down,
}

impl Trend {
    /// A non-negative change counts as up.
    pub fn from_change(change_pct: Decimal) -> Self {
        if change_pct.is_sign_negative() && !change_pct.is_zero() {
            Self::Down
        } else {
            Self::Up
        }
    }

    pub fn arrow(&self) -> &'static str {
        match self {
            Self::Up => "▲",
            Self::Down => "▼",
        }
    }
}

/// A tradable instrument in the listing.
///
/// Price, change, and any attached labels are opaque display data; nothing
/// in this crate derives them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stock {
    /// Ticker symbol, unique within a listing.
    pub symbol: String,
    /// Last traded price.
    pub price: Decimal,
    /// Day change in percent.
    pub change_pct: Decimal,
}

impl Stock {
    pub fn new(symbol: impl Into<String>, price: Decimal, change_pct: Decimal) -> Self {
        Self {
            symbol: symbol.into(),
            price,
            change_pct,
        }
    }

    pub fn trend(&self) -> Trend {
        Trend::from_change(self.change_pct)
    }

    /// Signed change for display, e.g. "+2.10%" or "-1.01%".
    pub fn change_label(&self) -> String {
        let sign = if self.trend() == Trend::Up { "+" } else { "" };
        format!("{}{:.2}%", sign, self.change_pct)
    }
}

impl Keyed for Stock {
    fn key(&self) -> &str {
        &self.symbol
    }
}

/// Chart timeframe selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Timeframe {
    M5,
    M15,
    #[default]
    D1,
    W1,
}

impl Timeframe {
    pub const ALL: [Timeframe; 4] = [Self::M5, Self::M15, Self::D1, Self::W1];

    pub fn label(&self) -> &'static str {
        match self {
            Self::M5 => "5m",
            Self::M15 => "15m",
            Self::D1 => "1D",
            Self::W1 => "1W",
        }
    }

    pub fn next(&self) -> Self {
        match self {
            Self::M5 => Self::M15,
            Self::M15 => Self::D1,
            Self::D1 => Self::W1,
            Self::W1 => Self::M5,
        }
    }
}

/// State for the dashboard view.
#[derive(Debug, Default)]
pub struct DashboardState {
    /// The full listing, immutable for the session once loaded.
    pub stocks: Vec<Stock>,
    /// Search term and current page.
    pub query: ListingQuery,
    /// Highlighted row within the visible page.
    pub cursor: usize,
    /// Selected symbol. Independent of filtering and paging: it persists
    /// across query changes and may fall outside the visible page.
    pub selected: Option<String>,
    /// Watched symbols, capped at [`WATCHLIST_CAPACITY`].
    pub watchlist: Vec<String>,
    /// Active chart timeframe.
    pub timeframe: Timeframe,
    /// Precomputed signal badges shown under the chart.
    pub signals: SignalSet,
    /// Whether the listing is currently loading.
    pub loading: bool,
    /// Last load timestamp.
    pub last_updated: Option<DateTime<Utc>>,
}

impl DashboardState {
    /// The listing narrowed by the current search term.
    pub fn filtered(&self) -> Vec<&Stock> {
        filter::filter_by_key(&self.stocks, self.query.search())
    }

    /// The visible page of the filtered listing.
    pub fn page(&self, page_size: usize) -> PageResult<'_, Stock> {
        filter::paginate(self.filtered(), &self.query, page_size)
    }

    pub fn total_pages(&self, page_size: usize) -> usize {
        filter::total_pages(self.filtered().len(), page_size)
    }

    /// Look up a stock by symbol in the full listing, ignoring the filter.
    pub fn stock(&self, symbol: &str) -> Option<&Stock> {
        self.stocks.iter().find(|s| s.symbol == symbol)
    }

    /// The selected stock, falling back to the first listed one.
    pub fn selected_stock(&self) -> Option<&Stock> {
        self.selected
            .as_deref()
            .and_then(|symbol| self.stock(symbol))
            .or_else(|| self.stocks.first())
    }

    /// The symbol under the cursor on the visible page.
    pub fn cursor_symbol(&self, page_size: usize) -> Option<String> {
        self.page(page_size)
            .items
            .get(self.cursor)
            .map(|s| s.symbol.clone())
    }

    pub fn is_watched(&self, symbol: &str) -> bool {
        self.watchlist.iter().any(|w| w == symbol)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    fn listing() -> Vec<Stock> {
        vec![
            Stock::new("TCS", dec!(3925.25), dec!(-1.01)),
            Stock::new("TATASTEEL", dec!(126.35), dec!(2.1)),
            Stock::new("INFY", dec!(1652.10), dec!(0.65)),
        ]
    }

    #[test]
    fn trend_treats_zero_as_up() {
        assert_eq!(Trend::from_change(dec!(0)), Trend::Up);
        assert_eq!(Trend::from_change(dec!(0.65)), Trend::Up);
        assert_eq!(Trend::from_change(dec!(-1.5)), Trend::Down);
    }

    #[test]
    fn change_label_carries_the_sign() {
        let stocks = listing();
        assert_eq!(stocks[0].change_label(), "-1.01%");
        assert_eq!(stocks[1].change_label(), "+2.10%");
    }

    #[test]
    fn selection_survives_a_narrowing_filter() {
        let mut state = DashboardState {
            stocks: listing(),
            ..Default::default()
        };
        state.selected = Some("INFY".to_string());
        state.query.set_search("ta");
        // INFY is filtered out of view but stays selected.
        assert!(!state.filtered().iter().any(|s| s.symbol == "INFY"));
        assert_eq!(state.selected_stock().unwrap().symbol, "INFY");
    }

    #[test]
    fn selected_stock_falls_back_to_first_listing_entry() {
        let state = DashboardState {
            stocks: listing(),
            ..Default::default()
        };
        assert_eq!(state.selected_stock().unwrap().symbol, "TCS");
    }

    #[test]
    fn timeframe_cycles_through_all_frames() {
        let mut frame = Timeframe::M5;
        for _ in 0..Timeframe::ALL.len() {
            frame = frame.next();
        }
        assert_eq!(frame, Timeframe::M5);
    }
}
