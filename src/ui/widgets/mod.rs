//! TUI widgets.

mod chart;
mod details;
mod help;
mod news_list;
mod notifications;
mod pagination;
mod screener_table;
mod search_bar;
mod status_bar;
mod stock_table;
mod tab_bar;
mod watchlist;

pub use chart::ChartPanel;
pub use details::DetailsPanel;
pub use help::HelpPanel;
pub use news_list::NewsList;
pub use notifications::{render_error, render_notification};
pub use screener_table::ScreenerTable;
pub use search_bar::SearchBar;
pub use status_bar::StatusBar;
pub use stock_table::StockTable;
pub use tab_bar::TabBar;
pub use watchlist::Watchlist;

use crate::state::{Sentiment, Signal, Trend};
use ratatui::style::Color;

pub(crate) fn signal_color(signal: Signal) -> Color {
    match signal {
        Signal::Buy => Color::Green,
        Signal::Hold => Color::Yellow,
        Signal::Sell => Color::Red,
    }
}

pub(crate) fn sentiment_color(sentiment: Sentiment) -> Color {
    match sentiment {
        Sentiment::Positive => Color::Green,
        Sentiment::Neutral => Color::Yellow,
        Sentiment::Negative => Color::Red,
    }
}

pub(crate) fn trend_color(trend: Trend) -> Color {
    match trend {
        Trend::Up => Color::Green,
        Trend::Down => Color::Red,
    }
}
