//! Data providers.
//!
//! Views never talk to a data source directly: the app pulls listings
//! through the [`MarketData`] trait and dispatches `*Loaded` actions, so a
//! real feed could replace the bundled sample data without touching any
//! filter or view logic.

mod sample;

pub use sample::SampleData;

use crate::error::Result;
use crate::state::{NewsItem, ScreenerRow, SignalSet, Stock, StockDetails};

use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;

/// A source of market display data.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait MarketData: Send + Sync {
    /// The full stock listing, in display order.
    async fn list_stocks(&self) -> Result<Vec<Stock>>;

    /// The default watchlist symbols.
    async fn watchlist(&self) -> Result<Vec<String>>;

    /// Precomputed signal badges for the dashboard chart.
    async fn signals(&self) -> Result<SignalSet>;

    /// Screener result rows, in display order.
    async fn screener_rows(&self) -> Result<Vec<ScreenerRow>>;

    /// Market headlines, newest first.
    async fn latest_news(&self) -> Result<Vec<NewsItem>>;

    /// Details payload for one symbol.
    async fn stock_details(&self, symbol: &str) -> Result<StockDetails>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{Action, Store};
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;
    use tokio::sync::mpsc;

    #[tokio::test]
    async fn a_substituted_provider_feeds_the_store_untouched() {
        let mut provider = MockMarketData::new();
        provider.expect_list_stocks().returning(|| {
            Ok(vec![
                Stock::new("ACME", dec!(101.50), dec!(0.4)),
                Stock::new("ACMEX", dec!(12.00), dec!(-2.2)),
            ])
        });

        let stocks = provider.list_stocks().await.unwrap();
        let (tx, _rx) = mpsc::unbounded_channel();
        let mut store = Store::new(tx, 5);
        store.reduce(Action::StocksLoaded(stocks));

        // The filter core works the same over any provider's listing.
        let page = store.dashboard.page(store.page_size);
        assert_eq!(page.total_items, 2);
        assert_eq!(page.items[0].symbol, "ACME");
    }

    #[tokio::test]
    async fn provider_failures_surface_as_data_source_errors() {
        let mut provider = MockMarketData::new();
        provider
            .expect_latest_news()
            .returning(|| Err(crate::Error::data_source("feed offline")));

        let err = provider.latest_news().await.unwrap_err();
        assert_eq!(err.to_string(), "Data source error: feed offline");
    }
}
