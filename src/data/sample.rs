//! Bundled sample data.
//!
//! Every price, signal, score, indicator value, and headline here is a
//! literal constant; none of it is computed.

use super::MarketData;
use crate::error::Result;
use crate::state::{
    Indicator, NewsItem, ScreenerRow, Sentiment, Signal, SignalEntry, SignalSet, Stock,
    StockDetails,
};

use async_trait::async_trait;
use chrono::{Duration, Utc};
use rust_decimal_macros::dec;

/// Provider backed by in-memory sample arrays.
#[derive(Debug, Default, Clone, Copy)]
pub struct SampleData;

#[async_trait]
impl MarketData for SampleData {
    async fn list_stocks(&self) -> Result<Vec<Stock>> {
        Ok(vec![
            Stock::new("TCS", dec!(3925.25), dec!(-1.01)),
            Stock::new("TATASTEEL", dec!(126.35), dec!(2.1)),
            Stock::new("HCL", dec!(1598.40), dec!(-0.5)),
            Stock::new("ITC", dec!(412.85), dec!(3.15)),
            Stock::new("TATACAP", dec!(757.90), dec!(-1.5)),
            Stock::new("INFY", dec!(1652.10), dec!(0.65)),
            Stock::new("RELIANCE", dec!(2865.70), dec!(1.2)),
        ])
    }

    async fn watchlist(&self) -> Result<Vec<String>> {
        Ok(["TCS", "INFY", "RELIANCE", "HDFCBANK"]
            .into_iter()
            .map(String::from)
            .collect())
    }

    async fn signals(&self) -> Result<SignalSet> {
        Ok(SignalSet {
            intraday: SignalEntry::new(Signal::Buy, 83),
            swing: SignalEntry::new(Signal::Hold, 56),
            delivery: SignalEntry::new(Signal::Buy, 78),
        })
    }

    async fn screener_rows(&self) -> Result<Vec<ScreenerRow>> {
        Ok(vec![
            ScreenerRow::new("TCS", Signal::Buy, 82),
            ScreenerRow::new("TATASTEEL", Signal::Hold, 56),
            ScreenerRow::new("HCL", Signal::Buy, 71),
            ScreenerRow::new("ITC", Signal::Sell, 38),
            ScreenerRow::new("INFY", Signal::Hold, 60),
            ScreenerRow::new("RELIANCE", Signal::Buy, 88),
        ])
    }

    async fn latest_news(&self) -> Result<Vec<NewsItem>> {
        let now = Utc::now();
        Ok(vec![
            NewsItem::new(
                "Company posts record quarterly profit",
                "Business Standard",
                now - Duration::hours(2),
                Sentiment::Positive,
            ),
            NewsItem::new(
                "Brokerage keeps neutral outlook on sector",
                "Economic Times",
                now - Duration::hours(5),
                Sentiment::Neutral,
            ),
            NewsItem::new(
                "Regulatory update may impact margins",
                "Mint",
                now - Duration::days(1),
                Sentiment::Negative,
            ),
            NewsItem::new(
                "Order wins strengthen revenue visibility",
                "Moneycontrol",
                now - Duration::days(1),
                Sentiment::Positive,
            ),
        ])
    }

    async fn stock_details(&self, _symbol: &str) -> Result<StockDetails> {
        let now = Utc::now();
        Ok(StockDetails {
            indicators: vec![
                Indicator::new("RSI", "62"),
                Indicator::new("MACD", "1.24"),
                Indicator::new("VWAP", "2,045"),
                Indicator::new("EMA 50", "2,010"),
                Indicator::new("EMA 200", "1,920"),
                Indicator::new("Support / Resistance", "1,980 / 2,110"),
            ],
            explanation: vec![
                "Price above VWAP and EMA 50 -> bullish momentum.".to_string(),
                "RSI in 55-70 range -> strength without overbought risk.".to_string(),
                "Support zone respected near 1,980.".to_string(),
                "News sentiment mostly positive.".to_string(),
            ],
            signals: self.signals().await?,
            news: vec![
                NewsItem::new(
                    "Company posts record quarterly profit",
                    "Business Standard",
                    now - Duration::hours(2),
                    Sentiment::Positive,
                ),
                NewsItem::new(
                    "Brokerage maintains neutral outlook",
                    "Economic Times",
                    now - Duration::hours(6),
                    Sentiment::Neutral,
                ),
                NewsItem::new(
                    "Regulatory update may impact margins",
                    "Mint",
                    now - Duration::days(1),
                    Sentiment::Negative,
                ),
            ],
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[tokio::test]
    async fn listing_is_stable_and_ordered() {
        let provider = SampleData;
        let first = provider.list_stocks().await.unwrap();
        let second = provider.list_stocks().await.unwrap();
        assert_eq!(first, second);
        assert_eq!(first.len(), 7);
        assert_eq!(first[0].symbol, "TCS");
        assert_eq!(first[6].symbol, "RELIANCE");
    }

    #[tokio::test]
    async fn screener_scores_stay_in_range() {
        let rows = SampleData.screener_rows().await.unwrap();
        assert!(rows.iter().all(|r| r.score <= 100));
    }

    #[tokio::test]
    async fn details_carry_the_indicator_grid() {
        let details = SampleData.stock_details("RELIANCE").await.unwrap();
        assert_eq!(details.indicators.len(), 6);
        assert_eq!(details.indicators[0].label, "RSI");
        assert_eq!(details.signals.intraday.confidence, 83);
        assert_eq!(details.news.len(), 3);
    }
}
