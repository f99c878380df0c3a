//! Stock details state: indicator cards, signal badges, and the
//! per-stock news panel.

use serde::{Deserialize, Serialize};

use super::news_state::NewsItem;
use super::screener_state::Signal;

/// A named indicator value, e.g. "RSI" -> "62". Values are display
/// strings; nothing is computed from them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Indicator {
    pub label: String,
    pub value: String,
}

impl Indicator {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

/// A signal with its confidence percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SignalEntry {
    pub signal: Signal,
    pub confidence: u8,
}

impl SignalEntry {
    pub fn new(signal: Signal, confidence: u8) -> Self {
        Self { signal, confidence }
    }
}

/// The three precomputed signal badges shown on the dashboard chart and
/// the details page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SignalSet {
    pub intraday: SignalEntry,
    pub swing: SignalEntry,
    pub delivery: SignalEntry,
}

impl SignalSet {
    /// Badge rows in display order.
    pub fn badges(&self) -> [(&'static str, SignalEntry); 3] {
        [
            ("Intraday", self.intraday),
            ("Swing", self.swing),
            ("Delivery", self.delivery),
        ]
    }
}

/// Display payload for one stock's details page.
#[derive(Debug, Clone, Default)]
pub struct StockDetails {
    pub indicators: Vec<Indicator>,
    pub explanation: Vec<String>,
    pub signals: SignalSet,
    pub news: Vec<NewsItem>,
}

/// State for the stock details view.
#[derive(Debug, Default)]
pub struct DetailsState {
    /// Symbol handed off from the screener or dashboard, if any.
    pub symbol: Option<String>,
    /// Loaded details payload.
    pub details: StockDetails,
    /// Whether details are currently loading.
    pub loading: bool,
}

impl DetailsState {
    /// The overall headline sentiment: the tag carried by the most items,
    /// ties resolved toward Neutral.
    pub fn dominant_sentiment(&self) -> super::Sentiment {
        use super::Sentiment;
        let mut counts = [0usize; 3];
        for item in &self.details.news {
            let slot = match item.sentiment {
                Sentiment::Positive => 0,
                Sentiment::Neutral => 1,
                Sentiment::Negative => 2,
            };
            counts[slot] += 1;
        }
        if counts[0] > counts[1] && counts[0] > counts[2] {
            Sentiment::Positive
        } else if counts[2] > counts[1] && counts[2] > counts[0] {
            Sentiment::Negative
        } else {
            Sentiment::Neutral
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Sentiment;
    use chrono::Utc;
    use pretty_assertions::assert_eq;

    fn news(sentiments: &[Sentiment]) -> Vec<NewsItem> {
        sentiments
            .iter()
            .enumerate()
            .map(|(i, s)| NewsItem::new(format!("headline {i}"), "wire", Utc::now(), *s))
            .collect()
    }

    #[test]
    fn dominant_sentiment_takes_the_majority() {
        let mut state = DetailsState::default();
        state.details.news = news(&[Sentiment::Positive, Sentiment::Positive, Sentiment::Negative]);
        assert_eq!(state.dominant_sentiment(), Sentiment::Positive);
    }

    #[test]
    fn dominant_sentiment_ties_go_neutral() {
        let mut state = DetailsState::default();
        state.details.news = news(&[Sentiment::Positive, Sentiment::Negative]);
        assert_eq!(state.dominant_sentiment(), Sentiment::Neutral);

        let empty = DetailsState::default();
        assert_eq!(empty.dominant_sentiment(), Sentiment::Neutral);
    }

    #[test]
    fn badges_keep_display_order() {
        let set = SignalSet {
            intraday: SignalEntry::new(Signal::Buy, 83),
            swing: SignalEntry::new(Signal::Hold, 56),
            delivery: SignalEntry::new(Signal::Buy, 78),
        };
        let labels: Vec<&str> = set.badges().iter().map(|(l, _)| *l).collect();
        assert_eq!(labels, vec!["Intraday", "Swing", "Delivery"]);
    }
}
