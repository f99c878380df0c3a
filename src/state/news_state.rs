//! News and sentiment state.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Sentiment tag attached to a headline. Literal display data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Sentiment {
    Positive,
    #[default]
    Neutral,
    Negative,
}

impl std::fmt::Display for Sentiment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Positive => write!(f, "Positive"),
            Self::Neutral => write!(f, "Neutral"),
            Self::Negative => write!(f, "Negative"),
        }
    }
}

/// A market headline with its source and sentiment tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewsItem {
    pub title: String,
    pub source: String,
    pub published: DateTime<Utc>,
    pub sentiment: Sentiment,
}

impl NewsItem {
    pub fn new(
        title: impl Into<String>,
        source: impl Into<String>,
        published: DateTime<Utc>,
        sentiment: Sentiment,
    ) -> Self {
        Self {
            title: title.into(),
            source: source.into(),
            published,
            sentiment,
        }
    }

    /// Relative age for display, e.g. "2h ago" or "1d ago".
    pub fn age_label(&self, now: DateTime<Utc>) -> String {
        let elapsed = now.signed_duration_since(self.published);
        if elapsed.num_days() >= 1 {
            format!("{}d ago", elapsed.num_days())
        } else if elapsed.num_hours() >= 1 {
            format!("{}h ago", elapsed.num_hours())
        } else {
            format!("{}m ago", elapsed.num_minutes().max(0))
        }
    }
}

/// State for the news and sentiment view.
#[derive(Debug, Default)]
pub struct NewsState {
    /// All loaded headlines, newest first as provided.
    pub items: Vec<NewsItem>,
    /// Active sentiment filter; `None` shows everything.
    pub filter: Option<Sentiment>,
    /// Highlighted headline within the filtered list.
    pub cursor: usize,
    /// Whether headlines are currently loading.
    pub loading: bool,
    /// Last load timestamp.
    pub last_updated: Option<DateTime<Utc>>,
}

impl NewsState {
    /// Headlines narrowed by the sentiment filter. Pure: same items and
    /// filter always give the same result.
    pub fn filtered(&self) -> Vec<&NewsItem> {
        self.items
            .iter()
            .filter(|item| self.filter.is_none_or(|wanted| item.sentiment == wanted))
            .collect()
    }

    /// Step the filter All -> Positive -> Neutral -> Negative -> All.
    pub fn cycle_filter(&mut self) {
        self.filter = match self.filter {
            None => Some(Sentiment::Positive),
            Some(Sentiment::Positive) => Some(Sentiment::Neutral),
            Some(Sentiment::Neutral) => Some(Sentiment::Negative),
            Some(Sentiment::Negative) => None,
        };
        self.cursor = 0;
    }

    pub fn filter_label(&self) -> &'static str {
        match self.filter {
            None => "All",
            Some(Sentiment::Positive) => "Positive",
            Some(Sentiment::Neutral) => "Neutral",
            Some(Sentiment::Negative) => "Negative",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use pretty_assertions::assert_eq;

    fn items(now: DateTime<Utc>) -> Vec<NewsItem> {
        vec![
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
        ]
    }

    #[test]
    fn all_filter_keeps_every_headline() {
        let state = NewsState {
            items: items(Utc::now()),
            ..Default::default()
        };
        assert_eq!(state.filtered().len(), 4);
    }

    #[test]
    fn sentiment_filter_is_exact() {
        let mut state = NewsState {
            items: items(Utc::now()),
            ..Default::default()
        };
        state.filter = Some(Sentiment::Positive);
        let titles: Vec<&str> = state.filtered().iter().map(|i| i.title.as_str()).collect();
        assert_eq!(
            titles,
            vec![
                "Company posts record quarterly profit",
                "Order wins strengthen revenue visibility",
            ]
        );
    }

    #[test]
    fn cycling_returns_to_all() {
        let mut state = NewsState::default();
        let mut seen = vec![state.filter_label()];
        for _ in 0..4 {
            state.cycle_filter();
            seen.push(state.filter_label());
        }
        assert_eq!(seen, vec!["All", "Positive", "Neutral", "Negative", "All"]);
    }

    #[test]
    fn age_labels_round_down() {
        let now = Utc::now();
        let item = NewsItem::new("t", "s", now - Duration::hours(2), Sentiment::Neutral);
        assert_eq!(item.age_label(now), "2h ago");
        let item = NewsItem::new("t", "s", now - Duration::days(1), Sentiment::Neutral);
        assert_eq!(item.age_label(now), "1d ago");
        let item = NewsItem::new("t", "s", now - Duration::minutes(5), Sentiment::Neutral);
        assert_eq!(item.age_label(now), "5m ago");
    }
}
