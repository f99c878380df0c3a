//! News and sentiment view.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};

use super::sentiment_color;
use crate::state::{Sentiment, Store};

const FILTERS: [(&str, Option<Sentiment>); 4] = [
    ("All", None),
    ("Positive", Some(Sentiment::Positive)),
    ("Neutral", Some(Sentiment::Neutral)),
    ("Negative", Some(Sentiment::Negative)),
];

/// Headline list with the sentiment filter row.
pub struct NewsList;

impl NewsList {
    /// Render the news view.
    pub fn render(frame: &mut Frame, area: Rect, store: &Store) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(1), Constraint::Min(3)])
            .split(area);

        Self::render_filters(frame, chunks[0], store);
        Self::render_items(frame, chunks[1], store);
    }

    fn render_filters(frame: &mut Frame, area: Rect, store: &Store) {
        let mut spans = vec![Span::styled(
            " Sentiment: ",
            Style::default().fg(Color::DarkGray),
        )];
        for (label, filter) in FILTERS {
            let style = if store.news.filter == filter {
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
            } else {
                Style::default().fg(Color::White)
            };
            spans.push(Span::styled(format!("[{label}] "), style));
        }
        spans.push(Span::styled(
            " f cycles",
            Style::default().fg(Color::DarkGray),
        ));
        frame.render_widget(Paragraph::new(Line::from(spans)), area);
    }

    fn render_items(frame: &mut Frame, area: Rect, store: &Store) {
        let now = chrono::Utc::now();
        let filtered = store.news.filtered();

        let items: Vec<ListItem> = filtered
            .iter()
            .map(|item| {
                let title = Line::from(vec![
                    Span::styled(
                        item.title.clone(),
                        Style::default()
                            .fg(Color::White)
                            .add_modifier(Modifier::BOLD),
                    ),
                    Span::raw("  "),
                    Span::styled(
                        item.sentiment.to_string(),
                        Style::default().fg(sentiment_color(item.sentiment)),
                    ),
                ]);
                let meta = Line::from(Span::styled(
                    format!("{} · {}", item.source, item.age_label(now)),
                    Style::default().fg(Color::DarkGray),
                ));
                ListItem::new(vec![title, meta])
            })
            .collect();

        let list = List::new(items)
            .block(
                Block::default()
                    .title(format!(
                        " News & Sentiment ({}) [{}] ",
                        filtered.len(),
                        store.news.filter_label()
                    ))
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Cyan)),
            )
            .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
            .highlight_symbol("▶ ");

        let mut state = ListState::default();
        if !filtered.is_empty() {
            state.select(Some(store.news.cursor.min(filtered.len() - 1)));
        }

        frame.render_stateful_widget(list, area, &mut state);
    }
}
