//! Stock details panel: header card, indicator grid, signal explanation,
//! badges, and the per-stock news list.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::{sentiment_color, signal_color, trend_color};
use crate::state::Store;

/// The stock details view.
pub struct DetailsPanel;

impl DetailsPanel {
    /// Render the details view.
    pub fn render(frame: &mut Frame, area: Rect, store: &Store) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header card
                Constraint::Length(3), // Indicator grid
                Constraint::Length(6), // Signal explanation
                Constraint::Length(3), // Signal badges
                Constraint::Min(3),    // News panel
            ])
            .split(area);

        Self::render_header(frame, chunks[0], store);
        Self::render_indicators(frame, chunks[1], store);
        Self::render_explanation(frame, chunks[2], store);
        Self::render_badges(frame, chunks[3], store);
        Self::render_news(frame, chunks[4], store);
    }

    fn render_header(frame: &mut Frame, area: Rect, store: &Store) {
        let symbol = store
            .details
            .symbol
            .as_deref()
            .or(store.dashboard.selected.as_deref());
        let stock = symbol
            .and_then(|s| store.dashboard.stock(s))
            .or_else(|| store.dashboard.stocks.first());

        let line = match stock {
            Some(stock) => {
                let trend = stock.trend();
                Line::from(vec![
                    Span::styled(
                        format!(" {} ", stock.symbol),
                        Style::default()
                            .fg(Color::Cyan)
                            .add_modifier(Modifier::BOLD),
                    ),
                    Span::styled("NSE  ", Style::default().fg(Color::DarkGray)),
                    Span::raw(format!("₹{:.2}  ", stock.price)),
                    Span::styled(
                        stock.change_label(),
                        Style::default().fg(trend_color(trend)),
                    ),
                ])
            }
            None => Line::from(Span::styled(
                " No stock selected ",
                Style::default().fg(Color::DarkGray),
            )),
        };

        let intraday = store.details.details.signals.intraday;
        let chip = Span::styled(
            format!("  Signal: {} ", intraday.signal),
            Style::default()
                .fg(signal_color(intraday.signal))
                .add_modifier(Modifier::BOLD),
        );
        let mut spans = line.spans;
        spans.push(chip);

        let block = Block::default()
            .title(" Selected Stock ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan));
        frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
    }

    fn render_indicators(frame: &mut Frame, area: Rect, store: &Store) {
        let indicators = &store.details.details.indicators;
        if indicators.is_empty() {
            return;
        }
        let constraints: Vec<Constraint> = indicators
            .iter()
            .map(|_| Constraint::Ratio(1, indicators.len() as u32))
            .collect();
        let cells = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(constraints)
            .split(area);

        for (indicator, cell) in indicators.iter().zip(cells.iter()) {
            let block = Block::default()
                .title(format!(" {} ", indicator.label))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray));
            let value = Paragraph::new(Line::from(Span::styled(
                indicator.value.clone(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            )))
            .block(block);
            frame.render_widget(value, *cell);
        }
    }

    fn render_explanation(frame: &mut Frame, area: Rect, store: &Store) {
        let lines: Vec<Line> = store
            .details
            .details
            .explanation
            .iter()
            .map(|reason| {
                Line::from(vec![
                    Span::styled(" • ", Style::default().fg(Color::Cyan)),
                    Span::raw(reason.clone()),
                ])
            })
            .collect();

        let block = Block::default()
            .title(" Signal Explanation ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan));
        frame.render_widget(Paragraph::new(lines).block(block), area);
    }

    fn render_badges(frame: &mut Frame, area: Rect, store: &Store) {
        let mut spans = vec![Span::raw(" ")];
        for (label, entry) in store.details.details.signals.badges() {
            spans.push(Span::styled(
                format!("{label}: "),
                Style::default().fg(Color::White),
            ));
            spans.push(Span::styled(
                format!("{} ({}%)  ", entry.signal, entry.confidence),
                Style::default()
                    .fg(signal_color(entry.signal))
                    .add_modifier(Modifier::BOLD),
            ));
        }

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray));
        frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
    }

    fn render_news(frame: &mut Frame, area: Rect, store: &Store) {
        let now = chrono::Utc::now();
        let lines: Vec<Line> = store
            .details
            .details
            .news
            .iter()
            .map(|item| {
                Line::from(vec![
                    Span::raw(format!(" {} ", item.title)),
                    Span::styled(
                        format!("({}) ", item.age_label(now)),
                        Style::default().fg(Color::DarkGray),
                    ),
                    Span::styled(
                        item.sentiment.to_string(),
                        Style::default().fg(sentiment_color(item.sentiment)),
                    ),
                ])
            })
            .collect();

        let overall = store.details.dominant_sentiment();
        let block = Block::default()
            .title(Line::from(vec![
                Span::raw(" Latest News "),
                Span::styled(
                    format!("[{overall}] "),
                    Style::default().fg(sentiment_color(overall)),
                ),
            ]))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan));
        frame.render_widget(Paragraph::new(lines).block(block), area);
    }
}
