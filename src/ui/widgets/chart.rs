//! Chart panel: timeframes, candlestick placeholder, and signal badges.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::signal_color;
use crate::state::{Store, Timeframe};

const CANDLE_COUNT: usize = 20;

/// The dashboard chart panel for the selected stock.
pub struct ChartPanel;

impl ChartPanel {
    /// Render the chart panel.
    pub fn render(frame: &mut Frame, area: Rect, store: &Store) {
        let title = match store.dashboard.selected_stock() {
            Some(stock) => format!(" {} NSE ", stock.symbol),
            None => " No stock selected ".to_string(),
        };

        let block = Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Timeframes
                Constraint::Min(3),    // Candles
                Constraint::Length(3), // Signal badges
            ])
            .split(inner);

        Self::render_timeframes(frame, chunks[0], store.dashboard.timeframe);
        Self::render_candles(frame, chunks[1]);
        Self::render_badges(frame, chunks[2], store);
    }

    fn render_timeframes(frame: &mut Frame, area: Rect, active: Timeframe) {
        let mut spans = vec![Span::raw(" ")];
        for frame_option in Timeframe::ALL {
            let style = if frame_option == active {
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            spans.push(Span::styled(format!("[{}] ", frame_option.label()), style));
        }
        spans.push(Span::styled(
            " t cycles",
            Style::default().fg(Color::DarkGray),
        ));
        frame.render_widget(Paragraph::new(Line::from(spans)), area);
    }

    /// Placeholder candles: a fixed deterministic pattern, tallest bar
    /// scaled to the available height.
    fn render_candles(frame: &mut Frame, area: Rect) {
        if area.height < 2 {
            return;
        }
        let plot_height = (area.height - 1) as usize;

        // Bar i has relative height 30 + (i % 7) * 6, direction down on
        // every third bar.
        let heights: Vec<usize> = (0..CANDLE_COUNT)
            .map(|i| {
                let relative = 30 + (i % 7) * 6;
                (relative * plot_height).div_ceil(66)
            })
            .collect();

        let mut lines = Vec::with_capacity(plot_height + 1);
        for row in 0..plot_height {
            let threshold = plot_height - row;
            let mut spans = vec![Span::raw(" ")];
            for (i, &height) in heights.iter().enumerate() {
                let color = if i % 3 == 0 { Color::Red } else { Color::Green };
                if height >= threshold {
                    spans.push(Span::styled("█ ", Style::default().fg(color)));
                } else {
                    spans.push(Span::raw("  "));
                }
            }
            lines.push(Line::from(spans));
        }
        lines.push(Line::from(Span::styled(
            " Candlestick Chart Area",
            Style::default().fg(Color::DarkGray),
        )));

        frame.render_widget(Paragraph::new(lines), area);
    }

    fn render_badges(frame: &mut Frame, area: Rect, store: &Store) {
        let lines: Vec<Line> = store
            .dashboard
            .signals
            .badges()
            .into_iter()
            .map(|(label, entry)| {
                Line::from(vec![
                    Span::styled(
                        format!(" {label}: "),
                        Style::default().fg(Color::White),
                    ),
                    Span::styled(
                        format!("{} ({}%)", entry.signal, entry.confidence),
                        Style::default()
                            .fg(signal_color(entry.signal))
                            .add_modifier(Modifier::BOLD),
                    ),
                ])
            })
            .collect();

        frame.render_widget(Paragraph::new(lines), area);
    }
}
