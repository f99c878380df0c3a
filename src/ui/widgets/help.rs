//! Help panel widget.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

use super::super::layout::centered_rect;

/// Help panel showing keybindings.
pub struct HelpPanel;

impl HelpPanel {
    /// Render the help panel.
    pub fn render(frame: &mut Frame, area: Rect) {
        let popup_area = centered_rect(60, 80, area);

        // Clear the area behind the popup
        frame.render_widget(Clear, popup_area);

        let section = |name: &'static str| {
            Line::from(vec![Span::styled(
                name,
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )])
        };
        let entry = |key: &'static str, text: &'static str| {
            Line::from(vec![
                Span::styled(key, Style::default().fg(Color::Cyan)),
                Span::raw(text),
            ])
        };

        let help_text = vec![
            section("Navigation"),
            Line::from(""),
            entry("  1-4     ", "Dashboard / Screener / Stock Details / News"),
            entry("  Tab     ", "Next view"),
            entry("  Shift+Tab", " Previous view"),
            entry("  j/↓ k/↑ ", "Move cursor"),
            entry("  g/G     ", "Top / bottom"),
            entry("  ←/→     ", "Previous / next page"),
            entry("  Enter   ", "Select row (Screener opens details)"),
            entry("  Esc     ", "Back / dismiss"),
            Line::from(""),
            section("Listing"),
            Line::from(""),
            entry("  /       ", "Search by symbol"),
            entry("  w/x     ", "Watch / unwatch highlighted stock"),
            entry("  t       ", "Cycle chart timeframe"),
            entry("  f       ", "Cycle news sentiment filter"),
            Line::from(""),
            section("General"),
            Line::from(""),
            entry("  r       ", "Reload data"),
            entry("  ?       ", "Toggle this help"),
            entry("  q       ", "Quit"),
        ];

        let help = Paragraph::new(help_text).block(
            Block::default()
                .title(" Help ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        );

        frame.render_widget(help, popup_area);
    }
}
