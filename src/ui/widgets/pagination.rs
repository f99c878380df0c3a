//! Pagination footer shared by the listing tables.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

/// Render the pager line: `◀ 1 2 3 ▶` with the current page highlighted.
pub fn render_pager(frame: &mut Frame, area: Rect, page: usize, total_pages: usize) {
    frame.render_widget(Paragraph::new(pager_line(page, total_pages)), area);
}

fn pager_line(page: usize, total_pages: usize) -> Line<'static> {
    let arrow_style = Style::default().fg(Color::DarkGray);
    let mut spans = vec![Span::styled(" ◀ ", arrow_style)];

    for number in 1..=total_pages {
        let style = if number == page {
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else {
            Style::default().fg(Color::White)
        };
        spans.push(Span::styled(format!("{number} "), style));
    }

    spans.push(Span::styled("▶ ", arrow_style));
    spans.push(Span::styled(
        format!(" page {page}/{total_pages}"),
        Style::default().fg(Color::DarkGray),
    ));
    Line::from(spans)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn text(line: &Line<'_>) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn pager_lists_every_page_once() {
        let line = pager_line(2, 3);
        assert_eq!(text(&line), " ◀ 1 2 3 ▶  page 2/3");
    }

    #[test]
    fn empty_listings_still_show_one_page() {
        let line = pager_line(1, 1);
        assert_eq!(text(&line), " ◀ 1 ▶  page 1/1");
    }
}
