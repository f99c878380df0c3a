//! Screen region carving shared by every view.

use ratatui::layout::{Constraint, Layout as RatatuiLayout, Rect};

/// Fixed chrome rows carved off the terminal area.
pub struct Layout {
    /// Status bar row (top).
    pub status_area: Rect,
    /// View tab row.
    pub tab_area: Rect,
    /// Everything below the chrome.
    pub main_area: Rect,
    /// Floating banner for notifications and errors.
    pub notification_area: Rect,
}

impl Layout {
    pub fn new(area: Rect) -> Self {
        let [status_area, tab_area, main_area] = RatatuiLayout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .areas(area);

        Self {
            status_area,
            tab_area,
            main_area,
            notification_area: floating_banner(area),
        }
    }
}

/// A one-line banner floated over the upper third of the screen.
fn floating_banner(area: Rect) -> Rect {
    let width = (area.width / 2).clamp(20.min(area.width), area.width);
    Rect {
        x: area.width.saturating_sub(width) / 2,
        y: area.height / 3,
        width,
        height: 3.min(area.height),
    }
}

/// Split the dashboard main area into the listing sidebar and the chart
/// panel.
pub fn dashboard_columns(area: Rect) -> (Rect, Rect) {
    let [sidebar, chart] =
        RatatuiLayout::horizontal([Constraint::Percentage(42), Constraint::Percentage(58)])
            .areas(area);
    (sidebar, chart)
}

/// Center a popup of the given percentage size within `area`.
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let [_, middle, _] = RatatuiLayout::vertical([
        Constraint::Percentage((100 - percent_y) / 2),
        Constraint::Percentage(percent_y),
        Constraint::Percentage((100 - percent_y) / 2),
    ])
    .areas(area);

    let [_, popup, _] = RatatuiLayout::horizontal([
        Constraint::Percentage((100 - percent_x) / 2),
        Constraint::Percentage(percent_x),
        Constraint::Percentage((100 - percent_x) / 2),
    ])
    .areas(middle);

    popup
}
