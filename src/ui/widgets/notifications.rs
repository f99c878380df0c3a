//! Transient popup chrome for notifications and errors.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

use crate::state::{Notification, NotificationLevel};

/// Render a transient notification banner. Expired notifications are
/// pruned by the store on tick.
pub fn render_notification(frame: &mut Frame, area: Rect, notification: &Notification) {
    let (color, title) = match notification.level {
        NotificationLevel::Info => (Color::Cyan, " Info "),
        NotificationLevel::Success => (Color::Green, " Done "),
        NotificationLevel::Warning => (Color::Yellow, " Warning "),
        NotificationLevel::Error => (Color::Red, " Error "),
    };
    popup(frame, area, title, color, notification.message.as_str());
}

/// Render an error banner; stays until dismissed with Esc.
pub fn render_error(frame: &mut Frame, area: Rect, error: &str) {
    popup(frame, area, " Error (Esc to dismiss) ", Color::Red, error);
}

fn popup(frame: &mut Frame, area: Rect, title: &str, color: Color, message: &str) {
    frame.render_widget(Clear, area);

    let body = Paragraph::new(message)
        .wrap(Wrap { trim: true })
        .style(Style::default().fg(Color::White))
        .block(
            Block::default()
                .title(title.to_string())
                .borders(Borders::ALL)
                .border_style(Style::default().fg(color)),
        );

    frame.render_widget(body, area);
}
