//! Inline error text shown under an input

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::Line,
    widgets::Paragraph,
    Frame,
};

/// Line for an error message, or None when there is nothing to show
pub fn error_line(message: Option<&str>) -> Option<Line<'_>> {
    message
        .filter(|m| !m.is_empty())
        .map(|m| Line::styled(m, Style::default().fg(Color::Red)))
}

pub fn render_error_text(frame: &mut Frame, area: Rect, message: Option<&str>) {
    if let Some(line) = error_line(message) {
        frame.render_widget(Paragraph::new(line), area);
    }
}
