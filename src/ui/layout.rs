//! Layout components (content area, status bar)

use crate::app::App;
use crate::platform::{CLEAR_FIELD_SHORTCUT, SUBMIT_SHORTCUT};
use crate::state::FILL_OUT_HINT;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Split the screen into content and a one-line status bar
pub fn create_layout(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    (chunks[0], chunks[1])
}

/// Draw the status bar at the bottom of the screen
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![Span::styled(
        format!(" {}", key_hints()),
        Style::default().fg(Color::Gray),
    )];

    // Explain why the button is disabled
    if !app.state.can_submit() && !app.state.submission.is_processing() {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(FILL_OUT_HINT, Style::default().fg(Color::Yellow)));
    }

    if let Some(msg) = &app.state.status_message {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(msg, Style::default().fg(Color::Red)));
    }

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, area);
}

fn key_hints() -> String {
    format!(
        "Tab/S-Tab:move  Enter:next/submit  {SUBMIT_SHORTCUT}:submit  {CLEAR_FIELD_SHORTCUT}:clear  Esc:quit"
    )
}
