//! Field rendering utilities for forms

use crate::state::{FieldName, InputKind};
use crate::ui::components::render_error_text;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Rows used by one field: bordered input plus the error line
pub const FIELD_HEIGHT: u16 = 4;

const MASK_CHAR: char = '•';

/// Border treatment of an input, derived only from its value and error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BorderState {
    Error,
    Valid,
    Neutral,
}

impl BorderState {
    pub fn of(value: &str, error: Option<&str>) -> Self {
        if error.is_some() {
            BorderState::Error
        } else if !value.is_empty() {
            BorderState::Valid
        } else {
            BorderState::Neutral
        }
    }

    pub fn color(self) -> Color {
        match self {
            BorderState::Error => Color::Red,
            BorderState::Valid => Color::Green,
            BorderState::Neutral => Color::DarkGray,
        }
    }
}

/// Text shown inside the input box
pub fn display_value(value: &str, kind: InputKind, mask: bool) -> String {
    if mask && kind.is_secret() {
        MASK_CHAR.to_string().repeat(value.chars().count())
    } else {
        value.to_string()
    }
}

/// Draw a labeled input with its error text underneath
pub fn draw_field(
    frame: &mut Frame,
    area: Rect,
    field: FieldName,
    value: &str,
    error: Option<&str>,
    is_active: bool,
    mask: bool,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Input
            Constraint::Length(1), // Error text
        ])
        .split(area);

    let mut border_style = Style::default().fg(BorderState::of(value, error).color());
    if is_active {
        border_style = border_style.add_modifier(Modifier::BOLD);
    }

    let cursor = Span::styled(
        if is_active { "▌" } else { "" },
        Style::default().fg(Color::Cyan),
    );

    // Placeholder sits after the cursor, typed text before it
    let spans = if value.is_empty() {
        vec![
            cursor,
            Span::styled(
                field.placeholder(),
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::ITALIC),
            ),
        ]
    } else {
        vec![Span::raw(display_value(value, field.kind(), mask)), cursor]
    };

    let block = Block::default()
        .title(format!(" {} ", field.label()))
        .borders(Borders::ALL)
        .border_style(border_style);

    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), chunks[0]);
    render_error_text(frame, chunks[1], error);
}
