//! Success banner shown after a registration goes through

use crate::state::SUCCESS_MESSAGE;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Banner height in rows (border + message + border)
pub const BANNER_HEIGHT: u16 = 3;

pub fn render_success_banner(frame: &mut Frame, area: Rect, visible: bool) {
    if !visible {
        return;
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Green));
    let paragraph = Paragraph::new(SUCCESS_MESSAGE)
        .style(
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )
        .wrap(Wrap { trim: true })
        .block(block);

    frame.render_widget(paragraph, area);
}
