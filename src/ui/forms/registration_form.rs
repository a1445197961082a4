//! Registration form rendering

use super::field_renderer::{draw_field, FIELD_HEIGHT};
use crate::app::App;
use crate::state::FieldName;
use crate::ui::components::{render_button, render_success_banner, BANNER_HEIGHT, BUTTON_HEIGHT};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Width of the form card
const CARD_WIDTH: u16 = 56;
/// Title + spacer + four fields + spacer + button
const CARD_CONTENT_HEIGHT: u16 = 2 + FIELD_HEIGHT * 4 + 1 + BUTTON_HEIGHT;

/// Draw the banner (when shown) and the form card centered in `area`
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let card_height = CARD_CONTENT_HEIGHT + 4; // borders + margin
    let banner_height = if app.state.show_success_banner {
        BANNER_HEIGHT
    } else {
        0
    };

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(CARD_WIDTH.min(area.width)),
            Constraint::Min(0),
        ])
        .split(area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(banner_height),
            Constraint::Length(card_height),
            Constraint::Min(0),
        ])
        .split(columns[1]);

    render_success_banner(frame, rows[1], app.state.show_success_banner);
    draw_card(frame, rows[2], app);
}

fn draw_card(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Gray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut constraints = vec![
        Constraint::Length(1), // Title
        Constraint::Length(1), // Spacer
    ];
    constraints.extend(FieldName::ALL.iter().map(|_| Constraint::Length(FIELD_HEIGHT)));
    constraints.push(Constraint::Length(1)); // Spacer
    constraints.push(Constraint::Length(BUTTON_HEIGHT));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .horizontal_margin(2)
        .vertical_margin(1)
        .split(inner);

    let title = Paragraph::new("Register Your Details")
        .alignment(Alignment::Center)
        .style(Style::default().add_modifier(Modifier::BOLD));
    frame.render_widget(title, chunks[0]);

    let form = &app.state.form;
    for field in FieldName::ALL {
        let error = form.error(field).map(ToString::to_string);
        draw_field(
            frame,
            chunks[2 + field.index()],
            field,
            form.values.get(field),
            error.as_deref(),
            form.focused_field() == Some(field),
            app.state.mask_passwords,
        );
    }

    render_button(
        frame,
        chunks[7],
        app.state.submit_label(),
        form.is_submit_focused(),
        app.state.can_submit(),
    );
}
