//! Admin panel overlay — the entry form plus delete affordance.
//!
//! There is no visible control that opens this panel; it appears only via
//! its keybinding or the hidden typed trigger.

use crate::app::App;
use crate::form::FormField;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use super::render::centered_rect;

const FIELDS: [FormField; 5] = [
    FormField::Title,
    FormField::Category,
    FormField::GameUrl,
    FormField::Thumbnail,
    FormField::Description,
];

pub fn render(f: &mut Frame, app: &App) {
    let overlay = centered_rect(70, 70, f.area());
    if overlay.width < 30 || overlay.height < 14 {
        return;
    }

    f.render_widget(Clear, overlay);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow))
        .title(" Admin Panel - Add Game ");
    let inner = block.inner(overlay);
    f.render_widget(block, overlay);

    // One row per field plus a footer hint
    let mut constraints: Vec<Constraint> = FIELDS.iter().map(|_| Constraint::Length(2)).collect();
    constraints.push(Constraint::Min(0));
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(inner);

    for (i, field) in FIELDS.iter().enumerate() {
        render_field(f, app, *field, rows[i]);
    }

    let footer = Paragraph::new(
        "Tab/Shift+Tab move  Enter submit  Del delete selected  Esc close",
    )
    .style(Style::default().fg(Color::DarkGray));
    f.render_widget(footer, rows[FIELDS.len()]);
}

fn render_field(f: &mut Frame, app: &App, field: FormField, area: Rect) {
    if area.height < 1 {
        return;
    }

    let focused = app.form.focused == field;
    let label_style = if focused {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Gray)
    };

    let value = match field {
        FormField::Title => app.form.title.clone(),
        FormField::GameUrl => app.form.game_url.clone(),
        FormField::Thumbnail => app.form.thumbnail.clone(),
        FormField::Description => app.form.description.clone(),
        FormField::Category => {
            // Closed set, cycled with Left/Right rather than typed
            if focused {
                format!("< {} >", app.form.category.name())
            } else {
                app.form.category.name().to_string()
            }
        }
    };

    let cursor = if focused && field != FormField::Category {
        "_"
    } else {
        ""
    };

    let line = Line::from(vec![
        Span::styled(format!("{:<14}", field.label()), label_style),
        Span::raw(value),
        Span::styled(cursor, Style::default().fg(Color::Yellow)),
    ]);

    f.render_widget(Paragraph::new(line), area);
}
