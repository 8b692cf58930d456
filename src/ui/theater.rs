//! Full-screen theater view for the selected game.
//!
//! Renders the snapshot captured when the theater was opened. The snapshot
//! is intentionally independent of the live catalog, so this view never
//! reaches back into the store.

use crate::app::App;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use super::status;

pub fn render(f: &mut Frame, app: &App) {
    let Some(game) = &app.selected_game else {
        return;
    };

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(f.area());

    let body = vec![
        Line::from(""),
        Line::from(Span::styled(
            game.title.clone(),
            Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!("[{}]", game.category.name()),
            Style::default().fg(Color::Cyan),
        )),
        Line::from(""),
        Line::from(game.description.clone()),
        Line::from(""),
        Line::from(vec![
            Span::styled("URL: ", Style::default().fg(Color::DarkGray)),
            Span::raw(game.game_url.clone()),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            "Press o or Enter to launch in your browser",
            Style::default().fg(Color::Gray),
        )),
    ];

    let paragraph = Paragraph::new(body)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Magenta))
                .title(" Theater "),
        )
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });

    f.render_widget(paragraph, rows[0]);
    status::render(f, app, rows[1]);
}
