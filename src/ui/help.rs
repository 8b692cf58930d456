//! Help overlay — keybinding table.
//!
//! Shows the effective bindings, including any user overrides from config.

use crate::app::App;
use ratatui::{
    layout::Constraint,
    style::{Modifier, Style},
    widgets::{Block, Borders, Clear, Row, Table},
    Frame,
};

use super::render::centered_rect;

pub fn render(f: &mut Frame, app: &App) {
    let overlay = centered_rect(60, 80, f.area());
    if overlay.width < 24 || overlay.height < 6 {
        return;
    }

    f.render_widget(Clear, overlay);

    let visible_height = overlay.height.saturating_sub(3) as usize;
    let rows: Vec<Row> = app
        .keybindings
        .help_entries()
        .into_iter()
        .take(visible_height)
        .map(|(key, description)| Row::new(vec![format!("  {}", key), description.to_string()]))
        .collect();

    let widths = [Constraint::Length(14), Constraint::Min(20)];

    let table = Table::new(rows, widths)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Help (? to close) "),
        )
        .header(
            Row::new(vec!["Key", "Action"])
                .style(
                    Style::default()
                        .add_modifier(Modifier::BOLD)
                        .add_modifier(Modifier::UNDERLINED),
                )
                .bottom_margin(1),
        );

    f.render_widget(table, overlay);
}
