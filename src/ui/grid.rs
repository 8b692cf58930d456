use crate::app::App;
use crate::util::truncate_to_width;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState},
    Frame,
};

/// Render the game card grid for the current filter and search query.
pub fn render(f: &mut Frame, app: &App, area: Rect) {
    if area.width < 3 || area.height < 3 {
        return;
    }

    let visible = app.visible();

    let items: Vec<ListItem> = if visible.is_empty() {
        vec![ListItem::new("No games match")]
    } else {
        visible
            .iter()
            .enumerate()
            .map(|(i, entry)| {
                let title_style = if i == app.selected_card {
                    Style::default().bg(Color::DarkGray).fg(Color::White)
                } else {
                    Style::default().add_modifier(Modifier::BOLD)
                };

                // Leave room for the category tag on the right
                let max_title = area.width.saturating_sub(16) as usize;
                let title = truncate_to_width(&entry.title, max_title);

                let mut spans = vec![Span::styled(title.into_owned(), title_style)];
                spans.push(Span::styled(
                    format!("  [{}]", entry.category.name()),
                    Style::default().fg(Color::Cyan),
                ));

                let max_desc = area.width.saturating_sub(6) as usize;
                let desc = truncate_to_width(&entry.description, max_desc);
                let desc_line = Line::from(Span::styled(
                    format!("  {}", desc),
                    Style::default().fg(Color::Gray),
                ));

                ListItem::new(vec![Line::from(spans), desc_line])
            })
            .collect()
    };

    let title = if app.search_query.is_empty() {
        format!(" Library - {} ", app.active_filter.name())
    } else {
        format!(
            " Library - {} - \"{}\" ",
            app.active_filter.name(),
            app.search_query
        )
    };

    let list = List::new(items).block(Block::default().borders(Borders::ALL).title(title));

    let selected = if visible.is_empty() {
        None
    } else {
        Some(app.selected_card)
    };
    let mut state = ListState::default().with_selected(selected);
    f.render_stateful_widget(list, area, &mut state);
}
