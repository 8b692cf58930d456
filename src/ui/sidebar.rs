use crate::app::App;
use crate::catalog::CategoryFilter;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

/// Render the category sidebar.
///
/// Shows `All` plus every category with the count of entries it would
/// match, independent of the current search query.
pub fn render(f: &mut Frame, app: &App, area: Rect) {
    if area.width < 3 || area.height < 3 {
        return;
    }

    let entries = app.catalog.entries();

    let items: Vec<ListItem> = CategoryFilter::sidebar_items()
        .map(|filter| {
            let count = entries.iter().filter(|e| filter.matches(e.category)).count();

            let style = if filter == app.active_filter {
                Style::default()
                    .bg(Color::Magenta)
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };

            let spans = vec![
                Span::styled(format!(" {}", filter.name()), style),
                Span::styled(format!(" ({})", count), style),
            ];
            ListItem::new(Line::from(spans))
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Categories "),
    );

    f.render_widget(list, area);
}
