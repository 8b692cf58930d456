use crate::app::{App, View};
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    widgets::Paragraph,
    Frame,
};
use std::borrow::Cow;

/// Render the status bar
pub fn render(f: &mut Frame, app: &App, area: Rect) {
    if area.width < 1 || area.height < 1 {
        return;
    }

    // Cow keeps the static hint strings allocation-free
    let text: Cow<'_, str> = if let Some((msg, _)) = &app.status_message {
        Cow::Borrowed(msg.as_ref())
    } else if app.search_mode {
        Cow::Owned(format!(
            "Search: {}_  | ESC cancel | ENTER confirm",
            app.search_query
        ))
    } else if app.admin_visible {
        Cow::Borrowed("[Tab]next field [Enter]submit [Del]delete selected [Esc]close panel")
    } else {
        match app.view() {
            View::Browse => {
                Cow::Borrowed("[j/k]move [h/l]category [/]search [Enter]theater [o]launch [?]help [q]uit")
            }
            View::Theater => Cow::Borrowed("[o/Enter]launch [x/Esc]close [q]uit"),
        }
    };

    let style = Style::default().bg(Color::DarkGray).fg(Color::White);

    let paragraph = Paragraph::new(text).style(style);
    f.render_widget(paragraph, area);
}
