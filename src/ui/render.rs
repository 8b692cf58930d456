//! Render functions for the TUI.
//!
//! This module handles all rendering logic, dispatching to the appropriate
//! view based on application state. Overlays (admin panel, confirmation
//! prompt, help) draw on top of whichever view is active.

use crate::app::{App, ConfirmAction, View};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use super::{admin, grid, help, sidebar, status, theater};

/// Minimum terminal dimensions required for normal operation.
pub(super) const MIN_WIDTH: u16 = 60;
pub(super) const MIN_HEIGHT: u16 = 10;

/// Main render dispatch function.
///
/// Routes to the appropriate view renderer based on current application state.
/// Handles terminal size validation before rendering.
pub(super) fn render(f: &mut Frame, app: &mut App) {
    let area = f.area();

    // Guard against zero-width/height to prevent layout panics
    if area.width < 1 || area.height < 1 {
        return;
    }

    if area.width < MIN_WIDTH || area.height < MIN_HEIGHT {
        let msg = if area.height < 3 || area.width < 20 {
            Paragraph::new("Too small")
        } else {
            Paragraph::new(format!(
                "Terminal too small\n\nMinimum: {}x{}\nCurrent: {}x{}",
                MIN_WIDTH, MIN_HEIGHT, area.width, area.height
            ))
            .alignment(Alignment::Center)
        };
        f.render_widget(msg, area);
        return;
    }

    match app.view() {
        View::Browse => render_browse(f, app),
        View::Theater => theater::render(f, app),
    }

    // Overlays stack on top: admin panel, then confirmation, then help
    if app.admin_visible && app.view() == View::Browse {
        admin::render(f, app);
    }

    if let Some(ref confirm) = app.pending_confirm {
        render_confirm_overlay(f, confirm);
    }

    if app.show_help {
        help::render(f, app);
    }
}

/// Render the browse view (hero banner + sidebar + card grid + status bar).
fn render_browse(f: &mut Frame, app: &App) {
    let rows = if app.hero_visible() {
        Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(4),
                Constraint::Min(0),
                Constraint::Length(1),
            ])
            .split(f.area())
    } else {
        Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(f.area())
    };

    let (main_area, status_area) = if app.hero_visible() {
        render_hero(f, app, rows[0]);
        (rows[1], rows[2])
    } else {
        (rows[0], rows[1])
    };

    if app.sidebar_open {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(20), Constraint::Percentage(80)])
            .split(main_area);
        sidebar::render(f, app, cols[0]);
        grid::render(f, app, cols[1]);
    } else {
        grid::render(f, app, main_area);
    }

    status::render(f, app, status_area);
}

/// Render the hero banner shown on the unfiltered landing view.
///
/// Pure decoration over the first catalog entry; selection and filtering
/// are unaffected by it.
fn render_hero(f: &mut Frame, app: &App, area: Rect) {
    if area.width < 3 || area.height < 3 {
        return;
    }

    let text = match app.catalog.entries().first() {
        Some(entry) => format!("{}\n{}", entry.title, entry.description),
        None => "Your library is empty".to_string(),
    };

    let banner = Paragraph::new(text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Magenta))
                .title(" NEBULA "),
        )
        .style(Style::default().add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);

    f.render_widget(banner, area);
}

/// Render a confirmation dialog overlay centered on screen.
fn render_confirm_overlay(f: &mut Frame, confirm: &ConfirmAction) {
    let area = f.area();

    let text = match confirm {
        ConfirmAction::DeleteEntry { title, .. } => {
            format!(
                "Delete \"{}\"?\n\nThis cannot be undone.\n\n(y) Confirm  (n/Esc) Cancel",
                title
            )
        }
    };

    // Size: at most 50 chars wide, 7 lines tall, centered
    let width = 50u16.min(area.width.saturating_sub(4));
    let height = 7u16.min(area.height.saturating_sub(4));
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    let overlay = Rect::new(x, y, width, height);

    if overlay.width < 10 || overlay.height < 5 {
        return;
    }

    f.render_widget(Clear, overlay);

    let paragraph = Paragraph::new(text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Red))
                .title(" Confirm "),
        )
        .alignment(Alignment::Center);

    f.render_widget(paragraph, overlay);
}

/// Create a centered rectangle with the given percentage of the parent area.
pub(super) fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let width = area.width * percent_x / 100;
    let height = area.height * percent_y / 100;
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width, height)
}
