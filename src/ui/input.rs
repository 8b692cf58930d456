//! Input handling for the TUI.
//!
//! This module processes keyboard input and dispatches to the appropriate
//! handler based on current view and mode. The hidden admin trigger is fed
//! before any dispatch, so it sees every typed character regardless of
//! which surface has focus.

use crate::app::{App, View};
use crate::catalog::CategoryFilter;
use crate::form::FormField;
use crate::keybindings::{Action as KbAction, Context as KbContext};
use crate::util::validate_url_for_open;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyModifiers};

use super::Action;

/// Main input dispatch function.
///
/// Routes input to the appropriate handler based on current mode and view.
pub(super) fn handle_input(app: &mut App, code: KeyCode, modifiers: KeyModifiers) -> Result<Action> {
    // The hidden trigger listens globally, before focus-specific handling.
    // A matching sequence typed into the search box or a form field still
    // flips the admin panel. The keystroke that completes the sequence is
    // consumed, so it is never also dispatched against the post-toggle state.
    if let KeyCode::Char(c) = code {
        if !modifiers.contains(KeyModifiers::CONTROL)
            && !modifiers.contains(KeyModifiers::ALT)
            && app.feed_secret(c)
        {
            return Ok(Action::Continue);
        }
    }

    // Handle help overlay input first (captures all keys when visible)
    if app.show_help {
        return Ok(handle_help_input(app, code));
    }

    // Handle confirmation dialog input (captures all keys when visible)
    if app.pending_confirm.is_some() {
        return Ok(handle_confirm_input(app, code));
    }

    // Handle search mode input separately
    if app.search_mode {
        return Ok(handle_search_input(app, code));
    }

    // The theater is full-screen, so it takes input even when the admin
    // panel is also open underneath it.
    if app.view() == View::Theater {
        return handle_theater_input(app, code, modifiers);
    }

    if app.admin_visible {
        return handle_admin_input(app, code, modifiers);
    }

    handle_browse_input(app, code, modifiers)
}

/// Handle input while the help overlay is visible.
///
/// Captures all keys: Esc/q/? dismiss, everything else is ignored.
fn handle_help_input(app: &mut App, code: KeyCode) -> Action {
    match code {
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('?') => {
            app.show_help = false;
        }
        _ => {}
    }
    Action::Continue
}

/// Handle input while a delete confirmation is pending.
///
/// y/Enter confirms, n/Esc cancels; other keys are swallowed so a stray
/// keypress cannot resolve the prompt either way.
fn handle_confirm_input(app: &mut App, code: KeyCode) -> Action {
    match code {
        KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => app.confirm_pending(),
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => app.cancel_pending(),
        _ => {}
    }
    Action::Continue
}

/// Handle input while the search box has focus.
fn handle_search_input(app: &mut App, code: KeyCode) -> Action {
    match code {
        KeyCode::Esc => {
            // Abandon the search entirely
            app.search_mode = false;
            app.set_search_query("");
        }
        KeyCode::Enter => {
            // Keep the query active and return focus to the grid
            app.search_mode = false;
        }
        KeyCode::Backspace => {
            let mut query = app.search_query.clone();
            query.pop();
            app.set_search_query(query);
        }
        KeyCode::Char(c) => {
            let mut query = app.search_query.clone();
            query.push(c);
            app.set_search_query(query);
        }
        _ => {}
    }
    Action::Continue
}

/// Handle input in the browse view (sidebar + card grid).
fn handle_browse_input(app: &mut App, code: KeyCode, modifiers: KeyModifiers) -> Result<Action> {
    match app.keybindings.action_for_key(code, modifiers, KbContext::Browse) {
        Some(KbAction::Quit) => return Ok(Action::Quit),
        Some(KbAction::NavDown) => app.nav_down(),
        Some(KbAction::NavUp) => app.nav_up(),
        Some(KbAction::PrevCategory) => app.cycle_filter(false),
        Some(KbAction::NextCategory) => app.cycle_filter(true),
        Some(KbAction::ToggleSidebar) => app.toggle_sidebar(),
        Some(KbAction::ToggleAdmin) => app.toggle_admin(),
        Some(KbAction::EnterSearch) => app.search_mode = true,
        Some(KbAction::Select) => app.enter_theater(),
        Some(KbAction::LaunchGame) => {
            let url = app.selected_entry().map(|e| e.game_url.clone());
            launch_game(app, url);
        }
        Some(KbAction::DeleteEntry) => {
            // Delete is an admin affordance; no-op outside the panel
            app.request_delete();
        }
        Some(KbAction::ShowHelp) => app.show_help = true,
        Some(KbAction::Back) => {
            if !app.search_query.is_empty() {
                app.set_search_query("");
            } else if app.active_filter != CategoryFilter::All {
                app.set_filter(CategoryFilter::All);
            }
        }
        Some(KbAction::CloseTheater) => {} // not reachable in browse
        None => {}
    }
    Ok(Action::Continue)
}

/// Handle input in the full-screen theater view.
fn handle_theater_input(app: &mut App, code: KeyCode, modifiers: KeyModifiers) -> Result<Action> {
    match app.keybindings.action_for_key(code, modifiers, KbContext::Theater) {
        Some(KbAction::Quit) => return Ok(Action::Quit),
        Some(KbAction::CloseTheater) | Some(KbAction::Back) => app.exit_theater(),
        Some(KbAction::LaunchGame) => {
            let url = app.selected_game.as_ref().map(|e| e.game_url.clone());
            launch_game(app, url);
        }
        Some(KbAction::ToggleAdmin) => app.toggle_admin(),
        Some(KbAction::ShowHelp) => app.show_help = true,
        _ => {}
    }
    Ok(Action::Continue)
}

/// Handle input while the admin panel is open.
///
/// Typed characters go to the focused form field, so the browse-view letter
/// bindings are unavailable until the panel is closed. Navigation and
/// submission use non-letter keys.
fn handle_admin_input(app: &mut App, code: KeyCode, modifiers: KeyModifiers) -> Result<Action> {
    // Ctrl+c still quits even while a field has focus
    if code == KeyCode::Char('c') && modifiers.contains(KeyModifiers::CONTROL) {
        return Ok(Action::Quit);
    }

    match code {
        KeyCode::Esc => app.toggle_admin(),
        KeyCode::Tab | KeyCode::Down => app.form.focused = app.form.focused.next(),
        KeyCode::BackTab | KeyCode::Up => app.form.focused = app.form.focused.prev(),
        KeyCode::Left if app.form.focused == FormField::Category => {
            app.form.cycle_category(false);
        }
        KeyCode::Right if app.form.focused == FormField::Category => {
            app.form.cycle_category(true);
        }
        KeyCode::Enter => {
            if app.form.focused == FormField::Category {
                app.form.cycle_category(true);
            } else {
                app.submit_form();
            }
        }
        KeyCode::Delete => app.request_delete(),
        KeyCode::Backspace => app.form.backspace(),
        KeyCode::Char(c) if !modifiers.contains(KeyModifiers::CONTROL) => {
            app.form.type_char(c);
        }
        _ => {}
    }
    Ok(Action::Continue)
}

/// Validate and launch a game URL in the default browser.
fn launch_game(app: &mut App, url: Option<String>) {
    let Some(url) = url else {
        app.set_status("No game selected");
        return;
    };
    // The opener shells out to the OS handler; refuse non-web URLs
    if let Err(e) = validate_url_for_open(&url) {
        app.set_status(format!("Cannot launch: {}", e));
        return;
    }
    match open::that(&url) {
        Ok(()) => {
            tracing::info!(url = %url, "Launched game in browser");
            app.set_status("Launching game in browser...");
        }
        Err(e) => app.set_status(format!("Failed to open browser: {}", e)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::ConfirmAction;
    use crate::catalog::{CatalogStore, Category};
    use crate::config::Config;
    use crate::storage::MemoryStore;

    fn test_app() -> App {
        let catalog = CatalogStore::load(Box::new(MemoryStore::new()));
        App::new(catalog, &Config::default())
    }

    fn press(app: &mut App, code: KeyCode) -> Action {
        handle_input(app, code, KeyModifiers::NONE).unwrap()
    }

    fn type_chars(app: &mut App, s: &str) {
        for c in s.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    #[test]
    fn test_q_quits_from_browse() {
        let mut app = test_app();
        assert!(matches!(press(&mut app, KeyCode::Char('q')), Action::Quit));
    }

    #[test]
    fn test_secret_typed_into_search_opens_admin() {
        let mut app = test_app();
        press(&mut app, KeyCode::Char('/'));
        assert!(app.search_mode);

        type_chars(&mut app, "admin");
        assert!(app.admin_visible);
        // The completing keystroke is consumed; the rest landed in the query
        assert_eq!(app.search_query, "admi");
    }

    #[test]
    fn test_trigger_completing_key_is_not_dispatched_twice() {
        let mut app = test_app();
        type_chars(&mut app, "admin");
        assert!(app.admin_visible);
        // The final 'n' must not reach the freshly opened form
        assert!(app.form.title.is_empty());
        // Nor does the sequence leave behind status noise
        assert!(app.status_message.is_none());
    }

    #[test]
    fn test_secret_typed_into_form_field_closes_admin() {
        let mut app = test_app();
        app.toggle_admin();
        type_chars(&mut app, "admin");
        assert!(!app.admin_visible);
    }

    #[tokio::test]
    async fn test_confirm_prompt_swallows_unrelated_keys() {
        let mut app = test_app();
        app.toggle_admin();
        press(&mut app, KeyCode::Delete);
        assert!(app.pending_confirm.is_some());

        press(&mut app, KeyCode::Char('x'));
        press(&mut app, KeyCode::Char('j'));
        assert!(app.pending_confirm.is_some());
        assert_eq!(app.catalog.len(), 3);

        press(&mut app, KeyCode::Char('n'));
        assert!(app.pending_confirm.is_none());
        assert_eq!(app.catalog.len(), 3);
    }

    #[tokio::test]
    async fn test_delete_confirms_with_y() {
        let mut app = test_app();
        app.toggle_admin();
        press(&mut app, KeyCode::Delete);
        assert!(matches!(
            app.pending_confirm,
            Some(ConfirmAction::DeleteEntry { .. })
        ));

        press(&mut app, KeyCode::Char('y'));
        assert_eq!(app.catalog.len(), 2);
    }

    #[test]
    fn test_theater_esc_closes_only_theater() {
        let mut app = test_app();
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.view(), View::Theater);
        app.toggle_admin();

        press(&mut app, KeyCode::Esc);
        assert_eq!(app.view(), View::Browse);
        assert!(app.admin_visible); // admin panel untouched
    }

    #[test]
    fn test_search_esc_abandons_query() {
        let mut app = test_app();
        press(&mut app, KeyCode::Char('/'));
        type_chars(&mut app, "hex");
        press(&mut app, KeyCode::Esc);
        assert!(!app.search_mode);
        assert!(app.search_query.is_empty());
    }

    #[test]
    fn test_search_enter_keeps_query_active() {
        let mut app = test_app();
        press(&mut app, KeyCode::Char('/'));
        type_chars(&mut app, "2048");
        press(&mut app, KeyCode::Enter);
        assert!(!app.search_mode);
        assert_eq!(app.search_query, "2048");
        assert_eq!(app.visible().len(), 1);
    }

    #[tokio::test]
    async fn test_form_filled_and_submitted_through_keys() {
        let mut app = test_app();
        app.toggle_admin();

        type_chars(&mut app, "Foo");
        press(&mut app, KeyCode::Tab); // -> Category
        press(&mut app, KeyCode::Right); // Action -> Sports
        press(&mut app, KeyCode::Tab); // -> Game URL
        type_chars(&mut app, "https://x");
        press(&mut app, KeyCode::Tab); // -> Thumbnail
        type_chars(&mut app, "https://y");
        press(&mut app, KeyCode::Tab); // -> Description
        type_chars(&mut app, "z");
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.catalog.len(), 4);
        assert_eq!(app.catalog.entries()[0].title, "Foo");
        assert_eq!(app.catalog.entries()[0].category, Category::Sports);
        assert!(app.form.title.is_empty());
    }

    #[test]
    fn test_help_overlay_captures_navigation() {
        let mut app = test_app();
        press(&mut app, KeyCode::Char('?'));
        assert!(app.show_help);

        press(&mut app, KeyCode::Char('j'));
        assert_eq!(app.selected_card, 0); // grid did not move

        press(&mut app, KeyCode::Esc);
        assert!(!app.show_help);
    }

    #[test]
    fn test_back_clears_query_then_filter() {
        let mut app = test_app();
        app.set_filter(CategoryFilter::Only(Category::Puzzle));
        app.set_search_query("20");

        press(&mut app, KeyCode::Esc);
        assert!(app.search_query.is_empty());
        assert_eq!(app.active_filter, CategoryFilter::Only(Category::Puzzle));

        press(&mut app, KeyCode::Esc);
        assert_eq!(app.active_filter, CategoryFilter::All);
    }
}
