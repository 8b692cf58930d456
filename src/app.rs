//! Central application state.
//!
//! All UI flags live in one explicit struct passed to input and render logic,
//! so every transition is unit-testable without a terminal. The overlay flags
//! (`selected_game`, `admin_visible`) are deliberately independent — neither
//! opening the admin panel nor entering the theater closes the other.

use crate::catalog::{filter, CatalogError, CatalogStore, Category, CategoryFilter, GameEntry};
use crate::config::Config;
use crate::form::EntryForm;
use crate::keybindings::KeybindingRegistry;
use crate::secret::SecretTrigger;
use std::borrow::Cow;
use tokio::time::Instant;

// ============================================================================
// View and Confirmation Types
// ============================================================================

/// Current view mode, derived from theater state for dispatch purposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Browse,  // Sidebar + card grid
    Theater, // Full-screen view of the selected game
}

/// Pending confirmation for destructive operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfirmAction {
    /// Remove a game from the library. Irreversible — there is no trash.
    DeleteEntry { id: String, title: String },
}

// ============================================================================
// Application State
// ============================================================================

/// Central application state.
pub struct App {
    pub catalog: CatalogStore,
    pub keybindings: KeybindingRegistry,

    // Filtering
    pub active_filter: CategoryFilter,
    pub search_query: String,
    /// Whether typed characters currently edit the search query.
    pub search_mode: bool,

    // Selection
    /// Index into the currently visible (filtered) entries.
    pub selected_card: usize,

    // Overlays — independent flags, not a single enum
    /// Snapshot of the game shown in the theater. Cloned on entry, so it
    /// keeps showing stale data if the entry is deleted underneath it;
    /// only an explicit close clears it.
    pub selected_game: Option<GameEntry>,
    pub admin_visible: bool,
    pub show_help: bool,
    pub pending_confirm: Option<ConfirmAction>,

    /// Cosmetic sidebar collapse flag; has no effect on filtering.
    pub sidebar_open: bool,

    // Admin form
    pub form: EntryForm,
    pub default_category: Category,

    // Hidden admin trigger
    pub secret: SecretTrigger,

    /// Whether deletes go through the confirmation prompt. Disabling it in
    /// config is treated as standing confirmation.
    pub confirm_delete: bool,

    /// Status message with expiry — Cow avoids allocation for literals.
    pub status_message: Option<(Cow<'static, str>, Instant)>,

    /// Dirty flag to skip unnecessary frame renders.
    pub needs_redraw: bool,
}

impl App {
    pub fn new(catalog: CatalogStore, config: &Config) -> Self {
        let mut keybindings = KeybindingRegistry::new();
        for warning in keybindings.apply_overrides(&config.keybindings) {
            tracing::warn!(warning, "Keybinding override not applied");
        }
        let default_category = config.default_category();

        Self {
            catalog,
            keybindings,
            active_filter: CategoryFilter::All,
            search_query: String::new(),
            search_mode: false,
            selected_card: 0,
            selected_game: None,
            admin_visible: false,
            show_help: false,
            pending_confirm: None,
            sidebar_open: config.sidebar_open,
            form: EntryForm::new(default_category),
            default_category,
            secret: SecretTrigger::new(),
            confirm_delete: config.confirm_delete,
            status_message: None,
            needs_redraw: true,
        }
    }

    pub fn view(&self) -> View {
        if self.selected_game.is_some() {
            View::Theater
        } else {
            View::Browse
        }
    }

    // ------------------------------------------------------------------
    // Filtering and selection
    // ------------------------------------------------------------------

    /// The filtered entries currently shown in the grid, catalog order.
    pub fn visible(&self) -> Vec<&GameEntry> {
        filter::filter(self.catalog.entries(), self.active_filter, &self.search_query)
    }

    /// Currently highlighted card (bounds-checked).
    pub fn selected_entry(&self) -> Option<&GameEntry> {
        self.visible().into_iter().nth(self.selected_card)
    }

    /// Clamp the card selection after any change to the visible set.
    pub fn clamp_selection(&mut self) {
        let len = self.visible().len();
        self.selected_card = if len == 0 {
            0
        } else {
            self.selected_card.min(len - 1)
        };
    }

    pub fn nav_up(&mut self) {
        self.selected_card = self.selected_card.saturating_sub(1);
    }

    pub fn nav_down(&mut self) {
        let len = self.visible().len();
        if len > 0 {
            self.selected_card = self.selected_card.saturating_add(1).min(len - 1);
        }
    }

    /// Set the active category filter. Never clears `selected_game` or
    /// `admin_visible`; only the card selection is re-clamped.
    pub fn set_filter(&mut self, category: CategoryFilter) {
        self.active_filter = category;
        self.clamp_selection();
    }

    /// Step the sidebar filter forward or backward through All + categories.
    pub fn cycle_filter(&mut self, forward: bool) {
        let items: Vec<CategoryFilter> = CategoryFilter::sidebar_items().collect();
        let idx = items
            .iter()
            .position(|&f| f == self.active_filter)
            .unwrap_or(0);
        let next = if forward {
            (idx + 1) % items.len()
        } else {
            (idx + items.len() - 1) % items.len()
        };
        self.set_filter(items[next]);
    }

    /// Replace the search query. Never clears theater or admin state.
    pub fn set_search_query(&mut self, query: impl Into<String>) {
        self.search_query = query.into();
        self.clamp_selection();
    }

    // ------------------------------------------------------------------
    // Overlays
    // ------------------------------------------------------------------

    /// Enter the theater for the highlighted card.
    ///
    /// The entry is cloned into `selected_game` so the overlay owns a stable
    /// snapshot even if the catalog changes while it is open.
    pub fn enter_theater(&mut self) {
        if let Some(entry) = self.selected_entry().cloned() {
            tracing::info!(id = %entry.id, title = %entry.title, "Entering theater");
            self.selected_game = Some(entry);
        }
    }

    /// Exit the theater. Catalog state is untouched.
    pub fn exit_theater(&mut self) {
        self.selected_game = None;
    }

    pub fn toggle_admin(&mut self) {
        self.admin_visible = !self.admin_visible;
        tracing::debug!(visible = self.admin_visible, "Admin panel toggled");
    }

    pub fn toggle_sidebar(&mut self) {
        self.sidebar_open = !self.sidebar_open;
    }

    /// Feed one typed character into the hidden trigger.
    ///
    /// Called for every character key before normal dispatch — the trigger is
    /// a global listener, independent of input focus. Returns whether the
    /// admin panel flipped.
    pub fn feed_secret(&mut self, c: char) -> bool {
        if self.secret.push(c) {
            tracing::info!("Hidden admin trigger matched");
            self.toggle_admin();
            return true;
        }
        false
    }

    /// The hero banner shows only when browsing unfiltered with the admin
    /// panel hidden. Display nuance only — no state depends on it.
    pub fn hero_visible(&self) -> bool {
        self.search_query.is_empty()
            && self.active_filter == CategoryFilter::All
            && !self.admin_visible
    }

    // ------------------------------------------------------------------
    // Mutations
    // ------------------------------------------------------------------

    /// Submit the admin form: validate, add to the catalog, reset the form.
    pub fn submit_form(&mut self) {
        let draft = match self.form.submit() {
            Ok(d) => d,
            Err(e) => {
                self.set_status(e.to_string());
                return;
            }
        };
        match self.catalog.add(draft) {
            Ok(entry) => {
                self.form.clear(self.default_category);
                self.set_status(format!("Added \"{}\" to library", entry.title));
                self.clamp_selection();
            }
            Err(e) => self.set_status(format!("Could not add game: {}", e)),
        }
    }

    /// Request deletion of the highlighted card.
    ///
    /// Delete is an admin affordance; outside the admin panel this is a
    /// no-op. With confirmation enabled this only arms `pending_confirm` —
    /// the catalog is not touched until the prompt is accepted.
    pub fn request_delete(&mut self) {
        if !self.admin_visible {
            return;
        }
        let Some(entry) = self.selected_entry() else {
            return;
        };
        let action = ConfirmAction::DeleteEntry {
            id: entry.id.clone(),
            title: entry.title.clone(),
        };
        if self.confirm_delete {
            self.pending_confirm = Some(action);
        } else {
            self.perform_delete(action);
        }
    }

    /// Accept the pending confirmation and perform the delete.
    pub fn confirm_pending(&mut self) {
        if let Some(action) = self.pending_confirm.take() {
            self.perform_delete(action);
        }
    }

    /// Decline the pending confirmation: catalog unchanged.
    pub fn cancel_pending(&mut self) {
        self.pending_confirm = None;
    }

    fn perform_delete(&mut self, action: ConfirmAction) {
        let ConfirmAction::DeleteEntry { id, title } = action;
        match self.catalog.remove(&id) {
            Ok(true) => {
                self.set_status(format!("Deleted \"{}\"", title));
                self.clamp_selection();
            }
            Ok(false) => {
                self.set_status("Game was already removed");
                self.clamp_selection();
            }
            Err(CatalogError::Persist(e)) => {
                // In-memory removal stands; the next successful save persists it
                self.set_status(format!("Deleted, but saving failed: {}", e));
                self.clamp_selection();
            }
            Err(e) => self.set_status(format!("Delete failed: {}", e)),
        }
    }

    // ------------------------------------------------------------------
    // Status messages
    // ------------------------------------------------------------------

    /// Set status message (auto-expires after 3 seconds).
    pub fn set_status(&mut self, msg: impl Into<Cow<'static, str>>) {
        self.status_message = Some((msg.into(), Instant::now()));
    }

    /// Clear the status message if older than 3 seconds.
    /// Returns true if a message was actually cleared.
    pub fn clear_expired_status(&mut self) -> bool {
        if let Some((_, time)) = &self.status_message {
            if time.elapsed().as_secs() >= 3 {
                self.status_message = None;
                return true;
            }
        }
        false
    }
}
