//! Keybinding registry — maps actions to key events with config overrides.
//!
//! A data-driven registry instead of hardcoded match arms, so user overrides
//! from config.toml and the help overlay both work from one table.
use crossterm::event::{KeyCode, KeyModifiers};
use std::collections::HashMap;

// ============================================================================
// Action Enum
// ============================================================================

/// All user-facing actions that can be triggered by keybindings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Quit,
    NavDown,
    NavUp,
    PrevCategory,
    NextCategory,
    ToggleSidebar,
    ToggleAdmin,
    EnterSearch,
    Select,
    LaunchGame,
    DeleteEntry,
    CloseTheater,
    ShowHelp,
    Back,
}

impl Action {
    /// Human-readable description for the help screen.
    pub fn describe(self) -> &'static str {
        match self {
            Self::Quit => "Quit application",
            Self::NavDown => "Next game in grid",
            Self::NavUp => "Previous game in grid",
            Self::PrevCategory => "Previous category filter",
            Self::NextCategory => "Next category filter",
            Self::ToggleSidebar => "Toggle category sidebar",
            Self::ToggleAdmin => "Toggle admin panel",
            Self::EnterSearch => "Search the library",
            Self::Select => "Open game in theater",
            Self::LaunchGame => "Launch game in browser",
            Self::DeleteEntry => "Delete selected game (admin)",
            Self::CloseTheater => "Exit theater",
            Self::ShowHelp => "Show help",
            Self::Back => "Dismiss / clear",
        }
    }
}

/// Parse an action name from config into an Action.
fn parse_action_name(name: &str) -> Option<Action> {
    match name {
        "quit" => Some(Action::Quit),
        "nav_down" => Some(Action::NavDown),
        "nav_up" => Some(Action::NavUp),
        "prev_category" => Some(Action::PrevCategory),
        "next_category" => Some(Action::NextCategory),
        "toggle_sidebar" => Some(Action::ToggleSidebar),
        "toggle_admin" => Some(Action::ToggleAdmin),
        "search" => Some(Action::EnterSearch),
        "select" => Some(Action::Select),
        "launch" => Some(Action::LaunchGame),
        "delete" => Some(Action::DeleteEntry),
        "close_theater" => Some(Action::CloseTheater),
        "help" => Some(Action::ShowHelp),
        "back" => Some(Action::Back),
        _ => None,
    }
}

// ============================================================================
// Context Enum
// ============================================================================

/// Dispatch context — determines which bindings are active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Context {
    Global,
    Browse,
    Theater,
}

// ============================================================================
// Key Specification
// ============================================================================

/// A key event: code + modifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeySpec {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeySpec {
    pub const fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    pub const fn plain(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::NONE)
    }

    pub const fn ctrl(c: char) -> Self {
        Self::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }
}

/// Parse a key string from config into a KeySpec.
///
/// Supported formats:
/// - Single char: "q", "j", "/"
/// - Named keys: "Enter", "Esc", "Tab", "Up", "Down", "Backspace"
/// - Modifier combos: "Ctrl+d"
/// - Function keys: "F1" through "F12"
fn parse_key_string(s: &str) -> Option<KeySpec> {
    let s = s.trim();

    if let Some(rest) = s.strip_prefix("Ctrl+") {
        let rest = rest.trim();
        if rest.len() == 1 {
            let c = rest.chars().next()?;
            return Some(KeySpec::ctrl(c));
        }
        return None;
    }

    match s.to_lowercase().as_str() {
        "enter" | "return" => return Some(KeySpec::plain(KeyCode::Enter)),
        "esc" | "escape" => return Some(KeySpec::plain(KeyCode::Esc)),
        "tab" => return Some(KeySpec::plain(KeyCode::Tab)),
        "up" => return Some(KeySpec::plain(KeyCode::Up)),
        "down" => return Some(KeySpec::plain(KeyCode::Down)),
        "left" => return Some(KeySpec::plain(KeyCode::Left)),
        "right" => return Some(KeySpec::plain(KeyCode::Right)),
        "backspace" => return Some(KeySpec::plain(KeyCode::Backspace)),
        "space" => return Some(KeySpec::plain(KeyCode::Char(' '))),
        _ => {}
    }

    if s.starts_with('F') || s.starts_with('f') {
        if let Ok(n) = s[1..].parse::<u8>() {
            if (1..=12).contains(&n) {
                return Some(KeySpec::plain(KeyCode::F(n)));
            }
        }
    }

    if s.len() == 1 {
        let c = s.chars().next()?;
        return Some(KeySpec::plain(KeyCode::Char(c)));
    }

    None
}

/// Format a KeySpec as a human-readable string for the help screen.
fn format_key(key: &KeySpec) -> String {
    let modifier = if key.modifiers.contains(KeyModifiers::CONTROL) {
        "Ctrl+"
    } else {
        ""
    };

    let key_name = match key.code {
        KeyCode::Char(c) => c.to_string(),
        KeyCode::Enter => "Enter".to_string(),
        KeyCode::Esc => "Esc".to_string(),
        KeyCode::Tab => "Tab".to_string(),
        KeyCode::Up => "Up".to_string(),
        KeyCode::Down => "Down".to_string(),
        KeyCode::Left => "Left".to_string(),
        KeyCode::Right => "Right".to_string(),
        KeyCode::Backspace => "Backspace".to_string(),
        KeyCode::F(n) => format!("F{}", n),
        _ => "?".to_string(),
    };

    format!("{}{}", modifier, key_name)
}

// ============================================================================
// Keybinding Registry
// ============================================================================

/// Registry of keybindings, supporting default bindings and config overrides.
///
/// Lookup is O(1) via HashMap. The same key can map to different actions in
/// different contexts; lookup tries the specific context, then Global.
pub struct KeybindingRegistry {
    lookup: HashMap<(Context, KeySpec), Action>,
    /// All bindings in registration order for help screen enumeration
    bindings: Vec<(Context, KeySpec, Action)>,
}

impl Default for KeybindingRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl KeybindingRegistry {
    pub fn new() -> Self {
        let mut registry = Self {
            lookup: HashMap::new(),
            bindings: Vec::new(),
        };
        registry.register_defaults();
        registry
    }

    fn bind(&mut self, context: Context, key: KeySpec, action: Action) {
        self.lookup.insert((context, key), action);
        self.bindings.push((context, key, action));
    }

    fn register_defaults(&mut self) {
        use KeyCode::*;

        // === Global ===
        self.bind(Context::Global, KeySpec::ctrl('c'), Action::Quit);
        self.bind(Context::Global, KeySpec::plain(Char('q')), Action::Quit);
        self.bind(Context::Global, KeySpec::plain(Char('?')), Action::ShowHelp);
        self.bind(Context::Global, KeySpec::plain(Char('s')), Action::ToggleAdmin);
        self.bind(Context::Global, KeySpec::plain(Char('c')), Action::ToggleSidebar);
        self.bind(Context::Global, KeySpec::plain(Esc), Action::Back);

        // === Browse view ===
        self.bind(Context::Browse, KeySpec::plain(Char('j')), Action::NavDown);
        self.bind(Context::Browse, KeySpec::plain(Down), Action::NavDown);
        self.bind(Context::Browse, KeySpec::plain(Char('k')), Action::NavUp);
        self.bind(Context::Browse, KeySpec::plain(Up), Action::NavUp);
        self.bind(Context::Browse, KeySpec::plain(Char('h')), Action::PrevCategory);
        self.bind(Context::Browse, KeySpec::plain(Left), Action::PrevCategory);
        self.bind(Context::Browse, KeySpec::plain(Char('l')), Action::NextCategory);
        self.bind(Context::Browse, KeySpec::plain(Right), Action::NextCategory);
        self.bind(Context::Browse, KeySpec::plain(Char('/')), Action::EnterSearch);
        self.bind(Context::Browse, KeySpec::plain(Enter), Action::Select);
        self.bind(Context::Browse, KeySpec::plain(Char('o')), Action::LaunchGame);
        self.bind(Context::Browse, KeySpec::plain(Char('d')), Action::DeleteEntry);
        self.bind(Context::Browse, KeySpec::plain(Delete), Action::DeleteEntry);

        // === Theater view ===
        self.bind(Context::Theater, KeySpec::plain(Esc), Action::CloseTheater);
        self.bind(Context::Theater, KeySpec::plain(Char('x')), Action::CloseTheater);
        self.bind(Context::Theater, KeySpec::plain(Char('o')), Action::LaunchGame);
        self.bind(Context::Theater, KeySpec::plain(Enter), Action::LaunchGame);
    }

    /// Apply user overrides from the config keybindings map.
    ///
    /// Keys are action names (e.g., "quit", "nav_down"); values are key
    /// strings (e.g., "q", "Ctrl+d", "F5"). Returns warnings for entries
    /// that could not be applied.
    pub fn apply_overrides(&mut self, overrides: &HashMap<String, String>) -> Vec<String> {
        let mut warnings = Vec::new();

        for (action_name, key_str) in overrides {
            let action = match parse_action_name(action_name) {
                Some(a) => a,
                None => {
                    warnings.push(format!("Unknown action '{}', ignoring", action_name));
                    continue;
                }
            };

            let key = match parse_key_string(key_str) {
                Some(k) => k,
                None => {
                    warnings.push(format!(
                        "Cannot parse key '{}' for action '{}', ignoring",
                        key_str, action_name
                    ));
                    continue;
                }
            };

            // Rebind in every context the action was previously bound in
            let contexts_for_action: Vec<Context> = self
                .bindings
                .iter()
                .filter(|(_, _, a)| *a == action)
                .map(|(c, _, _)| *c)
                .collect();

            self.lookup.retain(|_, a| *a != action);
            self.bindings.retain(|(_, _, a)| *a != action);

            for ctx in contexts_for_action {
                self.bind(ctx, key, action);
            }

            tracing::info!(action = %action_name, key = %key_str, "Applied keybinding override");
        }

        warnings
    }

    /// Look up the action for a key in a context, falling back to Global.
    pub fn action_for_key(
        &self,
        code: KeyCode,
        modifiers: KeyModifiers,
        context: Context,
    ) -> Option<Action> {
        let key = KeySpec::new(code, modifiers);

        if let Some(&action) = self.lookup.get(&(context, key)) {
            return Some(action);
        }

        if context != Context::Global {
            if let Some(&action) = self.lookup.get(&(Context::Global, key)) {
                return Some(action);
            }
        }

        None
    }

    /// All bindings as (key, description) pairs for the help overlay.
    pub fn help_entries(&self) -> Vec<(String, &'static str)> {
        self.bindings
            .iter()
            .map(|(_, key, action)| (format_key(key), action.describe()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_quit_binding() {
        let registry = KeybindingRegistry::new();
        assert_eq!(
            registry.action_for_key(KeyCode::Char('q'), KeyModifiers::NONE, Context::Browse),
            Some(Action::Quit)
        );
    }

    #[test]
    fn test_context_specific_beats_global_fallback() {
        let registry = KeybindingRegistry::new();
        // Esc is Back globally but CloseTheater inside the theater
        assert_eq!(
            registry.action_for_key(KeyCode::Esc, KeyModifiers::NONE, Context::Theater),
            Some(Action::CloseTheater)
        );
        assert_eq!(
            registry.action_for_key(KeyCode::Esc, KeyModifiers::NONE, Context::Browse),
            Some(Action::Back)
        );
    }

    #[test]
    fn test_unbound_key_returns_none() {
        let registry = KeybindingRegistry::new();
        assert_eq!(
            registry.action_for_key(KeyCode::Char('z'), KeyModifiers::NONE, Context::Browse),
            None
        );
    }

    #[test]
    fn test_override_rebinds_in_all_contexts() {
        let mut registry = KeybindingRegistry::new();
        let mut overrides = HashMap::new();
        overrides.insert("quit".to_string(), "Ctrl+q".to_string());

        let warnings = registry.apply_overrides(&overrides);
        assert!(warnings.is_empty());

        assert_eq!(
            registry.action_for_key(KeyCode::Char('q'), KeyModifiers::CONTROL, Context::Browse),
            Some(Action::Quit)
        );
        assert_eq!(
            registry.action_for_key(KeyCode::Char('q'), KeyModifiers::NONE, Context::Browse),
            None
        );
    }

    #[test]
    fn test_bad_override_warns_and_keeps_default() {
        let mut registry = KeybindingRegistry::new();
        let mut overrides = HashMap::new();
        overrides.insert("warp_speed".to_string(), "w".to_string());
        overrides.insert("quit".to_string(), "NotAKey+++".to_string());

        let warnings = registry.apply_overrides(&overrides);
        assert_eq!(warnings.len(), 2);
        assert_eq!(
            registry.action_for_key(KeyCode::Char('q'), KeyModifiers::NONE, Context::Browse),
            Some(Action::Quit)
        );
    }

    #[test]
    fn test_parse_key_strings() {
        assert_eq!(
            parse_key_string("F5"),
            Some(KeySpec::plain(KeyCode::F(5)))
        );
        assert_eq!(
            parse_key_string("enter"),
            Some(KeySpec::plain(KeyCode::Enter))
        );
        assert_eq!(parse_key_string("Ctrl+d"), Some(KeySpec::ctrl('d')));
        assert_eq!(parse_key_string("F99"), None);
    }

    #[test]
    fn test_help_entries_nonempty() {
        let registry = KeybindingRegistry::new();
        let entries = registry.help_entries();
        assert!(entries.len() >= 10);
        assert!(entries.iter().any(|(_, d)| *d == "Quit application"));
    }
}
