use serde::{Deserialize, Serialize};
use thiserror::Error;

// ============================================================================
// Error Types
// ============================================================================

/// Validation errors for a new-entry draft.
///
/// The store refuses drafts with any empty field; the error names the field
/// so the form can point the user at it.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DraftError {
    #[error("Field '{0}' is required")]
    EmptyField(&'static str),
}

// ============================================================================
// Categories
// ============================================================================

/// The closed set of game categories.
///
/// Serde round-trips as the exact display strings so the stored catalog
/// matches the original field values ("Action", "Sports", ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Action,
    Sports,
    Puzzle,
    Retro,
    Strategy,
}

impl Category {
    /// All categories in sidebar display order.
    pub const ALL: [Category; 5] = [
        Category::Action,
        Category::Sports,
        Category::Puzzle,
        Category::Retro,
        Category::Strategy,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Category::Action => "Action",
            Category::Sports => "Sports",
            Category::Puzzle => "Puzzle",
            Category::Retro => "Retro",
            Category::Strategy => "Strategy",
        }
    }

    /// Parse a category name, case-insensitively.
    ///
    /// Used for the `default_category` config key; unknown names are rejected
    /// so a typo falls back to the built-in default rather than silently
    /// mapping to something unexpected.
    pub fn parse(s: &str) -> Option<Category> {
        Category::ALL
            .into_iter()
            .find(|c| c.name().eq_ignore_ascii_case(s))
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Active sidebar filter: either everything or a single category.
///
/// `All` is a filter sentinel only — it is never stored on an entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    /// Whether an entry's category passes this filter.
    pub fn matches(self, category: Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(c) => c == category,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            CategoryFilter::All => "All",
            CategoryFilter::Only(c) => c.name(),
        }
    }

    /// Sidebar items: `All` first, then every category.
    pub fn sidebar_items() -> impl Iterator<Item = CategoryFilter> {
        std::iter::once(CategoryFilter::All).chain(Category::ALL.into_iter().map(CategoryFilter::Only))
    }
}

// ============================================================================
// Entries
// ============================================================================

/// One catalogued game: metadata plus resource links.
///
/// Serde field names match the stored document shape, which carries the
/// original camelCase `gameUrl` key. Neither URL field is validated for
/// reachability or format — they are opaque strings handed to the launcher.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameEntry {
    pub id: String,
    pub title: String,
    pub category: Category,
    pub thumbnail: String,
    #[serde(rename = "gameUrl")]
    pub game_url: String,
    pub description: String,
}

/// Field values for a new entry, before an id is assigned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryDraft {
    pub title: String,
    pub category: Category,
    pub game_url: String,
    pub thumbnail: String,
    pub description: String,
}

impl EntryDraft {
    /// Require all five fields non-empty. Whitespace-only counts as empty.
    pub fn validate(&self) -> Result<(), DraftError> {
        if self.title.trim().is_empty() {
            return Err(DraftError::EmptyField("title"));
        }
        if self.game_url.trim().is_empty() {
            return Err(DraftError::EmptyField("game URL"));
        }
        if self.thumbnail.trim().is_empty() {
            return Err(DraftError::EmptyField("thumbnail URL"));
        }
        if self.description.trim().is_empty() {
            return Err(DraftError::EmptyField("description"));
        }
        Ok(())
    }
}

// ============================================================================
// Seed Catalog
// ============================================================================

/// The built-in catalog used when no persisted library exists.
pub fn seed_catalog() -> Vec<GameEntry> {
    vec![
        GameEntry {
            id: "1".to_string(),
            title: "Hextris".to_string(),
            category: Category::Puzzle,
            thumbnail: "https://picsum.photos/seed/hextris/600/400".to_string(),
            game_url: "https://hextris.io/".to_string(),
            description: "Fast-paced hexagon matching puzzle.".to_string(),
        },
        GameEntry {
            id: "2".to_string(),
            title: "2048".to_string(),
            category: Category::Puzzle,
            thumbnail: "https://picsum.photos/seed/2048/600/400".to_string(),
            game_url: "https://play2048.co/".to_string(),
            description: "Join numbers to reach the 2048 tile.".to_string(),
        },
        GameEntry {
            id: "3".to_string(),
            title: "Cyber Racer".to_string(),
            category: Category::Action,
            thumbnail: "https://picsum.photos/seed/race/600/400".to_string(),
            game_url: "https://poki.com/en/g/cyber-cars-punk-racing".to_string(),
            description: "Neon-fueled high speed action.".to_string(),
        },
    ]
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_serde_uses_display_names() {
        let json = serde_json::to_string(&Category::Puzzle).unwrap();
        assert_eq!(json, "\"Puzzle\"");
        let back: Category = serde_json::from_str("\"Retro\"").unwrap();
        assert_eq!(back, Category::Retro);
    }

    #[test]
    fn test_category_parse_case_insensitive() {
        assert_eq!(Category::parse("strategy"), Some(Category::Strategy));
        assert_eq!(Category::parse("ACTION"), Some(Category::Action));
        assert_eq!(Category::parse("All"), None); // sentinel, not a category
        assert_eq!(Category::parse("Arcade"), None);
    }

    #[test]
    fn test_filter_all_matches_everything() {
        for cat in Category::ALL {
            assert!(CategoryFilter::All.matches(cat));
        }
    }

    #[test]
    fn test_filter_only_matches_exactly() {
        let f = CategoryFilter::Only(Category::Sports);
        assert!(f.matches(Category::Sports));
        assert!(!f.matches(Category::Puzzle));
    }

    #[test]
    fn test_sidebar_items_all_first() {
        let items: Vec<_> = CategoryFilter::sidebar_items().collect();
        assert_eq!(items.len(), 6);
        assert_eq!(items[0], CategoryFilter::All);
        assert_eq!(items[1], CategoryFilter::Only(Category::Action));
    }

    #[test]
    fn test_entry_serde_uses_original_field_names() {
        let entry = seed_catalog().remove(0);
        let json = serde_json::to_string(&entry).unwrap();
        assert!(json.contains("\"gameUrl\""));
        assert!(json.contains("\"thumbnail\""));
        let back: GameEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(back, seed_catalog()[0]);
    }

    #[test]
    fn test_draft_validation_names_empty_field() {
        let mut draft = EntryDraft {
            title: "Foo".to_string(),
            category: Category::Retro,
            game_url: "https://x".to_string(),
            thumbnail: "https://y".to_string(),
            description: "z".to_string(),
        };
        assert_eq!(draft.validate(), Ok(()));

        draft.description = "   ".to_string();
        assert_eq!(draft.validate(), Err(DraftError::EmptyField("description")));
    }

    #[test]
    fn test_seed_catalog_shape() {
        let seed = seed_catalog();
        assert_eq!(seed.len(), 3);
        assert_eq!(seed[1].title, "2048");
        // Ids unique
        let mut ids: Vec<_> = seed.iter().map(|e| e.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 3);
    }
}
