//! The catalog: game entries, the store that owns them, and the filter engine.

pub mod filter;
mod store;
mod types;

pub use store::{CatalogError, CatalogStore};
pub use types::{seed_catalog, Category, CategoryFilter, DraftError, EntryDraft, GameEntry};
