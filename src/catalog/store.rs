//! The catalog store: owns the entry list and its persistence round trip.

use super::types::{seed_catalog, DraftError, EntryDraft, GameEntry};
use crate::storage::{StorageError, StoragePort};
use thiserror::Error;

/// Errors from catalog mutations.
///
/// An `Invalid` draft leaves the catalog untouched. A `Persist` failure means
/// the in-memory mutation succeeded but the write-through did not — the
/// caller surfaces it and the next successful save will persist everything.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error(transparent)]
    Invalid(#[from] DraftError),

    #[error(transparent)]
    Persist(#[from] StorageError),

    #[error("Failed to serialize library: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Owns the ordered entry list; every successful mutation re-serializes the
/// whole catalog to the storage port. Catalogs are tens of entries, so full
/// rewrites are cheaper than any delta scheme would be to get right.
pub struct CatalogStore {
    entries: Vec<GameEntry>,
    port: Box<dyn StoragePort>,
}

impl CatalogStore {
    /// Load the catalog from the port, falling back to the built-in seed set.
    ///
    /// Absent content and unparseable content are treated identically: the
    /// seed catalog is used and nothing is written until the first mutation.
    /// A read error from the backend itself also falls back, at warn level —
    /// no load failure is surfaced to the user.
    pub fn load(port: Box<dyn StoragePort>) -> Self {
        let entries = match port.load() {
            Ok(Some(document)) => match serde_json::from_str::<Vec<GameEntry>>(&document) {
                Ok(entries) => {
                    tracing::info!(count = entries.len(), "Loaded library");
                    entries
                }
                Err(e) => {
                    tracing::warn!(error = %e, "Stored library is unparseable, using seed catalog");
                    seed_catalog()
                }
            },
            Ok(None) => {
                tracing::info!("No stored library, using seed catalog");
                seed_catalog()
            }
            Err(e) => {
                tracing::warn!(error = %e, "Failed to read stored library, using seed catalog");
                seed_catalog()
            }
        };
        Self { entries, port }
    }

    /// Current in-memory snapshot, insertion order (newest first).
    pub fn entries(&self) -> &[GameEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Validate the draft, assign a fresh id, prepend, and persist.
    ///
    /// Returns the created entry. Ids are millisecond timestamps, bumped past
    /// the most recent existing id so two adds within one millisecond still
    /// get distinct, monotonic ids.
    pub fn add(&mut self, draft: EntryDraft) -> Result<GameEntry, CatalogError> {
        draft.validate()?;

        let entry = GameEntry {
            id: self.fresh_id(),
            title: draft.title,
            category: draft.category,
            thumbnail: draft.thumbnail,
            game_url: draft.game_url,
            description: draft.description,
        };

        self.entries.insert(0, entry.clone());
        self.persist()?;
        tracing::info!(id = %entry.id, title = %entry.title, "Added game to library");
        Ok(entry)
    }

    /// Remove the entry with the given id, if present, and persist.
    ///
    /// Returns whether a removal occurred. A miss persists nothing. The UI is
    /// responsible for confirming with the user first — removal is
    /// irreversible, there is no trash.
    pub fn remove(&mut self, id: &str) -> Result<bool, CatalogError> {
        let before = self.entries.len();
        self.entries.retain(|e| e.id != id);
        if self.entries.len() == before {
            tracing::debug!(id, "Remove requested for unknown id");
            return Ok(false);
        }
        self.persist()?;
        tracing::info!(id, "Removed game from library");
        Ok(true)
    }

    /// Serialize and fully overwrite the stored document.
    ///
    /// A serialization failure aborts the write — the previous document must
    /// never be replaced with anything but the full catalog.
    fn persist(&mut self) -> Result<(), CatalogError> {
        let document = serde_json::to_string(&self.entries)?;
        self.port.save(&document)?;
        Ok(())
    }

    fn fresh_id(&self) -> String {
        let mut candidate = chrono::Utc::now().timestamp_millis();
        // The newest entry is at the front; bump past any id at least as large
        if let Some(latest) = self
            .entries
            .iter()
            .filter_map(|e| e.id.parse::<i64>().ok())
            .max()
        {
            if candidate <= latest {
                candidate = latest + 1;
            }
        }
        candidate.to_string()
    }
}
