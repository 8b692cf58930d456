//! In-memory storage fake for tests.

use super::{StorageError, StoragePort};
use std::sync::{Arc, Mutex};

#[derive(Debug, Default)]
struct Inner {
    document: Option<String>,
    save_count: usize,
}

/// Holds the document in memory behind a shared handle.
///
/// Clones share the same document, so a test can keep one handle, move a
/// clone into a catalog store, and later open a second store over the same
/// handle to simulate an application reload.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    inner: Arc<Mutex<Inner>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with pre-seeded content, as if a previous session had saved it.
    pub fn with_document(document: impl Into<String>) -> Self {
        let store = Self::new();
        store.inner.lock().unwrap().document = Some(document.into());
        store
    }

    /// Number of saves performed, for test assertions.
    pub fn save_count(&self) -> usize {
        self.inner.lock().unwrap().save_count
    }

    /// Current document, for test assertions.
    pub fn document(&self) -> Option<String> {
        self.inner.lock().unwrap().document.clone()
    }
}

impl StoragePort for MemoryStore {
    fn load(&self) -> Result<Option<String>, StorageError> {
        Ok(self.inner.lock().unwrap().document.clone())
    }

    fn save(&mut self, document: &str) -> Result<(), StorageError> {
        let mut inner = self.inner.lock().unwrap();
        inner.document = Some(document.to_string());
        inner.save_count += 1;
        Ok(())
    }
}
