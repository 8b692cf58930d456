//! File-backed storage: one JSON document at a fixed path.

use super::{StorageError, StoragePort};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

/// Production storage backend: the library document lives at a single path
/// (normally `<data-dir>/library.json`).
///
/// Writes go through a write-to-temp-then-rename sequence so the document is
/// never left half-written. The temp filename carries a randomized suffix so
/// a stale temp file from a crashed run cannot collide with a live write.
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl StoragePort for JsonFileStore {
    fn load(&self) -> Result<Option<String>, StorageError> {
        match std::fs::read_to_string(&self.path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "No library file found");
                Ok(None)
            }
            Err(e) => Err(StorageError::Read(e)),
        }
    }

    fn save(&mut self, document: &str) -> Result<(), StorageError> {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos())
            .unwrap_or(0);
        let temp_path = self.path.with_extension(format!("tmp.{:016x}", nanos));

        let mut temp_file = std::fs::OpenOptions::new()
            .write(true)
            .create_new(true) // Fails atomically if the temp path already exists
            .open(&temp_path)
            .map_err(StorageError::Write)?;

        let result = temp_file
            .write_all(document.as_bytes())
            .and_then(|_| temp_file.sync_all());
        if let Err(e) = result {
            let _ = std::fs::remove_file(&temp_path);
            return Err(StorageError::Write(e));
        }
        drop(temp_file);

        // Rename is atomic on POSIX filesystems; Windows needs the old file gone first
        #[cfg(windows)]
        if self.path.exists() {
            std::fs::remove_file(&self.path).map_err(StorageError::Write)?;
        }

        if let Err(e) = std::fs::rename(&temp_path, &self.path) {
            let _ = std::fs::remove_file(&temp_path);
            return Err(StorageError::Write(e));
        }

        tracing::debug!(path = %self.path.display(), bytes = document.len(), "Library saved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_store(name: &str) -> (PathBuf, JsonFileStore) {
        let dir = std::env::temp_dir().join(format!("nebula_store_test_{}", name));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("library.json");
        let _ = std::fs::remove_file(&path);
        (dir, JsonFileStore::new(path))
    }

    #[test]
    fn test_load_missing_file_returns_none() {
        let (dir, store) = temp_store("missing");
        assert!(store.load().unwrap().is_none());
        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_save_then_load_round_trips() {
        let (dir, mut store) = temp_store("roundtrip");
        store.save("[{\"id\":\"1\"}]").unwrap();
        assert_eq!(store.load().unwrap().as_deref(), Some("[{\"id\":\"1\"}]"));
        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_save_overwrites_previous_document() {
        let (dir, mut store) = temp_store("overwrite");
        store.save("first").unwrap();
        store.save("second").unwrap();
        assert_eq!(store.load().unwrap().as_deref(), Some("second"));
        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_save_leaves_no_temp_files() {
        let (dir, mut store) = temp_store("no_temp");
        store.save("{}").unwrap();
        let leftovers = std::fs::read_dir(&dir)
            .unwrap()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_name().to_string_lossy().contains("tmp"))
            .count();
        assert_eq!(leftovers, 0);
        std::fs::remove_dir_all(&dir).ok();
    }
}
