//! Persistence port for the catalog document.
//!
//! The catalog is stored as a single serialized document under one fixed
//! location — the storage backend is a key-value record, not a database.
//! The port trait decouples the catalog store from any concrete backend so
//! tests can run against an in-memory fake.

mod json_file;
mod memory;

pub use json_file::JsonFileStore;
pub use memory::MemoryStore;

use thiserror::Error;

/// Storage backend errors.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Failed to read library: {0}")]
    Read(#[source] std::io::Error),

    #[error("Failed to write library: {0}")]
    Write(#[source] std::io::Error),
}

/// A key-value storage backend holding the serialized catalog document.
///
/// `load` returns `None` when no document has ever been saved — the caller
/// treats that (and any parse failure of the returned content) as "use the
/// seed catalog". `save` fully overwrites the previous document.
pub trait StoragePort {
    fn load(&self) -> Result<Option<String>, StorageError>;
    fn save(&mut self, document: &str) -> Result<(), StorageError>;
}
