//! In-memory storage backend

use super::{StorageBackend, StorageError};
use std::collections::{BTreeMap, BTreeSet};
use std::sync::{PoisonError, RwLock};

/// Storage backend holding files in memory.
///
/// Directories exist when created explicitly or when a file lives beneath them.
#[derive(Debug, Default)]
pub struct MemoryStorageBackend {
    files: RwLock<BTreeMap<String, Vec<u8>>>,
    dirs: RwLock<BTreeSet<String>>,
}

fn normalize(path: &str) -> String {
    let trimmed = path.trim_end_matches('/');
    trimmed.strip_prefix("./").unwrap_or(trimmed).to_string()
}

fn poisoned<T>(_: T) -> StorageError {
    StorageError::IoError("Storage lock poisoned".to_string())
}

impl MemoryStorageBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a file; returns `self` for chaining.
    ///
    /// A poisoned lock is recovered, not skipped.
    pub fn with_file(self, path: &str, content: impl Into<Vec<u8>>) -> Self {
        self.files
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(normalize(path), content.into());
        self
    }

    /// All stored file paths, sorted.
    pub fn paths(&self) -> Vec<String> {
        self.files
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .keys()
            .cloned()
            .collect()
    }
}

impl StorageBackend for MemoryStorageBackend {
    fn read_file(&self, path: &str) -> Result<Vec<u8>, StorageError> {
        self.files
            .read()
            .map_err(poisoned)?
            .get(&normalize(path))
            .cloned()
            .ok_or_else(|| StorageError::FileNotFound(path.to_string()))
    }

    fn write_file(&self, path: &str, content: &[u8]) -> Result<(), StorageError> {
        self.files
            .write()
            .map_err(poisoned)?
            .insert(normalize(path), content.to_vec());
        Ok(())
    }

    fn file_exists(&self, path: &str) -> Result<bool, StorageError> {
        Ok(self
            .files
            .read()
            .map_err(poisoned)?
            .contains_key(&normalize(path)))
    }

    fn dir_exists(&self, path: &str) -> Result<bool, StorageError> {
        let dir = normalize(path);
        if dir.is_empty() || dir == "." || self.dirs.read().map_err(poisoned)?.contains(&dir) {
            return Ok(true);
        }
        let prefix = format!("{}/", dir);
        Ok(self
            .files
            .read()
            .map_err(poisoned)?
            .keys()
            .any(|key| key.starts_with(&prefix)))
    }

    fn create_dir(&self, path: &str) -> Result<(), StorageError> {
        self.dirs.write().map_err(poisoned)?.insert(normalize(path));
        Ok(())
    }
}
