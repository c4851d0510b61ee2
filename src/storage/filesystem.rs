//! Local filesystem storage backend

use super::{StorageBackend, StorageError};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Storage backend over the local filesystem.
///
/// Relative paths are resolved against `base_path`.
#[derive(Debug, Clone)]
pub struct FileSystemStorageBackend {
    base_path: PathBuf,
}

impl FileSystemStorageBackend {
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }

    /// Backend rooted at the process working directory.
    pub fn current_dir() -> Self {
        Self::new(".")
    }

    fn resolve(&self, path: &str) -> PathBuf {
        let path = Path::new(path);
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.base_path.join(path)
        }
    }
}

impl StorageBackend for FileSystemStorageBackend {
    fn read_file(&self, path: &str) -> Result<Vec<u8>, StorageError> {
        std::fs::read(self.resolve(path)).map_err(|e| match e.kind() {
            ErrorKind::NotFound => StorageError::FileNotFound(path.to_string()),
            _ => StorageError::IoError(format!("Failed to read {}: {}", path, e)),
        })
    }

    fn write_file(&self, path: &str, content: &[u8]) -> Result<(), StorageError> {
        let full_path = self.resolve(path);
        if let Some(parent) = full_path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                StorageError::IoError(format!("Failed to create directory for {}: {}", path, e))
            })?;
        }
        std::fs::write(&full_path, content)
            .map_err(|e| StorageError::IoError(format!("Failed to write {}: {}", path, e)))
    }

    fn file_exists(&self, path: &str) -> Result<bool, StorageError> {
        Ok(self.resolve(path).is_file())
    }

    fn dir_exists(&self, path: &str) -> Result<bool, StorageError> {
        Ok(self.resolve(path).is_dir())
    }

    fn create_dir(&self, path: &str) -> Result<(), StorageError> {
        std::fs::create_dir_all(self.resolve(path))
            .map_err(|e| StorageError::IoError(format!("Failed to create {}: {}", path, e)))
    }
}
