//! Storage backends
//!
//! The migration reads export collections and writes configuration files
//! through [`StorageBackend`], so the orchestrator and verifier work the same
//! against a directory on disk or an in-memory tree.
//!
//! Paths are `/`-separated strings.

pub mod filesystem;
pub mod memory;

pub use filesystem::FileSystemStorageBackend;
pub use memory::MemoryStorageBackend;

/// Error from a storage backend
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("File not found: {0}")]
    FileNotFound(String),
    #[error("IO error: {0}")]
    IoError(String),
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

/// Synchronous file access used by migration and verification.
pub trait StorageBackend {
    /// Read a file's bytes. Missing files are [`StorageError::FileNotFound`].
    fn read_file(&self, path: &str) -> Result<Vec<u8>, StorageError>;

    /// Write a file, creating missing parent directories.
    fn write_file(&self, path: &str, content: &[u8]) -> Result<(), StorageError>;

    fn file_exists(&self, path: &str) -> Result<bool, StorageError>;

    fn dir_exists(&self, path: &str) -> Result<bool, StorageError>;

    fn create_dir(&self, path: &str) -> Result<(), StorageError>;

    /// Read a file as UTF-8 text.
    fn read_to_string(&self, path: &str) -> Result<String, StorageError> {
        let bytes = self.read_file(path)?;
        String::from_utf8(bytes)
            .map_err(|e| StorageError::SerializationError(format!("Invalid UTF-8: {}", e)))
    }
}

/// Join a directory and a file name with a single `/`.
pub fn join_path(dir: &str, file_name: &str) -> String {
    if dir.is_empty() {
        file_name.to_string()
    } else {
        format!("{}/{}", dir.trim_end_matches('/'), file_name)
    }
}
