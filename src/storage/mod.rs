//! Storage abstraction
//!
//! A key-value byte store injected into the persistence layer instead of a
//! process-wide singleton. Two backends: the local filesystem (native) and
//! an in-memory map (WASM builds and tests). All operations complete
//! immediately; nothing here touches the network.

pub mod local;
pub mod memory;

use local::LocalStorage;
use memory::MemoryStorage;
use std::fmt;

/// Storage error types
#[derive(Debug, Clone, PartialEq)]
pub enum StorageError {
    /// Key not found
    NotFound(String),
    /// Permission denied
    PermissionDenied(String),
    /// I/O error
    IoError(String),
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageError::NotFound(key) => write!(f, "not found: {}", key),
            StorageError::PermissionDenied(msg) => write!(f, "permission denied: {}", msg),
            StorageError::IoError(msg) => write!(f, "I/O error: {}", msg),
        }
    }
}

impl std::error::Error for StorageError {}

impl From<std::io::Error> for StorageError {
    fn from(e: std::io::Error) -> Self {
        match e.kind() {
            std::io::ErrorKind::NotFound => StorageError::NotFound(e.to_string()),
            std::io::ErrorKind::PermissionDenied => StorageError::PermissionDenied(e.to_string()),
            _ => StorageError::IoError(e.to_string()),
        }
    }
}

enum Backend {
    Local(LocalStorage),
    Memory(MemoryStorage),
}

/// Unified storage handle passed to the persistence layer
pub struct Storage {
    backend: Backend,
}

impl Storage {
    /// Filesystem-backed storage rooted at `base_dir`
    pub fn local(base_dir: impl Into<std::path::PathBuf>) -> Self {
        Self {
            backend: Backend::Local(LocalStorage::with_base_dir(base_dir)),
        }
    }

    /// In-memory storage; contents die with the process
    pub fn memory() -> Self {
        Self {
            backend: Backend::Memory(MemoryStorage::new()),
        }
    }

    /// Read the value stored under `key`
    pub fn read(&self, key: &str) -> Result<Vec<u8>, StorageError> {
        match &self.backend {
            Backend::Local(local) => local.read(key),
            Backend::Memory(memory) => memory.read(key),
        }
    }

    /// Create or overwrite the value stored under `key`
    pub fn write(&self, key: &str, data: &[u8]) -> Result<(), StorageError> {
        match &self.backend {
            Backend::Local(local) => local.write(key, data),
            Backend::Memory(memory) => memory.write(key, data),
        }
    }

    /// Remove the value stored under `key`; removing a missing key is OK
    pub fn delete(&self, key: &str) -> Result<(), StorageError> {
        match &self.backend {
            Backend::Local(local) => local.delete(key),
            Backend::Memory(memory) => memory.delete(key),
        }
    }

    /// Check whether a value is stored under `key`
    pub fn exists(&self, key: &str) -> bool {
        match &self.backend {
            Backend::Local(local) => local.exists(key),
            Backend::Memory(memory) => memory.exists(key),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_backend_round_trip() {
        let storage = Storage::memory();
        storage.write("a.ron", b"payload").unwrap();
        assert_eq!(storage.read("a.ron").unwrap(), b"payload");
        assert!(storage.exists("a.ron"));

        storage.delete("a.ron").unwrap();
        assert!(!storage.exists("a.ron"));
        assert!(matches!(storage.read("a.ron"), Err(StorageError::NotFound(_))));
    }

    #[test]
    fn test_delete_missing_key_is_ok() {
        let storage = Storage::memory();
        assert!(storage.delete("never-written").is_ok());
    }
}
