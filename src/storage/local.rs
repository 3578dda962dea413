//! Local filesystem storage backend
//!
//! Keys map to files under a base directory. All operations are synchronous.

use super::StorageError;
use std::path::PathBuf;

/// Filesystem storage rooted at a base directory
#[derive(Debug, Clone)]
pub struct LocalStorage {
    base_dir: PathBuf,
}

impl LocalStorage {
    /// Create a backend with a custom base directory
    pub fn with_base_dir(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    /// Resolve a key relative to the base directory
    fn resolve(&self, key: &str) -> PathBuf {
        self.base_dir.join(key)
    }

    /// Read a file's contents
    pub fn read(&self, key: &str) -> Result<Vec<u8>, StorageError> {
        std::fs::read(self.resolve(key)).map_err(StorageError::from)
    }

    /// Create or overwrite a file, creating parent directories as needed
    pub fn write(&self, key: &str, data: &[u8]) -> Result<(), StorageError> {
        let full_path = self.resolve(key);
        if let Some(parent) = full_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&full_path, data).map_err(StorageError::from)
    }

    /// Delete a file; a missing file is OK
    pub fn delete(&self, key: &str) -> Result<(), StorageError> {
        match std::fs::remove_file(self.resolve(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StorageError::from(e)),
        }
    }

    /// Check if a file exists
    pub fn exists(&self, key: &str) -> bool {
        self.resolve(key).exists()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn setup_test_dir() -> (TempDir, LocalStorage) {
        let dir = TempDir::new().unwrap();
        let storage = LocalStorage::with_base_dir(dir.path());
        (dir, storage)
    }

    #[test]
    fn test_write_and_read() {
        let (_dir, storage) = setup_test_dir();
        storage.write("state.ron", b"hello").unwrap();
        assert_eq!(storage.read("state.ron").unwrap(), b"hello");
    }

    #[test]
    fn test_read_not_found() {
        let (_dir, storage) = setup_test_dir();
        assert!(matches!(
            storage.read("nonexistent.ron"),
            Err(StorageError::NotFound(_))
        ));
    }

    #[test]
    fn test_write_creates_parent_dirs() {
        let (_dir, storage) = setup_test_dir();
        storage.write("state/nested/value.ron", b"data").unwrap();
        assert_eq!(storage.read("state/nested/value.ron").unwrap(), b"data");
    }

    #[test]
    fn test_delete() {
        let (dir, storage) = setup_test_dir();
        std::fs::write(dir.path().join("delete_me.ron"), "x").unwrap();

        storage.delete("delete_me.ron").unwrap();
        assert!(!dir.path().join("delete_me.ron").exists());

        // Deleting again should be OK
        assert!(storage.delete("delete_me.ron").is_ok());
    }

    #[test]
    fn test_exists() {
        let (dir, storage) = setup_test_dir();
        std::fs::write(dir.path().join("here.ron"), "x").unwrap();
        assert!(storage.exists("here.ron"));
        assert!(!storage.exists("not_here.ron"));
    }
}
