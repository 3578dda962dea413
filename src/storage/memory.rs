//! In-memory storage backend
//!
//! Backs the WASM build (no filesystem) and tests. Contents are
//! session-only and die with the process.

use super::StorageError;
use std::cell::RefCell;
use std::collections::HashMap;

/// Map-backed storage; interior mutability because the app is
/// single-threaded and storage is shared behind `&self`
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: RefCell<HashMap<String, Vec<u8>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn read(&self, key: &str) -> Result<Vec<u8>, StorageError> {
        self.entries
            .borrow()
            .get(key)
            .cloned()
            .ok_or_else(|| StorageError::NotFound(key.to_string()))
    }

    pub fn write(&self, key: &str, data: &[u8]) -> Result<(), StorageError> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), data.to_vec());
        Ok(())
    }

    pub fn delete(&self, key: &str) -> Result<(), StorageError> {
        self.entries.borrow_mut().remove(key);
        Ok(())
    }

    pub fn exists(&self, key: &str) -> bool {
        self.entries.borrow().contains_key(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overwrite_replaces_value() {
        let storage = MemoryStorage::new();
        storage.write("k", b"one").unwrap();
        storage.write("k", b"two").unwrap();
        assert_eq!(storage.read("k").unwrap(), b"two");
    }
}
