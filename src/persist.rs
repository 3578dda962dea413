//! Persistence adapter
//!
//! Round-trips serializable state slices to the injected key-value store,
//! best-effort. Decode and encode failures fall back to defaults or leave
//! the prior stored value untouched; nothing here ever raises to the
//! caller. Values are encoded as RON.

use serde::de::DeserializeOwned;
use serde::Serialize;
use crate::storage::{Storage, StorageError};

/// Store keys for the tracked state slices
pub mod keys {
    /// The whole floor registry, as a list of records
    pub const FLOORS: &str = "floors";
    /// The level the cab is resting at
    pub const CURRENT_FLOOR: &str = "currentFloor";
    /// Sound effects on/off
    pub const SFX_ENABLED: &str = "sfxEnabled";
    /// Travel speed multiplier
    pub const TRAVEL_SPEED: &str = "travelSpeed";
    /// Visual theme
    pub const THEME: &str = "theme";
}

fn entry_key(key: &str) -> String {
    format!("state/{}.ron", key)
}

/// Best-effort state persistence over an injected storage backend
pub struct StateStore {
    storage: Storage,
}

impl StateStore {
    pub fn new(storage: Storage) -> Self {
        Self { storage }
    }

    /// Load the value stored under `key`, falling back to `default` on a
    /// missing key or any decode failure. Failures other than a missing
    /// key are logged.
    pub fn load<T: DeserializeOwned>(&self, key: &str, default: T) -> T {
        let bytes = match self.storage.read(&entry_key(key)) {
            Ok(bytes) => bytes,
            Err(StorageError::NotFound(_)) => return default,
            Err(e) => {
                eprintln!("Failed to read state '{}': {}", key, e);
                return default;
            }
        };
        let text = match String::from_utf8(bytes) {
            Ok(text) => text,
            Err(e) => {
                eprintln!("Stored state '{}' is not UTF-8: {}", key, e);
                return default;
            }
        };
        match ron::from_str(&text) {
            Ok(value) => value,
            Err(e) => {
                eprintln!("Failed to decode state '{}': {}", key, e);
                default
            }
        }
    }

    /// Encode and store a value under `key`. On failure the prior stored
    /// value is left untouched (no partial write) and the error is logged.
    pub fn save<T: Serialize>(&self, key: &str, value: &T) {
        let text = match ron::ser::to_string_pretty(value, ron::ser::PrettyConfig::default()) {
            Ok(text) => text,
            Err(e) => {
                eprintln!("Failed to encode state '{}': {}", key, e);
                return;
            }
        };
        if let Err(e) = self.storage.write(&entry_key(key), text.as_bytes()) {
            eprintln!("Failed to store state '{}': {}", key, e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::floor::{default_floors, FloorRecord};
    use crate::prefs::Theme;
    use tempfile::TempDir;

    #[test]
    fn test_round_trip_in_memory() {
        let store = StateStore::new(Storage::memory());
        store.save(keys::TRAVEL_SPEED, &1.7f32);
        store.save(keys::THEME, &Theme::Outrun);
        store.save(keys::CURRENT_FLOOR, &4i32);

        assert_eq!(store.load(keys::TRAVEL_SPEED, 1.0f32), 1.7);
        assert_eq!(store.load(keys::THEME, Theme::Cyberpunk), Theme::Outrun);
        assert_eq!(store.load(keys::CURRENT_FLOOR, 0i32), 4);
    }

    #[test]
    fn test_round_trip_on_disk() {
        let dir = TempDir::new().unwrap();
        let store = StateStore::new(Storage::local(dir.path()));
        let floors = default_floors();
        store.save(keys::FLOORS, &floors);

        let loaded: Vec<FloorRecord> = store.load(keys::FLOORS, Vec::new());
        assert_eq!(loaded.len(), floors.len());
        assert_eq!(loaded[3].name, "Mainframe");
    }

    #[test]
    fn test_missing_key_returns_default() {
        let store = StateStore::new(Storage::memory());
        assert_eq!(store.load(keys::SFX_ENABLED, true), true);
    }

    #[test]
    fn test_corrupt_bytes_return_default() {
        let storage = Storage::memory();
        storage
            .write("state/theme.ron", b"{{{ not ron at all")
            .unwrap();
        let store = StateStore::new(storage);
        // A corrupted store yields the supplied default, never an error
        assert_eq!(store.load(keys::THEME, Theme::Vaporwave), Theme::Vaporwave);
    }

    #[test]
    fn test_save_overwrites_previous_value() {
        let store = StateStore::new(Storage::memory());
        store.save(keys::CURRENT_FLOOR, &1i32);
        store.save(keys::CURRENT_FLOOR, &2i32);
        assert_eq!(store.load(keys::CURRENT_FLOOR, 0i32), 2);
    }
}
