//! Floor registry
//!
//! The authoritative list of floors the elevator can visit. Records are
//! keyed by an integer level and kept sorted ascending. The registry is
//! mutated only by whole-list replacement; the editor builds candidate
//! lists with the pure transforms at the bottom of this module and commits
//! them through `replace_all`.

use serde::{Deserialize, Serialize};
use crate::media::MediaAsset;

/// A single addressable stop in the elevator
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FloorRecord {
    /// Unique level number (not required to be contiguous except as
    /// maintained by deletion, which compacts the level space)
    pub level: i32,
    /// Display name shown in the cab and on the panel
    pub name: String,
    /// Optional flavor text shown in the cab interior
    #[serde(default)]
    pub description: Option<String>,
    /// Optional interior media (image, video, audio, document)
    #[serde(default)]
    pub interior: Option<MediaAsset>,
    /// Optional ambient music, looped while stopped on this floor
    #[serde(default)]
    pub music: Option<MediaAsset>,
}

/// The editable fields of a floor, without the level key.
///
/// The form in the floor editor works on a draft; the level is assigned by
/// the add/update transforms, never typed by the user.
#[derive(Debug, Clone, Default)]
pub struct FloorDraft {
    pub name: String,
    pub description: Option<String>,
    pub interior: Option<MediaAsset>,
    pub music: Option<MediaAsset>,
}

impl FloorDraft {
    /// Build a draft from an existing record (for editing)
    pub fn from_record(record: &FloorRecord) -> Self {
        Self {
            name: record.name.clone(),
            description: record.description.clone(),
            interior: record.interior.clone(),
            music: record.music.clone(),
        }
    }

    fn into_record(self, level: i32) -> FloorRecord {
        FloorRecord {
            level,
            name: self.name,
            description: self.description,
            interior: self.interior,
            music: self.music,
        }
    }
}

/// Error type for registry operations
#[derive(Debug, Clone, PartialEq)]
pub enum RegistryError {
    /// Two records share the same level
    DuplicateLevel(i32),
    /// No record with the given level exists
    UnknownLevel(i32),
}

impl std::fmt::Display for RegistryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RegistryError::DuplicateLevel(level) => {
                write!(f, "duplicate floor level: {}", level)
            }
            RegistryError::UnknownLevel(level) => {
                write!(f, "no floor with level: {}", level)
            }
        }
    }
}

impl std::error::Error for RegistryError {}

/// Ordered collection of floor records, unique by level
#[derive(Debug, Clone, Default)]
pub struct FloorRegistry {
    records: Vec<FloorRecord>,
}

impl FloorRegistry {
    /// Build a registry from a list of records, rejecting duplicate levels
    pub fn from_records(records: Vec<FloorRecord>) -> Result<Self, RegistryError> {
        let mut registry = Self::default();
        registry.replace_all(records)?;
        Ok(registry)
    }

    /// Replace the entire floor list. The sole mutator.
    ///
    /// Accepts any list with unique levels; the caller is responsible for
    /// producing a consistent list (see the transforms below).
    pub fn replace_all(&mut self, mut records: Vec<FloorRecord>) -> Result<(), RegistryError> {
        if let Some(level) = first_duplicate_level(&records) {
            return Err(RegistryError::DuplicateLevel(level));
        }
        records.sort_by_key(|r| r.level);
        self.records = records;
        Ok(())
    }

    /// All records, sorted ascending by level
    pub fn records(&self) -> &[FloorRecord] {
        &self.records
    }

    pub fn get(&self, level: i32) -> Option<&FloorRecord> {
        self.records.iter().find(|r| r.level == level)
    }

    pub fn contains(&self, level: i32) -> bool {
        self.get(level).is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Highest level in the registry, None when empty
    pub fn max_level(&self) -> Option<i32> {
        self.records.iter().map(|r| r.level).max()
    }
}

fn first_duplicate_level(records: &[FloorRecord]) -> Option<i32> {
    let mut seen = std::collections::HashSet::new();
    for record in records {
        if !seen.insert(record.level) {
            return Some(record.level);
        }
    }
    None
}

// ─────────────────────────────────────────────────────────────────────────────
// Editor-layer list transforms
//
// Pure functions from a current list + operation to a candidate list.
// The editor commits their output through `replace_all`.
// ─────────────────────────────────────────────────────────────────────────────

/// Append a new floor at `max(existing levels) + 1`, or level 0 when empty
pub fn with_floor_added(records: &[FloorRecord], draft: FloorDraft) -> Vec<FloorRecord> {
    let level = records.iter().map(|r| r.level).max().map_or(0, |max| max + 1);
    let mut out = records.to_vec();
    out.push(draft.into_record(level));
    out
}

/// Replace the record at `level` with the draft, keeping its level.
/// Other records are untouched; no renumbering.
pub fn with_floor_updated(records: &[FloorRecord], level: i32, draft: FloorDraft) -> Vec<FloorRecord> {
    records
        .iter()
        .map(|r| {
            if r.level == level {
                draft.clone().into_record(level)
            } else {
                r.clone()
            }
        })
        .collect()
}

/// Remove the record at `level` and compact the remaining levels to a
/// contiguous zero-based run, preserving their relative order.
pub fn with_floor_deleted(records: &[FloorRecord], level: i32) -> Vec<FloorRecord> {
    let mut remaining: Vec<FloorRecord> = records
        .iter()
        .filter(|r| r.level != level)
        .cloned()
        .collect();
    remaining.sort_by_key(|r| r.level);
    for (index, record) in remaining.iter_mut().enumerate() {
        record.level = index as i32;
    }
    remaining
}

/// The six floors the tower starts with
pub fn default_floors() -> Vec<FloorRecord> {
    let floor = |level: i32, name: &str, description: &str| FloorRecord {
        level,
        name: name.to_string(),
        description: Some(description.to_string()),
        interior: None,
        music: None,
    };
    vec![
        floor(0, "Lobby", "The gateway to the spire. Neon signs reflect off the polished chrome floors."),
        floor(1, "Residential", "Compact, high-tech living spaces for the city's inhabitants."),
        floor(2, "Hydroponics", "Lush, bioluminescent plants provide the tower with clean air and sustenance."),
        floor(3, "Mainframe", "The digital heart of the tower. Endless rows of servers hum with raw data."),
        floor(4, "Sky Lounge", "A high-class establishment with panoramic views of the neon-drenched cityscape."),
        floor(5, "Observatory", "A view of the cosmos, far above the city lights. The stars are digital tonight."),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn named(level: i32, name: &str) -> FloorRecord {
        FloorRecord {
            level,
            name: name.to_string(),
            description: None,
            interior: None,
            music: None,
        }
    }

    #[test]
    fn test_replace_all_rejects_duplicate_levels() {
        let mut registry = FloorRegistry::default();
        let result = registry.replace_all(vec![named(0, "a"), named(1, "b"), named(0, "c")]);
        assert_eq!(result, Err(RegistryError::DuplicateLevel(0)));
        // Rejected replacement leaves the registry untouched
        assert!(registry.is_empty());
    }

    #[test]
    fn test_replace_all_sorts_by_level() {
        let registry =
            FloorRegistry::from_records(vec![named(3, "c"), named(0, "a"), named(1, "b")]).unwrap();
        let levels: Vec<i32> = registry.records().iter().map(|r| r.level).collect();
        assert_eq!(levels, vec![0, 1, 3]);
    }

    #[test]
    fn test_add_assigns_max_plus_one() {
        let records = vec![named(0, "a"), named(5, "b")];
        let out = with_floor_added(&records, FloorDraft { name: "new".into(), ..Default::default() });
        assert_eq!(out.last().unwrap().level, 6);
        assert_eq!(out.len(), 3);
    }

    #[test]
    fn test_add_to_empty_assigns_zero() {
        let out = with_floor_added(&[], FloorDraft { name: "first".into(), ..Default::default() });
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].level, 0);
    }

    #[test]
    fn test_delete_compacts_levels() {
        let records = vec![named(0, "a"), named(1, "b"), named(2, "c"), named(3, "d")];
        let out = with_floor_deleted(&records, 2);
        let levels: Vec<i32> = out.iter().map(|r| r.level).collect();
        let names: Vec<&str> = out.iter().map(|r| r.name.as_str()).collect();
        // Original levels {0, 1, 3} remapped in ascending order to {0, 1, 2}
        assert_eq!(levels, vec![0, 1, 2]);
        assert_eq!(names, vec!["a", "b", "d"]);
    }

    #[test]
    fn test_delete_from_sparse_levels() {
        let records = vec![named(2, "a"), named(7, "b"), named(9, "c")];
        let out = with_floor_deleted(&records, 7);
        let levels: Vec<i32> = out.iter().map(|r| r.level).collect();
        assert_eq!(levels, vec![0, 1]);
        assert_eq!(out[0].name, "a");
        assert_eq!(out[1].name, "c");
    }

    #[test]
    fn test_update_keeps_level_and_neighbors() {
        let records = vec![named(0, "a"), named(1, "b"), named(2, "c")];
        let draft = FloorDraft { name: "renamed".into(), ..Default::default() };
        let out = with_floor_updated(&records, 1, draft);
        assert_eq!(out.len(), 3);
        assert_eq!(out[1].level, 1);
        assert_eq!(out[1].name, "renamed");
        assert_eq!(out[0].name, "a");
        assert_eq!(out[2].name, "c");
    }

    #[test]
    fn test_default_floors_are_valid() {
        let registry = FloorRegistry::from_records(default_floors()).unwrap();
        assert_eq!(registry.len(), 6);
        assert_eq!(registry.max_level(), Some(5));
        assert_eq!(registry.get(0).unwrap().name, "Lobby");
    }
}
