//! JSON snapshot store
//!
//! A whole-array mirror of the crawled records, kept for programmatic
//! re-consumption independently of the tabular store's fixed-width schema.
//! Each save rewrites the entire array; a record is written at its
//! collection index, so a reprocessed page overwrites its own snapshot
//! entry instead of duplicating it.

use crate::model::{ContactEntry, CourtRecord, NONE_DETECTED};
use crate::storage::safe_write;
use crate::Result;
use serde::{Deserialize, Serialize};
use std::io::ErrorKind;
use std::path::PathBuf;

/// Boundary representation of a court record: every scalar field holds
/// extracted text or the sentinel, never an empty string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SnapshotRecord {
    pub url: String,
    pub name: String,
    pub description: String,
    pub hours: String,
    pub physical_address: String,
    pub mailing_address: String,
    pub ada_coordinators: Vec<String>,
    pub notes: String,
    pub phones: Vec<ContactEntry>,
    pub faxes: Vec<ContactEntry>,
}

impl From<&CourtRecord> for SnapshotRecord {
    fn from(record: &CourtRecord) -> Self {
        Self {
            url: record.url.clone(),
            name: record.name.clone(),
            description: record.description.clone(),
            hours: record.hours.clone(),
            physical_address: record.physical_address.clone(),
            mailing_address: record
                .mailing_address
                .clone()
                .unwrap_or_else(|| NONE_DETECTED.to_string()),
            ada_coordinators: record.ada_coordinators.clone(),
            notes: record.notes.clone().unwrap_or_else(|| NONE_DETECTED.to_string()),
            phones: record.phones.clone(),
            faxes: record.faxes.clone(),
        }
    }
}

impl SnapshotRecord {
    /// Filler for index gaps (possible only if the snapshot file was removed
    /// while the state file survived).
    fn placeholder() -> Self {
        Self {
            url: NONE_DETECTED.to_string(),
            name: NONE_DETECTED.to_string(),
            description: NONE_DETECTED.to_string(),
            hours: NONE_DETECTED.to_string(),
            physical_address: NONE_DETECTED.to_string(),
            mailing_address: NONE_DETECTED.to_string(),
            ada_coordinators: Vec::new(),
            notes: NONE_DETECTED.to_string(),
            phones: Vec::new(),
            faxes: Vec::new(),
        }
    }
}

/// Whole-array JSON store, loaded once and rewritten per save
#[derive(Debug)]
pub struct SnapshotStore {
    path: PathBuf,
    records: Vec<SnapshotRecord>,
}

impl SnapshotStore {
    /// Opens the snapshot, loading any existing array. A missing file is a
    /// fresh snapshot; other IO errors propagate.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let records = match std::fs::read_to_string(&path) {
            Ok(content) => serde_json::from_str(&content)?,
            Err(e) if e.kind() == ErrorKind::NotFound => Vec::new(),
            Err(e) => return Err(e.into()),
        };
        Ok(Self { path, records })
    }

    /// Drops all loaded records and rewrites an empty array (fresh run).
    pub fn reset(&mut self) -> Result<()> {
        self.records.clear();
        self.save()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Writes `record` at `index` and rewrites the array on disk.
    pub fn store(&mut self, index: usize, record: &CourtRecord) -> Result<()> {
        let snapshot = SnapshotRecord::from(record);
        if index < self.records.len() {
            self.records[index] = snapshot;
        } else {
            while self.records.len() < index {
                self.records.push(SnapshotRecord::placeholder());
            }
            self.records.push(snapshot);
        }
        self.save()
    }

    fn save(&self) -> Result<()> {
        let contents = serde_json::to_string_pretty(&self.records)?;
        safe_write(&self.path, contents.as_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn record(name: &str) -> CourtRecord {
        CourtRecord {
            url: "https://example.org/court".to_string(),
            name: name.to_string(),
            description: "Desc".to_string(),
            hours: "9-5".to_string(),
            physical_address: "1 Court St".to_string(),
            mailing_address: None,
            ada_coordinators: vec!["Jane Doe".to_string()],
            notes: None,
            phones: vec![ContactEntry::new(
                "(617) 555-0100".to_string(),
                "Clerk".to_string(),
            )],
            faxes: vec![],
        }
    }

    #[test]
    fn test_store_and_reload() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("courts.json");

        let mut store = SnapshotStore::open(&path).unwrap();
        assert!(store.is_empty());
        store.store(0, &record("First")).unwrap();
        store.store(1, &record("Second")).unwrap();

        let reloaded = SnapshotStore::open(&path).unwrap();
        assert_eq!(reloaded.len(), 2);
        assert_eq!(reloaded.records[0].name, "First");
        assert_eq!(reloaded.records[1].phones[0].is_clerk, true);
    }

    #[test]
    fn test_indexed_overwrite_does_not_duplicate() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("courts.json");

        let mut store = SnapshotStore::open(&path).unwrap();
        store.store(0, &record("First")).unwrap();
        store.store(0, &record("First again")).unwrap();
        assert_eq!(store.len(), 1);
        assert_eq!(store.records[0].name, "First again");
    }

    #[test]
    fn test_sentinels_applied_at_boundary() {
        let snapshot = SnapshotRecord::from(&record("Court"));
        assert_eq!(snapshot.notes, NONE_DETECTED);
        assert_eq!(snapshot.mailing_address, NONE_DETECTED);
        assert!(!snapshot.notes.is_empty());
    }

    #[test]
    fn test_gap_padded_with_placeholders() {
        let dir = tempdir().unwrap();
        let mut store = SnapshotStore::open(dir.path().join("courts.json")).unwrap();
        store.store(2, &record("Third")).unwrap();
        assert_eq!(store.len(), 3);
        assert_eq!(store.records[0].name, NONE_DETECTED);
        assert_eq!(store.records[2].name, "Third");
    }

    #[test]
    fn test_reset_clears_existing() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("courts.json");
        let mut store = SnapshotStore::open(&path).unwrap();
        store.store(0, &record("First")).unwrap();
        store.reset().unwrap();
        assert!(SnapshotStore::open(&path).unwrap().is_empty());
    }
}
