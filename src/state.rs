//! Crawl lifecycle state
//!
//! Two pieces: the in-memory phase the run is currently in, and the durable
//! resume index. The index is the sole source of truth for resumption; it
//! counts URLs fully processed *and* persisted, and is advanced only after
//! a record's row append succeeds.

use crate::storage::safe_write;
use crate::{CourtError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::io::ErrorKind;
use std::path::Path;

/// Phase of the crawl loop, used for logging and loop bookkeeping
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CrawlPhase {
    /// Not yet started
    Idle,
    /// Navigating to the current URL
    Fetching,
    /// Building the record from the fetched page
    Extracting,
    /// Appending the record and saving the resume index
    Persisting,
    /// URL list exhausted
    Done,
    /// Fatal failure; remaining URLs were not processed
    Aborted,
}

impl CrawlPhase {
    /// Terminal phases end the run; no further URLs are processed.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Done | Self::Aborted)
    }

    pub fn is_active(&self) -> bool {
        matches!(self, Self::Fetching | Self::Extracting | Self::Persisting)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Fetching => "fetching",
            Self::Extracting => "extracting",
            Self::Persisting => "persisting",
            Self::Done => "done",
            Self::Aborted => "aborted",
        }
    }
}

impl fmt::Display for CrawlPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Durable resume position: the number of URLs fully processed and persisted
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrawlState {
    pub collection_index: usize,
}

impl CrawlState {
    /// Loads the state file; a file that does not exist yet means a fresh
    /// crawl (index 0). Other IO errors propagate.
    pub fn load(path: &Path) -> Result<Self> {
        match std::fs::read_to_string(path) {
            Ok(content) => Ok(serde_json::from_str(&content)?),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(e.into()),
        }
    }

    /// Overwrites the state file, creating the parent directory if needed.
    pub fn save(&self, path: &Path) -> Result<()> {
        let contents = serde_json::to_string_pretty(self)?;
        safe_write(path, contents.as_bytes())
    }

    /// Enforces `0 <= collection_index <= urls.len()`.
    pub fn check_bounds(&self, url_count: usize) -> Result<()> {
        if self.collection_index > url_count {
            return Err(CourtError::State(format!(
                "collection_index {} exceeds URL list length {}",
                self.collection_index, url_count
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_phase_predicates() {
        assert!(CrawlPhase::Done.is_terminal());
        assert!(CrawlPhase::Aborted.is_terminal());
        assert!(!CrawlPhase::Fetching.is_terminal());
        assert!(CrawlPhase::Persisting.is_active());
        assert!(!CrawlPhase::Idle.is_active());
        assert_eq!(CrawlPhase::Extracting.as_str(), "extracting");
    }

    #[test]
    fn test_missing_state_file_is_fresh() {
        let dir = tempdir().unwrap();
        let state = CrawlState::load(&dir.path().join("state.json")).unwrap();
        assert_eq!(state.collection_index, 0);
    }

    #[test]
    fn test_save_and_reload() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested/state.json");
        let state = CrawlState { collection_index: 7 };
        state.save(&path).unwrap();
        assert_eq!(CrawlState::load(&path).unwrap(), state);
    }

    #[test]
    fn test_check_bounds() {
        let state = CrawlState { collection_index: 3 };
        assert!(state.check_bounds(3).is_ok());
        assert!(state.check_bounds(5).is_ok());
        assert!(state.check_bounds(2).is_err());
    }
}
