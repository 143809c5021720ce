//! Persistence of crawl output
//!
//! Two stores per run: an append-only fixed-width tabular store and a
//! whole-array JSON snapshot, plus the shared safe-write helpers they and
//! the state file use. A path whose file does not exist yet is self-healing
//! (created on first write); permission problems propagate as fatal.

mod snapshot;
mod tabular;

pub use snapshot::{SnapshotRecord, SnapshotStore};
pub use tabular::TabularStore;

use crate::Result;
use std::path::Path;

/// Creates the parent directory of `path` if it is absent.
pub fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}

/// Overwrites `path` with `contents`, creating the parent directory and the
/// file as needed.
pub fn safe_write(path: &Path, contents: &[u8]) -> Result<()> {
    ensure_parent_dir(path)?;
    std::fs::write(path, contents)?;
    Ok(())
}
