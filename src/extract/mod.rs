//! Extraction of court records from parsed pages
//!
//! Three layers, leaves first: generic text retrieval with a configurable
//! failure policy (`fields`), normalization of raw number elements into
//! labeled contact entries (`contacts`), and the per-page orchestration
//! that assembles one [`CourtRecord`](crate::model::CourtRecord) (`record`).

mod contacts;
mod fields;
mod record;

pub use contacts::normalize_entries;
pub use fields::{Extractor, Policy};
pub use record::build_record;

/// Non-fatal observations accumulated over a run and reported at the end.
///
/// Warnings never stop the crawl; they flag things like ambiguous selectors
/// so an operator can review the output afterwards.
#[derive(Debug, Default)]
pub struct Warnings {
    entries: Vec<String>,
}

impl Warnings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, message: impl Into<String>) {
        self.entries.push(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }
}
