//! Core data types for extracted court records
//!
//! Internally, absence is represented with `Option` and empty vectors.
//! The fixed sentinel strings exist only for the serialization boundary;
//! nothing in the crate branches on them.

use serde::{Deserialize, Serialize};

/// Sentinel written when an optional text field yielded nothing
pub const NONE_DETECTED: &str = "None detected";

/// Sentinel filling unused phone/fax slots in the tabular store
pub const NOT_AVAILABLE: &str = "N/A";

/// Label given to the single unlabeled number in a contact group
pub const ASSUMED_PRIMARY: &str = "Assumed primary number";

/// Label given when no label could be inferred at all
pub const NO_LABEL: &str = "No label found";

/// One labeled, classified phone or fax number
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactEntry {
    pub number: String,
    pub label: String,
    pub is_clerk: bool,
}

impl ContactEntry {
    /// Creates an entry, deriving the clerk flag from the label.
    ///
    /// The flag is computed independently per entry; a page may carry
    /// several clerk-flagged numbers.
    pub fn new(number: String, label: String) -> Self {
        let is_clerk = label.to_lowercase().contains("clerk");
        Self {
            number,
            label,
            is_clerk,
        }
    }
}

/// One fully extracted page, immutable after construction
#[derive(Debug, Clone, PartialEq)]
pub struct CourtRecord {
    pub url: String,
    pub name: String,
    pub description: String,
    pub hours: String,
    pub physical_address: String,
    pub mailing_address: Option<String>,
    pub ada_coordinators: Vec<String>,
    pub notes: Option<String>,
    pub phones: Vec<ContactEntry>,
    pub faxes: Vec<ContactEntry>,
}

/// Joins multi-element texts the way the extractor contract requires:
/// one trailing period per run, elements separated by `". "`.
///
/// Returns the sentinel (never an empty string) when nothing was extracted.
pub fn format_multi(parts: &[String]) -> String {
    if parts.is_empty() {
        return NONE_DETECTED.to_string();
    }
    let mut joined = parts
        .iter()
        .map(|p| p.trim_end_matches('.'))
        .collect::<Vec<_>>()
        .join(". ");
    joined.push('.');
    joined
}
