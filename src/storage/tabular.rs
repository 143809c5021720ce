//! Fixed-width tabular store
//!
//! One `;`-delimited row per record, with a constant number of phone and
//! fax slots regardless of how many numbers a page actually had. Missing
//! slots are padded with a sentinel triple; entries beyond the caps are
//! dropped, which is a documented limitation and not an error. The CSV
//! writer's quoting neutralizes embedded delimiters and newlines in
//! free-text fields.

use crate::model::{format_multi, ContactEntry, CourtRecord, NONE_DETECTED, NOT_AVAILABLE};
use crate::storage::ensure_parent_dir;
use crate::Result;
use std::fs::{File, OpenOptions};
use std::path::PathBuf;

const DELIMITER: u8 = b';';

/// Leading fixed columns before the phone slots
const LEAD_COLUMNS: [&str; 5] = ["name", "url", "description", "physical_address", "hours"];

/// Trailing fixed columns after the fax slots
const TAIL_COLUMNS: [&str; 3] = ["ada_coordinators", "notes", "mailing_address"];

/// Append-only fixed-schema store for flattened court records
#[derive(Debug, Clone)]
pub struct TabularStore {
    path: PathBuf,
    max_phones: usize,
    max_faxes: usize,
}

impl TabularStore {
    pub fn new(path: impl Into<PathBuf>, max_phones: usize, max_faxes: usize) -> Self {
        Self {
            path: path.into(),
            max_phones,
            max_faxes,
        }
    }

    /// Row width is derived from the caps, never counted imperatively.
    pub fn row_width(&self) -> usize {
        LEAD_COLUMNS.len() + 3 * self.max_phones + 3 * self.max_faxes + TAIL_COLUMNS.len()
    }

    /// Truncates the store and writes the header row. Called only when a
    /// run starts from `collection_index == 0`.
    pub fn write_header(&self) -> Result<()> {
        ensure_parent_dir(&self.path)?;
        let mut writer = csv::WriterBuilder::new()
            .delimiter(DELIMITER)
            .from_writer(File::create(&self.path)?);
        writer.write_record(self.header_fields())?;
        writer.flush()?;
        Ok(())
    }

    /// Appends one flattened record row.
    pub fn append(&self, record: &CourtRecord) -> Result<()> {
        ensure_parent_dir(&self.path)?;
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        let mut writer = csv::WriterBuilder::new().delimiter(DELIMITER).from_writer(file);
        writer.write_record(self.row_fields(record))?;
        writer.flush()?;
        Ok(())
    }

    fn header_fields(&self) -> Vec<String> {
        let mut fields: Vec<String> = LEAD_COLUMNS.iter().map(|c| c.to_string()).collect();
        for i in 1..=self.max_phones {
            fields.push(format!("phone{}_number", i));
            fields.push(format!("phone{}_label", i));
            fields.push(format!("phone{}_has_clerk", i));
        }
        for i in 1..=self.max_faxes {
            fields.push(format!("fax{}_number", i));
            fields.push(format!("fax{}_label", i));
            fields.push(format!("fax{}_has_clerk", i));
        }
        fields.extend(TAIL_COLUMNS.iter().map(|c| c.to_string()));
        fields
    }

    /// Flattens a record to exactly `row_width()` fields.
    pub fn row_fields(&self, record: &CourtRecord) -> Vec<String> {
        let mut fields = vec![
            record.name.clone(),
            record.url.clone(),
            record.description.clone(),
            record.physical_address.clone(),
            record.hours.clone(),
        ];
        fields.extend(contact_slots(&record.phones, self.max_phones));
        fields.extend(contact_slots(&record.faxes, self.max_faxes));
        fields.push(format_multi(&record.ada_coordinators));
        fields.push(record.notes.clone().unwrap_or_else(|| NONE_DETECTED.to_string()));
        fields.push(
            record
                .mailing_address
                .clone()
                .unwrap_or_else(|| NONE_DETECTED.to_string()),
        );
        fields
    }
}

/// Pads or truncates entries to exactly `cap` slots of three fields each.
fn contact_slots(entries: &[ContactEntry], cap: usize) -> Vec<String> {
    let mut slots = Vec::with_capacity(3 * cap);
    for i in 0..cap {
        match entries.get(i) {
            Some(entry) => {
                slots.push(entry.number.clone());
                slots.push(entry.label.clone());
                slots.push(entry.is_clerk.to_string());
            }
            None => {
                slots.push(NOT_AVAILABLE.to_string());
                slots.push(NOT_AVAILABLE.to_string());
                slots.push(false.to_string());
            }
        }
    }
    slots
}
