//! Generic field extraction with configurable failure policy
//!
//! Absence is reported as `None` (optional fields) or an error (required
//! fields). Sentinel strings are applied later, at the serialization
//! boundary; nothing here ever returns an empty-string placeholder.

use crate::dom::{self, Query};
use crate::extract::Warnings;
use crate::{CourtError, Result};
use scraper::Html;

/// What a missing field means for the page being extracted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Policy {
    /// Core identity/location field; absence fails the whole page
    Required,
    /// Degrades to `None`, serialized later as the sentinel
    Optional,
}

/// Per-page extraction context: the parsed document, the page URL for
/// error reporting, and the run-level warning list.
pub struct Extractor<'a> {
    doc: &'a Html,
    url: &'a str,
    warnings: &'a mut Warnings,
}

impl<'a> Extractor<'a> {
    pub fn new(doc: &'a Html, url: &'a str, warnings: &'a mut Warnings) -> Self {
        Self { doc, url, warnings }
    }

    pub fn url(&self) -> &str {
        self.url
    }

    pub fn doc(&self) -> &'a Html {
        self.doc
    }

    /// Retrieves the trimmed text of the first element matching `query`.
    ///
    /// More than one match is a selector-ambiguity warning, not an error;
    /// the first match wins. Zero matches follow the policy.
    pub fn single_text(
        &mut self,
        field: &'static str,
        query: &Query,
        policy: Policy,
    ) -> Result<Option<String>> {
        let matches = dom::run_query(self.doc, query)?;

        if matches.len() > 1 {
            self.warnings.push(format!(
                "{}: selector '{}' for '{}' matched {} elements; used the first",
                self.url,
                query,
                field,
                matches.len()
            ));
        }

        match matches.first() {
            Some(el) => Ok(Some(dom::element_text(*el))),
            None => match policy {
                Policy::Required => Err(CourtError::MissingField {
                    field,
                    url: self.url.to_string(),
                }),
                Policy::Optional => Ok(None),
            },
        }
    }

    /// Required single-element text; absence is fatal for the page.
    pub fn required_text(&mut self, field: &'static str, query: &Query) -> Result<String> {
        Ok(self
            .single_text(field, query, Policy::Required)?
            .unwrap_or_default())
    }

    /// Retrieves the trimmed text of every element matching `query`, with a
    /// single trailing period stripped from each part.
    ///
    /// Zero matches yield an empty vector; the multi-text sentinel is
    /// applied where the parts are serialized.
    pub fn multi_text(&mut self, query: &Query) -> Result<Vec<String>> {
        let matches = dom::run_query(self.doc, query)?;
        Ok(matches
            .iter()
            .map(|el| dom::element_text(*el).trim_end_matches('.').to_string())
            .filter(|text| !text.is_empty())
            .collect())
    }
}
