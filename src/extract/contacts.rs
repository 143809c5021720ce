//! Contact entry normalization
//!
//! Turns raw number elements (phone tel-links or fax value nodes) into
//! labeled, classified entries. Labeling is heuristic: the immediately
//! preceding sibling element names the number when it has text; otherwise a
//! group with exactly one number is assumed to hold the primary number.
//! Pages with one unlabeled primary plus labeled numbers elsewhere can be
//! mis-tagged by that rule; that trade-off is accepted and kept as-is.

use crate::dom;
use crate::model::{ContactEntry, ASSUMED_PRIMARY, NO_LABEL};
use crate::{CourtError, Result};
use scraper::{ElementRef, Selector};

/// Class of the page section grouping one organizational unit's contacts
pub const CONTACT_GROUP_CLASS: &str = "ma__contact-group";

/// Matches "is a phone number" elements within a contact group
pub const NUMBER_LINK_SELECTOR: &str = r#".ma__content-link[href*="tel:"]"#;

/// Normalizes number elements into contact entries, preserving document
/// order. No deduplication: a number appearing twice yields two entries.
pub fn normalize_entries(handles: &[ElementRef<'_>]) -> Result<Vec<ContactEntry>> {
    let number_sel = Selector::parse(NUMBER_LINK_SELECTOR).map_err(|e| CourtError::Selector {
        expression: NUMBER_LINK_SELECTOR.to_string(),
        message: e.to_string(),
    })?;

    let mut entries = Vec::with_capacity(handles.len());
    for &el in handles {
        let number = dom::visible_text(el);
        let label = infer_label(el, &number_sel);
        entries.push(ContactEntry::new(number, label));
    }
    Ok(entries)
}

/// Label inference, in priority order: preceding-sibling text, then the
/// single-number-in-group assumption, then the explicit unknown label.
fn infer_label(el: ElementRef<'_>, number_sel: &Selector) -> String {
    if let Some(sibling) = dom::preceding_sibling_element(el) {
        let text = dom::element_text(sibling);
        if !text.is_empty() {
            return text;
        }
    }

    let numbers_in_group = dom::enclosing_group(el, CONTACT_GROUP_CLASS)
        .map(|group| group.select(number_sel).count())
        .unwrap_or(0);

    if numbers_in_group == 1 {
        ASSUMED_PRIMARY.to_string()
    } else {
        NO_LABEL.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::{run_query, Query};
    use scraper::Html;

    const PHONE_QUERY: Query =
        Query::Simple(r#".ma__contact-group .ma__content-link[href*="tel:"]"#);

    fn entries_from(html: &str) -> Vec<ContactEntry> {
        let doc = Html::parse_document(html);
        let handles = run_query(&doc, &PHONE_QUERY).unwrap();
        normalize_entries(&handles).unwrap()
    }

    #[test]
    fn test_label_from_preceding_sibling() {
        let entries = entries_from(
            r#"<div class="ma__contact-group">
                <span>Clerk's Office</span>
                <a class="ma__content-link" href="tel:+16175550100">(617) 555-0100</a>
                <span>Main Office</span>
                <a class="ma__content-link" href="tel:+16175550101">(617) 555-0101</a>
            </div>"#,
        );
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].label, "Clerk's Office");
        assert!(entries[0].is_clerk);
        assert_eq!(entries[1].label, "Main Office");
        assert!(!entries[1].is_clerk);
    }

    #[test]
    fn test_single_unlabeled_number_assumed_primary() {
        let entries = entries_from(
            r#"<div class="ma__contact-group">
                <a class="ma__content-link" href="tel:+16175550100">(617) 555-0100</a>
            </div>"#,
        );
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].number, "(617) 555-0100");
        assert_eq!(entries[0].label, ASSUMED_PRIMARY);
        assert!(!entries[0].is_clerk);
    }

    #[test]
    fn test_multiple_unlabeled_numbers_no_label_found() {
        let entries = entries_from(
            r#"<div class="ma__contact-group">
                <a class="ma__content-link" href="tel:+16175550100">(617) 555-0100</a>
                <a class="ma__content-link" href="tel:+16175550101">(617) 555-0101</a>
            </div>"#,
        );
        assert_eq!(entries.len(), 2);
        // The first link's preceding sibling is absent; the second link's
        // preceding sibling is the first link, whose text is non-empty, so
        // the heuristic labels it with that text. Only the first falls back.
        assert_eq!(entries[0].label, NO_LABEL);
    }

    #[test]
    fn test_two_isolated_unlabeled_numbers_both_no_label() {
        let entries = entries_from(
            r#"<div class="ma__contact-group">
                <p><a class="ma__content-link" href="tel:+16175550100">(617) 555-0100</a></p>
                <p><a class="ma__content-link" href="tel:+16175550101">(617) 555-0101</a></p>
            </div>"#,
        );
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].label, NO_LABEL);
        assert_eq!(entries[1].label, NO_LABEL);
    }

    #[test]
    fn test_empty_sibling_text_falls_through() {
        let entries = entries_from(
            r#"<div class="ma__contact-group">
                <span>  </span>
                <a class="ma__content-link" href="tel:+16175550100">(617) 555-0100</a>
            </div>"#,
        );
        assert_eq!(entries[0].label, ASSUMED_PRIMARY);
    }

    #[test]
    fn test_screen_reader_text_excluded_from_number() {
        let entries = entries_from(
            r#"<div class="ma__contact-group">
                <a class="ma__content-link" href="tel:+16175550100"><span class="visually-hidden">Call</span>(617) 555-0100</a>
            </div>"#,
        );
        assert_eq!(entries[0].number, "(617) 555-0100");
    }

    #[test]
    fn test_duplicates_preserved_in_document_order() {
        let entries = entries_from(
            r#"<div class="ma__contact-group">
                <span>Clerk</span>
                <a class="ma__content-link" href="tel:+16175550100">(617) 555-0100</a>
                <span>Clerk</span>
                <a class="ma__content-link" href="tel:+16175550100">(617) 555-0100</a>
            </div>"#,
        );
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0], entries[1]);
    }

    #[test]
    fn test_fax_value_without_tel_links_no_label() {
        // Fax numbers are plain value nodes; a fax-only group holds zero
        // tel-links, so an unlabeled fax never becomes the assumed primary.
        let doc = Html::parse_document(
            r#"<div class="ma__contact-group">
                <h2 class="ma__contact-group__name">Fax</h2>
                <span class="ma__contact-group__value">(617) 555-0199</span>
            </div>"#,
        );
        let query = Query::GroupScoped {
            group: ".ma__contact-group",
            heading: ".ma__contact-group__name",
            heading_contains: "Fax",
            target: ".ma__contact-group__value",
        };
        let handles = run_query(&doc, &query).unwrap();
        let entries = normalize_entries(&handles).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].number, "(617) 555-0199");
        // Preceding sibling is the "Fax" heading, which has text.
        assert_eq!(entries[0].label, "Fax");
    }
}
