//! Per-page record assembly
//!
//! Runs every extraction against one parsed page, in a fixed order. The
//! selectors target the mass.gov court location template; they are not
//! expected to work on arbitrary sites.

use crate::dom::{self, Query};
use crate::extract::contacts::normalize_entries;
use crate::extract::fields::Extractor;
use crate::extract::Warnings;
use crate::model::CourtRecord;
use crate::{CourtError, Result};
use scraper::Html;

const NAME_QUERY: Query = Query::Simple("h1.ma__page-header__title");
const DESCRIPTION_QUERY: Query = Query::Simple("#overview + *");
const HOURS_QUERY: Query = Query::Simple("#hours + *");
const ADDRESS_QUERY: Query = Query::Simple(".ma__contact-group__address");
const ADA_QUERY: Query = Query::Simple("#accessibility + * strong");
const PHONE_QUERY: Query = Query::Simple(r#".ma__contact-group .ma__content-link[href*="tel:"]"#);
const FAX_QUERY: Query = Query::GroupScoped {
    group: ".ma__contact-group",
    heading: ".ma__contact-group__name",
    heading_contains: "Fax",
    target: ".ma__contact-group__value",
};

const ADDRESS_CLASS: &str = "ma__contact-group__address";
const DIRECTIONS_CLASS: &str = "ma__contact-group__directions";

/// Extracts one complete court record from a parsed page.
///
/// Name, description, hours, and physical address are required; their
/// absence fails the page (and with it the run). Everything else degrades
/// to `None` or an empty list.
pub fn build_record(url: &str, doc: &Html, warnings: &mut Warnings) -> Result<CourtRecord> {
    let mut ex = Extractor::new(doc, url, warnings);

    let name = ex.required_text("name", &NAME_QUERY)?;
    let description = ex.required_text("description", &DESCRIPTION_QUERY)?;
    let hours = dom::collapse_whitespace(&ex.required_text("hours", &HOURS_QUERY)?);
    let (physical_address, mailing_address) = addresses(url, doc)?;
    let ada_coordinators = ex.multi_text(&ADA_QUERY)?;
    let notes = notes(doc)?;

    let phone_handles = dom::run_query(doc, &PHONE_QUERY)?;
    let phones = normalize_entries(&phone_handles)?;

    let fax_handles = dom::run_query(doc, &FAX_QUERY)?;
    let faxes = normalize_entries(&fax_handles)?;

    Ok(CourtRecord {
        url: url.to_string(),
        name,
        description,
        hours,
        physical_address,
        mailing_address,
        ada_coordinators,
        notes,
        phones,
        faxes,
    })
}

/// First address element is the physical address (required); a second one,
/// when the template shows it, is the mailing address. Extra matches are
/// expected here, so this bypasses the single-selector ambiguity warning.
fn addresses(url: &str, doc: &Html) -> Result<(String, Option<String>)> {
    let matches = dom::run_query(doc, &ADDRESS_QUERY)?;
    let physical = matches
        .first()
        .map(|el| dom::element_text(*el))
        .ok_or(CourtError::MissingField {
            field: "physical_address",
            url: url.to_string(),
        })?;
    let mailing = matches
        .get(1)
        .map(|el| dom::element_text(*el))
        .filter(|text| !text.is_empty());
    Ok((physical, mailing))
}

/// Free-text notes live as siblings of the address inside its contact-group
/// item; the address itself and the directions link are not notes.
fn notes(doc: &Html) -> Result<Option<String>> {
    let matches = dom::run_query(doc, &ADDRESS_QUERY)?;
    let Some(address_el) = matches.first() else {
        return Ok(None);
    };
    let Some(item) = dom::parent_element(*address_el) else {
        return Ok(None);
    };

    let mut parts = Vec::new();
    for child in item.children().filter_map(scraper::ElementRef::wrap) {
        if dom::has_class(child, ADDRESS_CLASS) || dom::has_class(child, DIRECTIONS_CLASS) {
            continue;
        }
        let text = dom::element_text(child);
        if !text.is_empty() {
            parts.push(dom::collapse_whitespace(&text));
        }
    }

    if parts.is_empty() {
        Ok(None)
    } else {
        Ok(Some(parts.join(" ")))
    }
}
