//! DOM query layer over parsed HTML documents
//!
//! The page template is addressed two ways: plain CSS selectors, and a
//! group-scoped form for the one lookup CSS cannot express (numbers inside
//! contact groups selected by their heading text). Both are resolved by a
//! single [`run_query`] function.

use crate::{CourtError, Result};
use scraper::{ElementRef, Html, Node, Selector};
use std::fmt;

/// Class marking screen-reader-only nodes; their text is never part of a
/// visible phone or fax number.
const VISUALLY_HIDDEN: &str = "visually-hidden";

/// A DOM query against the court page template
#[derive(Debug, Clone)]
pub enum Query {
    /// A plain CSS selector (sibling and attribute forms included)
    Simple(&'static str),

    /// Selects `target` descendants of every `group` element whose
    /// `heading` descendant text contains `heading_contains`
    GroupScoped {
        group: &'static str,
        heading: &'static str,
        heading_contains: &'static str,
        target: &'static str,
    },
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Query::Simple(expr) => write!(f, "{}", expr),
            Query::GroupScoped {
                group,
                heading,
                heading_contains,
                target,
            } => write!(f, "{} [{} ~ '{}'] {}", group, heading, heading_contains, target),
        }
    }
}

fn parse_selector(expr: &str) -> Result<Selector> {
    Selector::parse(expr).map_err(|e| CourtError::Selector {
        expression: expr.to_string(),
        message: e.to_string(),
    })
}

/// Resolves a query against a document, preserving document order
pub fn run_query<'a>(doc: &'a Html, query: &Query) -> Result<Vec<ElementRef<'a>>> {
    match query {
        Query::Simple(expr) => {
            let selector = parse_selector(expr)?;
            Ok(doc.select(&selector).collect())
        }
        Query::GroupScoped {
            group,
            heading,
            heading_contains,
            target,
        } => {
            let group_sel = parse_selector(group)?;
            let heading_sel = parse_selector(heading)?;
            let target_sel = parse_selector(target)?;

            let mut matches = Vec::new();
            for group_el in doc.select(&group_sel) {
                let heading_matches = group_el
                    .select(&heading_sel)
                    .any(|h| element_text(h).contains(heading_contains));
                if heading_matches {
                    matches.extend(group_el.select(&target_sel));
                }
            }
            Ok(matches)
        }
    }
}

/// Full trimmed text content of an element and its descendants
pub fn element_text(el: ElementRef) -> String {
    el.text().collect::<String>().trim().to_string()
}

/// Text of the element's direct children, excluding screen-reader-only
/// child elements.
///
/// Direct text nodes are always kept; child elements contribute their full
/// text unless classed `visually-hidden`. Parts are joined with a single
/// space and the result trimmed.
pub fn visible_text(el: ElementRef) -> String {
    let mut parts: Vec<String> = Vec::new();
    for child in el.children() {
        match child.value() {
            Node::Text(t) => {
                let text: &str = &t.text;
                parts.push(text.to_string());
            }
            Node::Element(e) => {
                if e.classes().any(|c| c == VISUALLY_HIDDEN) {
                    continue;
                }
                if let Some(child_el) = ElementRef::wrap(child) {
                    parts.push(child_el.text().collect::<String>());
                }
            }
            _ => {}
        }
    }
    collapse_whitespace(&parts.join(" "))
}

/// Nearest preceding sibling that is an element
pub fn preceding_sibling_element(el: ElementRef) -> Option<ElementRef> {
    el.prev_siblings().find_map(ElementRef::wrap)
}

/// Parent element, if any
pub fn parent_element(el: ElementRef) -> Option<ElementRef> {
    el.parent().and_then(ElementRef::wrap)
}

/// Closest ancestor (not including the element itself) carrying `class`
pub fn enclosing_group<'a>(el: ElementRef<'a>, class: &str) -> Option<ElementRef<'a>> {
    el.ancestors()
        .filter_map(ElementRef::wrap)
        .find(|anc| anc.value().classes().any(|c| c == class))
}

/// Returns true if the element carries the given class
pub fn has_class(el: ElementRef, class: &str) -> bool {
    el.value().classes().any(|c| c == class)
}

/// Collapses whitespace runs (including newlines) to single spaces and trims
pub fn collapse_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}
