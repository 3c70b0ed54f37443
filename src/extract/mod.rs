// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Turn rendered HTML into a `SearchDocument`.
//!
//! Parsing goes through html5ever (via `scraper`), which recovers from broken
//! markup the way browsers do, so unclosed tags and stray end tags still give
//! a usable tree. A page with no matching headings or no content container is
//! not an error: the fields just come back empty.
//!
//! Both extraction operations normalize each matched fragment independently
//! before deciding whether it is empty, so `<h1>  </h1><h1>Real</h1>` picks
//! "Real" as the title.

pub mod selectors;

use std::collections::HashSet;

use scraper::{ElementRef, Html};
use tracing::debug;

use crate::types::SearchDocument;
use crate::utils::{join_normalized, normalize_text};

pub use selectors::{ContentSelectors, Rule, DEFAULT_CONTAINER};

/// Parse a full HTML document. Never fails; malformed input is repaired.
pub fn parse_html(html: &str) -> Html {
    Html::parse_document(html)
}

/// Matching elements or text nodes for `rule`, in document order.
///
/// Text nodes inside any element of `exclude` are skipped; only `TextWithin`
/// rules can contain such nodes.
fn matched_texts(doc: &Html, rule: &Rule, exclude: &[ElementRef<'_>]) -> Vec<String> {
    match rule {
        Rule::Elements(selector) => doc
            .select(selector)
            .map(|el| el.text().collect::<String>())
            .collect(),
        Rule::TextWithin(selector) => {
            // Nested containers would otherwise yield the same text node twice.
            let mut seen = HashSet::new();
            let mut out = Vec::new();
            for container in doc.select(selector) {
                for node in container.descendants() {
                    let Some(text) = node.value().as_text() else {
                        continue;
                    };
                    let Some(parent) = node.parent() else {
                        continue;
                    };
                    if parent.id() == container.id() || !seen.insert(node.id()) {
                        continue;
                    }
                    if node
                        .ancestors()
                        .any(|a| exclude.iter().any(|el| el.id() == a.id()))
                    {
                        continue;
                    }
                    out.push(String::from(&**text));
                }
            }
            out
        }
    }
}

/// First element matched by an `Elements` rule whose normalized text is non-empty.
fn first_element<'a>(doc: &'a Html, rule: &Rule) -> Option<(ElementRef<'a>, String)> {
    let Rule::Elements(selector) = rule else {
        return None;
    };
    doc.select(selector)
        .map(|el| (el, normalize_text(&el.text().collect::<String>())))
        .find(|(_, t)| !t.is_empty())
}

/// First match whose normalized text is non-empty.
pub fn extract_first(doc: &Html, rule: &Rule) -> Option<String> {
    matched_texts(doc, rule, &[])
        .iter()
        .map(|t| normalize_text(t))
        .find(|t| !t.is_empty())
}

/// Every non-empty normalized match, joined with single spaces.
pub fn extract_all(doc: &Html, rule: &Rule) -> String {
    join_normalized(matched_texts(doc, rule, &[]))
}

/// Build the search document for an already parsed page.
///
/// The headings picked as title and subtitle are left out of the body, so
/// the same words are not indexed twice for one page. Every other heading
/// stays in the body.
pub fn extract_document(doc: &Html, selectors: &ContentSelectors) -> SearchDocument {
    let title = first_element(doc, &selectors.title);
    let subtitle = first_element(doc, &selectors.subtitle);

    let exclude: Vec<ElementRef<'_>> = title
        .iter()
        .chain(subtitle.iter())
        .map(|(el, _)| *el)
        .collect();
    let body = join_normalized(matched_texts(doc, &selectors.body, &exclude));

    SearchDocument {
        title: title.map(|(_, t)| t),
        subtitle: subtitle.map(|(_, t)| t),
        body,
    }
}

/// Reusable extractor holding compiled selectors.
#[derive(Debug, Clone, Default)]
pub struct Extractor {
    selectors: ContentSelectors,
}

impl Extractor {
    pub fn new(selectors: ContentSelectors) -> Self {
        Self { selectors }
    }

    /// Extractor for a custom content container selector.
    pub fn for_container(container: &str) -> crate::Result<Self> {
        ContentSelectors::for_container(container).map(Self::new)
    }

    pub fn selectors(&self) -> &ContentSelectors {
        &self.selectors
    }

    /// Parse `html` and extract its search document.
    pub fn extract(&self, html: &str) -> SearchDocument {
        let doc = parse_html(html);
        let document = extract_document(&doc, &self.selectors);
        if document.title.is_none() {
            debug!(container = self.selectors.container(), "no title heading found");
        }
        if document.body.is_empty() {
            debug!(container = self.selectors.container(), "no body text found");
        }
        document
    }
}
