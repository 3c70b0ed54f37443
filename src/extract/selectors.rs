// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Selection rules for the three search fields.
//!
//! Everything is relative to a content container (`article` unless configured).
//! Headings count when they sit directly in the container or one wrapping
//! element down, which covers both `<article><h1>` and the common
//! `<article><header><h1>` layout. Body text is every text node whose parent
//! element lives inside the container, so text outside it (site navigation,
//! page header scaffolding) never reaches the index.

use scraper::Selector;

use crate::error::{Error, Result};

/// Default content container.
pub const DEFAULT_CONTAINER: &str = "article";

const TITLE_HEADINGS: &[&str] = &["h1", "h2"];
const SUBTITLE_HEADINGS: &[&str] = &["h3"];

/// How a rule turns a document into text fragments.
#[derive(Debug, Clone)]
pub enum Rule {
    /// Each matching element contributes its full descendant text.
    Elements(Selector),
    /// Each text node whose parent element is strictly inside a matching
    /// container contributes its own text. Text sitting directly under the
    /// container is not included.
    TextWithin(Selector),
}

/// Compiled rules for title, subtitle and body.
///
/// Compile once per build and reuse for every page.
#[derive(Debug, Clone)]
pub struct ContentSelectors {
    container: String,
    pub title: Rule,
    pub subtitle: Rule,
    pub body: Rule,
}

impl ContentSelectors {
    /// Rules for the given container selector.
    ///
    /// A selector list (`"article, main"`) is treated as several containers.
    pub fn for_container(container: &str) -> Result<Self> {
        let containers: Vec<&str> = container
            .split(',')
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .collect();
        if containers.is_empty() {
            return Err(Error::Selector {
                selector: container.to_string(),
                reason: "empty container selector".to_string(),
            });
        }

        Ok(Self {
            container: container.to_string(),
            title: Rule::Elements(compile(&heading_selector(&containers, TITLE_HEADINGS))?),
            subtitle: Rule::Elements(compile(&heading_selector(&containers, SUBTITLE_HEADINGS))?),
            body: Rule::TextWithin(compile(&containers.join(", "))?),
        })
    }

    /// The container selector these rules were built from.
    pub fn container(&self) -> &str {
        &self.container
    }
}

impl Default for ContentSelectors {
    fn default() -> Self {
        // The default container is a fixed, valid selector.
        Self::for_container(DEFAULT_CONTAINER).expect("default container selector is valid")
    }
}

/// `C > * > h1, C > * > h2, C > h1, C > h2` for every container `C`.
fn heading_selector(containers: &[&str], headings: &[&str]) -> String {
    let mut parts = Vec::with_capacity(containers.len() * headings.len() * 2);
    for c in containers {
        for h in headings {
            parts.push(format!("{c} > * > {h}"));
        }
        for h in headings {
            parts.push(format!("{c} > {h}"));
        }
    }
    parts.join(", ")
}

fn compile(selector: &str) -> Result<Selector> {
    Selector::parse(selector).map_err(|e| Error::Selector {
        selector: selector.to_string(),
        reason: e.to_string(),
    })
}
