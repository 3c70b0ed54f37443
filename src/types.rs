// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The two shapes that end up on disk.
//!
//! A `SearchDocument` is what one rendered page contributes; a `SearchIndex`
//! maps page URLs to those documents and is written out as a single JSON object:
//!
//! ```json
//! {
//!   "/posts/hello-world/": {
//!     "title": "Hello World",
//!     "subtitle": "An introduction",
//!     "body": "This is the first paragraph. This is the second."
//!   }
//! }
//! ```
//!
//! # Invariants
//!
//! - **SearchIndex**: keys are unique page URLs. Inserting an existing URL replaces
//!   the whole document; fields are never merged.
//! - **SearchDocument**: `title` and `subtitle` always serialize as keys, `null` when
//!   absent, so client-side code can rely on the shape.

use std::collections::btree_map;
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Search fields extracted from one rendered page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchDocument {
    /// First level 1 or 2 heading of the content container.
    pub title: Option<String>,
    /// First level 3 heading of the content container.
    pub subtitle: Option<String>,
    /// Normalized text of the content container, in document order.
    pub body: String,
}

impl SearchDocument {
    /// True when extraction found nothing at all.
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.subtitle.is_none() && self.body.is_empty()
    }
}

/// Page URL → search document, persisted as one JSON object.
///
/// Backed by a `BTreeMap` so rewriting an unchanged index produces identical bytes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SearchIndex {
    entries: BTreeMap<String, SearchDocument>,
}

impl SearchIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, url: &str) -> Option<&SearchDocument> {
        self.entries.get(url)
    }

    pub fn contains(&self, url: &str) -> bool {
        self.entries.contains_key(url)
    }

    /// Replace the document stored for `url`, returning the previous one.
    pub fn insert(&mut self, url: impl Into<String>, document: SearchDocument) -> Option<SearchDocument> {
        self.entries.insert(url.into(), document)
    }

    pub fn iter(&self) -> btree_map::Iter<'_, String, SearchDocument> {
        self.entries.iter()
    }

    pub fn urls(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}

impl<'a> IntoIterator for &'a SearchIndex {
    type Item = (&'a String, &'a SearchDocument);
    type IntoIter = btree_map::Iter<'a, String, SearchDocument>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl FromIterator<(String, SearchDocument)> for SearchIndex {
    fn from_iter<I: IntoIterator<Item = (String, SearchDocument)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}
