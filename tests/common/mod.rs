//! Shared test utilities and fixtures.

#![allow(dead_code)]

use pagedex::{store, SearchDocument, SearchIndex};
use std::fs;
use std::path::Path;

/// Directory containing rendered-site fixtures with manifests.
pub const BUILD_FIXTURES_DIR: &str = "data/build-fixtures";

/// Wrap body markup in a minimal page with site scaffolding around the article.
pub fn page(article_inner: &str) -> String {
    format!(
        "<!DOCTYPE html><html><head><title>t</title></head><body>\
         <nav><a href=\"/\">Home</a></nav>\
         <article>{}</article>\
         <footer>footer</footer></body></html>",
        article_inner
    )
}

pub fn make_doc(title: Option<&str>, subtitle: Option<&str>, body: &str) -> SearchDocument {
    SearchDocument {
        title: title.map(str::to_string),
        subtitle: subtitle.map(str::to_string),
        body: body.to_string(),
    }
}

/// Load an index file, panicking with the path on failure.
pub fn load_index(path: &Path) -> SearchIndex {
    store::load(path).unwrap_or_else(|e| panic!("failed to load {}: {}", path.display(), e))
}

/// Parse an index file as raw JSON.
pub fn load_json(path: &Path) -> serde_json::Value {
    let content = fs::read_to_string(path).expect("Failed to read index");
    serde_json::from_str(&content).expect("Failed to parse index")
}
