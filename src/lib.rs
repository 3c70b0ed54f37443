// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Per-page search documents for static sites.
//!
//! A site generator renders HTML; this crate pulls a `{title, subtitle, body}`
//! document out of each page's content container and merges it into a JSON
//! search index keyed by page URL. Client-side search code loads that JSON.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌─────────────┐
//! │ extract/    │────▶│  types.rs    │────▶│  store.rs   │
//! │ (selectors, │     │ (SearchDoc,  │     │ (load,merge,│
//! │  scraper)   │     │  SearchIndex)│     │  save)      │
//! └─────────────┘     └──────────────┘     └─────────────┘
//!        │                                        │
//!        ▼                                        ▼
//! ┌─────────────────────────────────────────────────────┐
//! │                      build/                          │
//! │  (process_page, IndexBuilder, manifest run_build)    │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Usage
//!
//! ```no_run
//! use std::path::Path;
//!
//! let html = "<article><h1>Hi</h1><p>Hello there.</p></article>";
//! let out = pagedex::process_page(html, "/a/", Path::new("public"), None)?;
//! assert_eq!(out, html);
//! # Ok::<(), pagedex::Error>(())
//! ```
//!
//! For whole-site builds, queue pages in an [`IndexBuilder`] and flush once.

pub mod build;
pub mod error;
pub mod extract;
pub mod store;
mod types;
mod utils;

// Re-exports for public API
pub use build::{process_page, process_page_with, run_build, BuildSummary, IndexBuilder};
pub use error::{Error, Result};
pub use extract::{extract_all, extract_first, ContentSelectors, Extractor};
pub use types::{SearchDocument, SearchIndex};
pub use utils::normalize_text;
