// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Parallel page loading and extraction.
//!
//! Reading and parsing rendered pages is the expensive part of a build, and
//! every page is independent, so Rayon fans it out with `par_iter()`. Only
//! extraction runs in parallel. The results come back in manifest order and
//! are merged by a single `IndexBuilder`, which keeps the index files free of
//! concurrent writers.

use std::fs;
use std::path::Path;

#[cfg(feature = "parallel")]
use indicatif::ProgressBar;
#[cfg(feature = "parallel")]
use rayon::prelude::*;
#[cfg(feature = "parallel")]
use std::sync::atomic::{AtomicUsize, Ordering};

use tracing::warn;

use crate::error::{Error, Result};
use crate::extract::Extractor;

use super::{ExtractedPage, PageEntry};

/// Read one rendered page and extract its search document.
pub fn extract_page(input_dir: &Path, page: &PageEntry, extractor: &Extractor) -> Result<ExtractedPage> {
    let path = input_dir.join(&page.file);
    let html = fs::read_to_string(&path).map_err(|e| Error::io(&path, e))?;
    let url = page.resolved_url();

    let document = extractor.extract(&html);
    if document.is_empty() {
        warn!(
            file = %path.display(),
            url = %url,
            container = extractor.selectors().container(),
            "page has no indexable content"
        );
    }

    Ok(ExtractedPage::new(url, page.search_id.as_deref(), document))
}

/// Extract every page, in parallel when the `parallel` feature is on.
///
/// Output order matches `pages`. Fails on the first unreadable page.
pub fn extract_pages(input_dir: &Path, pages: &[PageEntry], extractor: &Extractor) -> Result<Vec<ExtractedPage>> {
    #[cfg(feature = "parallel")]
    let extracted: Result<Vec<ExtractedPage>> = pages
        .par_iter()
        .map(|page| extract_page(input_dir, page, extractor))
        .collect();

    #[cfg(not(feature = "parallel"))]
    let extracted: Result<Vec<ExtractedPage>> = pages
        .iter()
        .map(|page| extract_page(input_dir, page, extractor))
        .collect();

    extracted
}

/// Extract every page in parallel with progress reporting.
#[cfg(feature = "parallel")]
pub fn extract_pages_with_progress(
    input_dir: &Path,
    pages: &[PageEntry],
    extractor: &Extractor,
    progress: &ProgressBar,
) -> Result<Vec<ExtractedPage>> {
    let counter = AtomicUsize::new(0);
    let total = pages.len();

    pages
        .par_iter()
        .map(|page| {
            let extracted = extract_page(input_dir, page, extractor)?;

            let count = counter.fetch_add(1, Ordering::Relaxed) + 1;
            progress.set_position(count as u64);
            if count % 10 == 0 || count == total {
                progress.set_message(format!("{}/{}", count, total));
            }

            Ok(extracted)
        })
        .collect()
}

/// Extract every page with progress reporting.
/// Non-parallel fallback (no-op progress).
#[cfg(not(feature = "parallel"))]
pub fn extract_pages_with_progress(
    input_dir: &Path,
    pages: &[PageEntry],
    extractor: &Extractor,
) -> Result<Vec<ExtractedPage>> {
    extract_pages(input_dir, pages, extractor)
}
