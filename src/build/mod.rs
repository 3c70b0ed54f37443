// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Entry points a site build calls.
//!
//! Two ways in:
//!
//! - [`process_page`]: one page at a time, straight from a rendering
//!   pipeline. Loads the index, merges one entry, saves, and hands the HTML
//!   back untouched. Not safe to call concurrently for the same output
//!   directory: each call is an unlocked read-modify-write of the index file.
//! - [`run_build`]: a whole rendered site described by `manifest.json`.
//!   Pages are extracted in parallel and merged through one [`IndexBuilder`],
//!   so each index file is written once.

pub mod builder;
pub mod document;
pub mod manifest;
pub mod parallel;

use std::path::Path;

#[cfg(feature = "parallel")]
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use tracing::{debug, info};

use crate::error::Result;
use crate::extract::Extractor;
use crate::store;

pub use builder::*;
pub use document::*;
pub use manifest::*;
pub use parallel::*;

/// Merge one rendered page into its index and return the HTML unchanged.
///
/// Uses the default `article` content container.
pub fn process_page<'h>(
    html: &'h str,
    url: &str,
    output_dir: &Path,
    search_id: Option<&str>,
) -> Result<&'h str> {
    process_page_with(&Extractor::default(), html, url, output_dir, search_id)
}

/// [`process_page`] with a caller-supplied extractor.
///
/// When the index already holds an identical entry for `url`, the file is not rewritten.
pub fn process_page_with<'h>(
    extractor: &Extractor,
    html: &'h str,
    url: &str,
    output_dir: &Path,
    search_id: Option<&str>,
) -> Result<&'h str> {
    let document = extractor.extract(html);
    let path = store::index_path(output_dir, search_id)?;

    let mut index = store::load(&path)?;
    if store::merge(&mut index, url, document) {
        store::save(&path, &index)?;
    } else {
        debug!(url, path = %path.display(), "search document unchanged");
    }

    Ok(html)
}

/// Create a progress style for the main progress bars
#[cfg(feature = "parallel")]
fn create_progress_style() -> ProgressStyle {
    ProgressStyle::with_template("{spinner:.cyan} {prefix:<12} [{bar:40.cyan/dim}] {pos}/{len} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("━━╸")
}

/// Index every page listed in `<input_dir>/manifest.json` into `output_dir`.
pub fn run_build(input_dir: &Path, output_dir: &Path) -> Result<BuildSummary> {
    // 1. Read manifest
    let manifest = read_manifest(input_dir)?;
    let mut builder = match manifest.container.as_deref() {
        Some(container) => IndexBuilder::new(Extractor::for_container(container)?),
        None => IndexBuilder::default(),
    };
    info!(
        pages = manifest.pages.len(),
        container = builder.extractor().selectors().container(),
        "indexing rendered pages"
    );

    if manifest.pages.is_empty() {
        eprintln!("⚠️  No pages listed in manifest; skipping build");
        return Ok(BuildSummary::default());
    }

    // 2. Extract pages in parallel with progress bar
    #[cfg(feature = "parallel")]
    let pages = {
        let multi = MultiProgress::new();
        let pb = multi.add(ProgressBar::new(manifest.pages.len() as u64));
        pb.set_style(create_progress_style());
        pb.set_prefix("Extracting");
        pb.set_message("pages...");
        let pages = extract_pages_with_progress(input_dir, &manifest.pages, builder.extractor(), &pb)?;
        pb.finish_with_message(format!("extracted {} pages", pages.len()));
        pages
    };

    #[cfg(not(feature = "parallel"))]
    let pages = extract_pages_with_progress(input_dir, &manifest.pages, builder.extractor())?;

    // 3. Merge through a single writer
    for page in pages {
        builder.add(page)?;
    }
    let flushed = builder.flush(output_dir)?;

    for path in &flushed.written {
        eprintln!("  ✓ {}", path.display());
    }
    for path in &flushed.unchanged {
        eprintln!("  = {} (unchanged)", path.display());
    }
    eprintln!();
    eprintln!("✅ Build complete");
    eprintln!(
        "   {} pages │ {} indexes written │ {} unchanged",
        flushed.pages,
        flushed.written.len(),
        flushed.unchanged.len()
    );

    Ok(flushed)
}
