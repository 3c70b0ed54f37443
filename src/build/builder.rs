// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Accumulate documents in memory, write each index file once.
//!
//! `process_page` does a read-modify-write of the index file for every page,
//! which silently loses updates when pages are processed concurrently. The
//! builder is the alternative for whole-site builds: extraction can happen
//! anywhere, but only the builder touches the files, and `flush` loads,
//! merges and saves every partition exactly once.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::error::Result;
use crate::extract::Extractor;
use crate::store;
use crate::types::SearchIndex;

use super::ExtractedPage;

/// What a flush (or a whole manifest build) did to each partition.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BuildSummary {
    /// Index files rewritten.
    pub written: Vec<PathBuf>,
    /// Index files left alone because every entry was already up to date.
    pub unchanged: Vec<PathBuf>,
    /// Pages merged across all partitions.
    pub pages: usize,
}

/// Single owner of pending index updates, keyed by partition.
#[derive(Debug, Default)]
pub struct IndexBuilder {
    extractor: Extractor,
    /// `None` is the default `search.json` partition.
    partitions: BTreeMap<Option<String>, SearchIndex>,
}

impl IndexBuilder {
    pub fn new(extractor: Extractor) -> Self {
        Self {
            extractor,
            partitions: BTreeMap::new(),
        }
    }

    pub fn extractor(&self) -> &Extractor {
        &self.extractor
    }

    /// Extract `html` and record it under `url`.
    pub fn add_page(&mut self, html: &str, url: &str, search_id: Option<&str>) -> Result<()> {
        let document = self.extractor.extract(html);
        self.add(ExtractedPage::new(url, search_id, document))
    }

    /// Record an already extracted page. A later page with the same URL replaces it.
    pub fn add(&mut self, page: ExtractedPage) -> Result<()> {
        // Reject bad partition names now rather than at flush time.
        store::index_file_name(page.search_id.as_deref())?;

        debug!(url = %page.url, search_id = ?page.search_id, "queued search document");
        self.partitions
            .entry(page.search_id)
            .or_default()
            .insert(page.url, page.document);
        Ok(())
    }

    /// Pages queued across all partitions.
    pub fn len(&self) -> usize {
        self.partitions.values().map(SearchIndex::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Queued partitions, `None` being the default one.
    pub fn partitions(&self) -> impl Iterator<Item = Option<&str>> {
        self.partitions.keys().map(Option::as_deref)
    }

    /// Merge every queued page into the index files under `output_dir`.
    ///
    /// Stops at the first partition that fails to load or save; partitions
    /// flushed before it keep their new contents.
    pub fn flush(self, output_dir: &Path) -> Result<BuildSummary> {
        let mut summary = BuildSummary::default();

        for (search_id, pending) in self.partitions {
            let path = store::index_path(output_dir, search_id.as_deref())?;
            let mut index = store::load(&path)?;

            let mut changed = false;
            for (url, document) in &pending {
                changed |= store::merge(&mut index, url, document.clone());
            }
            summary.pages += pending.len();

            if changed || !path.exists() {
                store::save(&path, &index)?;
                summary.written.push(path);
            } else {
                info!(path = %path.display(), "search index unchanged, skipping write");
                summary.unchanged.push(path);
            }
        }

        Ok(summary)
    }
}
