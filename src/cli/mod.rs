// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the pagedex command-line interface.
//!
//! Three subcommands: `page` to merge a single rendered page (reading HTML
//! from a file or stdin and echoing it to stdout, so it can sit in the middle
//! of a shell pipeline), `index` to build from a manifest, and `inspect` to
//! summarize an existing index file.

pub mod display;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "pagedex",
    about = "Extract search documents from rendered HTML into a JSON index",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Merge one rendered page into its search index and echo the HTML
    Page {
        /// Rendered HTML file (reads stdin when omitted)
        file: Option<PathBuf>,

        /// Page URL, used as the index key
        #[arg(short, long)]
        url: String,

        /// Site output directory holding search.json
        #[arg(short, long)]
        output: PathBuf,

        /// Named index partition, written to search_<ID>.json
        #[arg(long)]
        search_id: Option<String>,

        /// CSS selector of the content container
        #[arg(long, default_value = "article")]
        container: String,
    },

    /// Index every page listed in a manifest
    Index {
        /// Input directory containing manifest.json and rendered pages
        #[arg(short, long)]
        input: PathBuf,

        /// Output directory for search*.json files
        #[arg(short, long)]
        output: PathBuf,
    },

    /// Summarize a search index file
    Inspect {
        /// Path to a search*.json file
        file: PathBuf,

        /// Maximum number of entries to list
        #[arg(short, long, default_value = "50")]
        limit: usize,
    },
}
