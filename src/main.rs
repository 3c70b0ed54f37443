// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use std::fs;
use std::io::{self, Read, Write};
use std::path::Path;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use pagedex::{process_page_with, run_build, store, Extractor};

mod cli;
use cli::display::{
    color, format_size, pad_right, row, section_bot, section_mid, section_top, truncate, DIM, YELLOW,
};
use cli::{Cli, Commands};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Page {
            file,
            url,
            output,
            search_id,
            container,
        } => run_page(file.as_deref(), &url, &output, search_id.as_deref(), &container),
        Commands::Index { input, output } => run_build(&input, &output).map(|_| ()),
        Commands::Inspect { file, limit } => inspect_index(&file, limit),
    };

    if let Err(e) = result {
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }
}

/// Merge one page and echo its HTML to stdout.
fn run_page(
    file: Option<&Path>,
    url: &str,
    output: &Path,
    search_id: Option<&str>,
    container: &str,
) -> pagedex::Result<()> {
    let html = match file {
        Some(path) => fs::read_to_string(path).map_err(|e| io_error(path, e))?,
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .map_err(|e| io_error(Path::new("<stdin>"), e))?;
            buf
        }
    };

    let extractor = Extractor::for_container(container)?;
    let html = process_page_with(&extractor, &html, url, output, search_id)?;

    let mut stdout = io::stdout().lock();
    stdout
        .write_all(html.as_bytes())
        .and_then(|()| stdout.flush())
        .map_err(|e| io_error(Path::new("<stdout>"), e))
}

fn io_error(path: &Path, source: io::Error) -> pagedex::Error {
    pagedex::Error::Io {
        path: path.to_path_buf(),
        source,
    }
}

/// Print a boxed summary of an index file.
fn inspect_index(path: &Path, limit: usize) -> pagedex::Result<()> {
    let size = fs::metadata(path).map_err(|e| io_error(path, e))?.len() as usize;
    let index = store::load(path)?;

    let untitled = index.iter().filter(|(_, d)| d.title.is_none()).count();
    let empty = index.iter().filter(|(_, d)| d.is_empty()).count();
    let body_chars: usize = index.iter().map(|(_, d)| d.body.chars().count()).sum();

    section_top(&path.display().to_string());
    row(&format!(" entries   {}", index.len()));
    row(&format!(" size      {}", format_size(size)));
    row(&format!(" body      {} chars", body_chars));
    if untitled > 0 {
        row(&color(YELLOW, &format!(" untitled  {}", untitled)));
    }
    if empty > 0 {
        row(&color(YELLOW, &format!(" empty     {}", empty)));
    }

    if !index.is_empty() {
        section_mid("entries");
        for (url, doc) in index.iter().take(limit) {
            let title = doc.title.as_deref().unwrap_or("(untitled)");
            row(&format!(
                " {} {} {}",
                pad_right(&truncate(url, 30), 30),
                pad_right(&truncate(title, 34), 34),
                color(DIM, &format!("{:>10}", format_size(doc.body.len())))
            ));
        }
        if index.len() > limit {
            row(&color(DIM, &format!(" … {} more", index.len() - limit)));
        }
    }
    section_bot();

    Ok(())
}
