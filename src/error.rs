// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Error types for extraction, index persistence and builds.
//!
//! Every variant that touches the filesystem carries the offending path so a
//! failed build points straight at the file to fix. Nothing here is retried:
//! this runs at build time on local disk, where a failure is a real failure.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum Error {
    /// The index file exists but is not a JSON object of search documents.
    ///
    /// Never swallowed: treating it as empty would drop every page indexed so far.
    #[error("malformed search index {}: {reason}", .path.display())]
    MalformedIndex { path: PathBuf, reason: String },

    #[error("failed to access {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid content selector '{selector}': {reason}")]
    Selector { selector: String, reason: String },

    #[error("invalid search id '{0}': must be a plain file name component")]
    InvalidSearchId(String),

    #[error("invalid manifest {}: {reason}", .path.display())]
    Manifest { path: PathBuf, reason: String },
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }
}
