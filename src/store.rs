// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Load, merge and persist the JSON search index.
//!
//! The index is small enough to live in memory, so every operation works on a
//! whole `SearchIndex`: read it, change a key, write it back. Writes go through
//! a temporary file in the destination directory followed by a rename, so a
//! crash or a full disk leaves the previous index intact instead of a
//! truncated one.
//!
//! # File naming
//!
//! | search id     | file                |
//! |---------------|---------------------|
//! | none or `""`  | `search.json`       |
//! | `"blog"`      | `search_blog.json`  |

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::types::{SearchDocument, SearchIndex};

/// File name of the default (unpartitioned) index.
pub const DEFAULT_INDEX_FILE: &str = "search.json";

/// Index file for an optional named partition.
///
/// An empty id is the default partition (`search.json`), not `search_.json`.
pub fn index_file_name(search_id: Option<&str>) -> Result<String> {
    match search_id.filter(|id| !id.is_empty()) {
        None => Ok(DEFAULT_INDEX_FILE.to_string()),
        Some(id) => {
            if id.contains(['/', '\\']) || id == "." || id == ".." || id.contains('\0') {
                return Err(Error::InvalidSearchId(id.to_string()));
            }
            Ok(format!("search_{}.json", id))
        }
    }
}

/// Full path of the index file under `output_dir`.
pub fn index_path(output_dir: &Path, search_id: Option<&str>) -> Result<PathBuf> {
    Ok(output_dir.join(index_file_name(search_id)?))
}

/// Load the index at `path`. A missing file is an empty index.
pub fn load(path: &Path) -> Result<SearchIndex> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            debug!(path = %path.display(), "no existing index, starting empty");
            return Ok(SearchIndex::new());
        }
        Err(e) => return Err(Error::io(path, e)),
    };

    parse_index(&content).map_err(|reason| Error::MalformedIndex {
        path: path.to_path_buf(),
        reason,
    })
}

/// Parse index JSON, distinguishing "not JSON" from "not an object".
fn parse_index(content: &str) -> std::result::Result<SearchIndex, String> {
    let value: serde_json::Value =
        serde_json::from_str(content).map_err(|e| format!("invalid JSON: {}", e))?;
    if !value.is_object() {
        return Err(format!("expected a JSON object, found {}", json_kind(&value)));
    }
    serde_json::from_value(value).map_err(|e| format!("invalid search document: {}", e))
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}

/// Set `index[url] = document`. Returns `false` when the stored entry was already identical.
pub fn merge(index: &mut SearchIndex, url: &str, document: SearchDocument) -> bool {
    if index.get(url) == Some(&document) {
        return false;
    }
    index.insert(url, document);
    true
}

/// Write `index` to `path` as pretty-printed JSON, replacing any existing file.
///
/// Missing parent directories are created. An existing file keeps its
/// permissions; a new one gets the process umask applied, as a plain create would.
pub fn save(path: &Path, index: &SearchIndex) -> Result<()> {
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    fs::create_dir_all(dir).map_err(|e| Error::io(dir, e))?;

    let mut json = serde_json::to_vec_pretty(index).map_err(|e| {
        Error::io(path, io::Error::new(io::ErrorKind::InvalidData, e))
    })?;
    json.push(b'\n');

    let mut tmp = temp_file_for(path, dir)?;
    tmp.write_all(&json).map_err(|e| Error::io(tmp.path(), e))?;
    tmp.as_file().sync_all().map_err(|e| Error::io(tmp.path(), e))?;
    tmp.persist(path).map_err(|e| Error::io(path, e.error))?;

    info!(path = %path.display(), entries = index.len(), "wrote search index");
    Ok(())
}

/// Temp file in `dir` whose mode matches what `path` has, or would get.
///
/// `tempfile` defaults to 0600; the renamed index must stay readable by
/// whatever serves the site.
fn temp_file_for(path: &Path, dir: &Path) -> Result<NamedTempFile> {
    #[cfg_attr(not(unix), allow(unused_mut))]
    let mut builder = tempfile::Builder::new();
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        // Passed to open(2), so the umask still applies.
        builder.permissions(fs::Permissions::from_mode(0o666));
    }
    let tmp = builder.tempfile_in(dir).map_err(|e| Error::io(dir, e))?;

    match fs::metadata(path) {
        Ok(existing) => tmp
            .as_file()
            .set_permissions(existing.permissions())
            .map_err(|e| Error::io(tmp.path(), e))?,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {}
        Err(e) => return Err(Error::io(path, e)),
    }
    Ok(tmp)
}
