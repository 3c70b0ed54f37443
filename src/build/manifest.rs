use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::error::{Error, Result};

/// Manifest format version understood by this build.
pub const MANIFEST_VERSION: u32 = 1;

/// `manifest.json` at the root of a rendered site.
#[derive(Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct InputManifest {
    pub version: u32,
    /// Content container selector; `article` when omitted.
    #[serde(default)]
    pub container: Option<String>,
    pub pages: Vec<PageEntry>,
}

/// One rendered page to index.
#[derive(Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PageEntry {
    /// HTML file, relative to the input directory.
    pub file: String,
    /// Index key. Derived from `file` when omitted.
    #[serde(default)]
    pub url: Option<String>,
    /// Named index partition (`search_<id>.json`).
    #[serde(default)]
    pub search_id: Option<String>,
}

impl PageEntry {
    pub fn resolved_url(&self) -> String {
        match &self.url {
            Some(url) => url.clone(),
            None => url_from_path(&self.file),
        }
    }
}

/// Derive the public URL of a rendered file.
///
/// - `index.html` → `/`
/// - `posts/hello/index.html` → `/posts/hello/`
/// - `about.html` → `/about.html`
pub fn url_from_path(file: &str) -> String {
    let normalized = file.replace('\\', "/");
    let trimmed = normalized.trim_start_matches("./").trim_start_matches('/');

    match trimmed.strip_suffix("index.html") {
        Some(dir) if dir.is_empty() || dir.ends_with('/') => format!("/{}", dir),
        _ => format!("/{}", trimmed),
    }
}

/// Read and validate `<input_dir>/manifest.json`.
pub fn read_manifest(input_dir: &Path) -> Result<InputManifest> {
    let path = input_dir.join("manifest.json");
    let content = fs::read_to_string(&path).map_err(|e| Error::Manifest {
        path: path.clone(),
        reason: format!("failed to read: {}", e),
    })?;
    let manifest: InputManifest = serde_json::from_str(&content).map_err(|e| Error::Manifest {
        path: path.clone(),
        reason: format!("invalid JSON: {}", e),
    })?;

    if manifest.version != MANIFEST_VERSION {
        return Err(Error::Manifest {
            path,
            reason: format!(
                "unsupported version {} (expected {})",
                manifest.version, MANIFEST_VERSION
            ),
        });
    }
    Ok(manifest)
}
