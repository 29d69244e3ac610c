// SPDX-License-Identifier: PMPL-1.0-or-later

//! Loading and persisting JSON documents
//!
//! Documents are read whole and written whole. A write serializes the full
//! document first, stores it next to the target and renames it into place,
//! so a failed run never leaves a half-written file behind.

use anyhow::{anyhow, Context, Result};
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};

/// Read and parse a JSON document.
pub fn load_document(path: &Path) -> Result<Value> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("reading document {}", path.display()))?;
    let document = serde_json::from_str(&raw)
        .with_context(|| format!("parsing JSON document {}", path.display()))?;
    tracing::debug!(path = %path.display(), bytes = raw.len(), "loaded document");
    Ok(document)
}

/// Write a document as indented JSON with a trailing newline, replacing
/// `path` atomically.
pub fn write_document(path: &Path, document: &Value) -> Result<()> {
    let mut payload = serde_json::to_string_pretty(document)
        .with_context(|| format!("serializing document for {}", path.display()))?;
    payload.push('\n');

    let staging = staging_path(path)?;
    fs::write(&staging, &payload)
        .with_context(|| format!("writing staging file {}", staging.display()))?;
    if let Err(err) = fs::rename(&staging, path) {
        let _ = fs::remove_file(&staging);
        return Err(err).with_context(|| format!("replacing document {}", path.display()));
    }
    tracing::debug!(path = %path.display(), bytes = payload.len(), "wrote document");
    Ok(())
}

/// Sibling path used while writing, e.g. `products.json` → `.products.json.tmp`.
fn staging_path(path: &Path) -> Result<PathBuf> {
    let file_name = path
        .file_name()
        .ok_or_else(|| anyhow!("document path has no file name: {}", path.display()))?;
    let mut staged = std::ffi::OsString::from(".");
    staged.push(file_name);
    staged.push(".tmp");
    Ok(path.with_file_name(staged))
}
