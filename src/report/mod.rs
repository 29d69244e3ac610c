// SPDX-License-Identifier: PMPL-1.0-or-later

//! Run summaries: console output and exported files

pub mod formatter;
pub mod output;

use crate::migrate::{LabelCopyStats, MigrationStats};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub use formatter::SummaryFormatter;
pub use output::ReportOutputFormat;

/// Which command produced a summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RunKind {
    Specs,
    Labels,
    Check,
}

/// Outcome of one command run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunSummary {
    pub created_at: String,
    pub kind: RunKind,
    pub document: PathBuf,
    pub dry_run: bool,
    /// Whether the document on disk was rewritten.
    pub written: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub specs: Option<MigrationStats>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub labels: Option<LabelCopyStats>,
}

impl RunSummary {
    pub fn new(kind: RunKind, document: &Path, dry_run: bool) -> Self {
        Self {
            created_at: chrono::Utc::now().to_rfc3339(),
            kind,
            document: document.to_path_buf(),
            dry_run,
            written: false,
            specs: None,
            labels: None,
        }
    }
}

/// Serialize a summary to `path` in the requested format.
pub fn save_summary(summary: &RunSummary, path: &Path, format: ReportOutputFormat) -> Result<()> {
    let content = format.serialize(summary)?;
    fs::write(path, content).with_context(|| format!("writing summary {}", path.display()))?;
    println!("Summary saved to: {}", path.display());
    Ok(())
}

/// Print a summary to the console.
pub fn print_summary(summary: &RunSummary) {
    SummaryFormatter::new().print(summary);
}
