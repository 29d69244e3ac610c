// SPDX-License-Identifier: PMPL-1.0-or-later

//! Command runners
//!
//! Each runner loads its document, applies one migration in memory, and
//! only then writes the whole document back. A load or parse failure
//! returns before anything is written.

use crate::i18n::Lang;
use crate::migrate::{self, MigrationStats};
use crate::normalize::Normalizer;
use crate::report::{RunKind, RunSummary};
use crate::storage;
use anyhow::{Context, Result};
use std::path::PathBuf;

/// Options shared by the writing commands.
#[derive(Debug, Clone)]
pub struct RunOptions {
    pub document: PathBuf,
    /// Transform and report without writing.
    pub dry_run: bool,
}

/// Normalize the specs of every product in the product document.
pub fn run_specs(options: &RunOptions, normalizer: &Normalizer) -> Result<RunSummary> {
    let mut document = storage::load_document(&options.document)?;
    let stats = migrate::migrate_products(&mut document, normalizer)
        .with_context(|| format!("migrating {}", options.document.display()))?;

    let mut summary = RunSummary::new(RunKind::Specs, &options.document, options.dry_run);
    if !options.dry_run {
        storage::write_document(&options.document, &document)?;
        summary.written = true;
    }
    summary.specs = Some(stats);
    Ok(summary)
}

/// Copy missing spec labels in the translation document for every language.
pub fn run_labels(options: &RunOptions) -> Result<RunSummary> {
    let mut document = storage::load_document(&options.document)?;
    let stats = migrate::copy_spec_labels(&mut document, Lang::all())
        .with_context(|| format!("copying labels in {}", options.document.display()))?;

    let mut summary = RunSummary::new(RunKind::Labels, &options.document, options.dry_run);
    if !options.dry_run {
        storage::write_document(&options.document, &document)?;
        summary.written = true;
    }
    summary.labels = Some(stats);
    Ok(summary)
}

/// Report how much of the product document still needs migrating.
pub fn run_check(document_path: PathBuf, normalizer: &Normalizer) -> Result<RunSummary> {
    let document = storage::load_document(&document_path)?;
    let stats: MigrationStats = migrate::preview_products(&document, normalizer)
        .with_context(|| format!("checking {}", document_path.display()))?;

    let mut summary = RunSummary::new(RunKind::Check, &document_path, false);
    summary.specs = Some(stats);
    Ok(summary)
}
