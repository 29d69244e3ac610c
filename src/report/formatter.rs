// SPDX-License-Identifier: PMPL-1.0-or-later

//! Console formatting for run summaries

use crate::i18n::{language_name, native_name, Lang};
use crate::migrate::{LabelCopyStats, MigrationStats};
use crate::report::{RunKind, RunSummary};
use colored::*;

pub struct SummaryFormatter;

impl SummaryFormatter {
    pub fn new() -> Self {
        Self
    }

    pub fn print(&self, summary: &RunSummary) {
        let title = match summary.kind {
            RunKind::Specs => "=== SPEC MIGRATION ===",
            RunKind::Labels => "=== SPEC LABEL COPY ===",
            RunKind::Check => "=== SPEC MIGRATION CHECK ===",
        };
        println!("\n{}", title.bold().cyan());
        println!("  Document: {}", summary.document.display());

        if let Some(stats) = &summary.specs {
            self.print_specs(stats, summary.kind);
        }
        if let Some(stats) = &summary.labels {
            self.print_labels(stats);
        }
        println!();
        self.print_outcome(summary);
    }

    fn print_specs(&self, stats: &MigrationStats, kind: RunKind) {
        let migrated_label = if kind == RunKind::Check {
            "Needing migration"
        } else {
            "Migrated"
        };
        println!();
        println!("{}", "PRODUCTS".bold().yellow());
        println!("  Records: {}", stats.records_total);
        println!(
            "  {}: {}",
            migrated_label,
            if stats.records_migrated > 0 {
                stats.records_migrated.to_string().green().bold()
            } else {
                stats.records_migrated.to_string().normal()
            }
        );
        println!("  Already normalized: {}", stats.records_already_normalized);
        println!("  Without specs: {}", stats.records_without_specs);
        if stats.records_malformed > 0 {
            println!(
                "  Malformed specs (skipped): {}",
                stats.records_malformed.to_string().red().bold()
            );
        }
        println!(
            "  Entries converted: {}  |  passed through: {}",
            stats.entries_converted, stats.entries_passed_through
        );
    }

    fn print_labels(&self, stats: &LabelCopyStats) {
        println!();
        println!("{}", "LABELS".bold().yellow());
        for lang in Lang::all() {
            let name = language_heading(*lang);
            if stats.skipped_languages.contains(lang) {
                println!("  {:<20} {}", name, "skipped".red());
                continue;
            }
            println!(
                "  {:<20} copied {}, kept {}",
                name,
                stats.copied_for(*lang),
                stats.kept_existing.get(lang).copied().unwrap_or(0)
            );
        }
        println!("  Total copied: {}", stats.total_copied().to_string().bold());
    }

    fn print_outcome(&self, summary: &RunSummary) {
        let status = if summary.written {
            "WRITTEN".green().bold()
        } else if summary.dry_run {
            "DRY RUN, NOT WRITTEN".yellow().bold()
        } else {
            "READ ONLY".dimmed()
        };
        println!("  Document: {}", status);
    }
}

/// `English`, or `Turkish (Türkçe)` when the native name differs.
fn language_heading(lang: Lang) -> String {
    let english = language_name(lang);
    let native = native_name(lang);
    if english == native {
        english.to_string()
    } else {
        format!("{english} ({native})")
    }
}

impl Default for SummaryFormatter {
    fn default() -> Self {
        Self::new()
    }
}
