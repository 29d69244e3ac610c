// SPDX-License-Identifier: PMPL-1.0-or-later

//! catalog-migrate: one-shot migrations for the multi-language product catalog
//!
//! `specs` converts legacy product specs to the per-language format,
//! `labels` backfills translation labels, and `check` reports what a
//! `specs` run would change without writing anything.

use anyhow::Result;
use catalog_migrate::commands::{self, RunOptions};
use catalog_migrate::config::MigrateConfig;
use catalog_migrate::report::{self, ReportOutputFormat, RunSummary};
use clap::{Parser, Subcommand};
use colored::*;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "catalog-migrate")]
#[command(version)]
#[command(about = "One-shot migrations for the multi-language product catalog")]
#[command(long_about = None)]
struct Cli {
    /// Configuration file (default: ./catalog-migrate.yaml when present)
    #[arg(short, long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Print per-record diagnostics to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert legacy product specs to the per-language format
    Specs {
        /// Product document (overrides `products_path`)
        #[arg(short, long, value_name = "PATH")]
        data: Option<PathBuf>,

        /// Run the migration without writing the document
        #[arg(long)]
        dry_run: bool,

        /// Save the run summary to a file
        #[arg(short, long, value_name = "PATH")]
        report: Option<PathBuf>,

        /// Summary file format (default: from the file extension)
        #[arg(short, long, value_enum)]
        format: Option<ReportOutputFormat>,
    },

    /// Copy missing spec labels from `specs` into `specLabels` for every language
    Labels {
        /// Translation document (overrides `translations_path`)
        #[arg(short, long, value_name = "PATH")]
        translations: Option<PathBuf>,

        /// Run the copy without writing the document
        #[arg(long)]
        dry_run: bool,

        /// Save the run summary to a file
        #[arg(short, long, value_name = "PATH")]
        report: Option<PathBuf>,

        /// Summary file format (default: from the file extension)
        #[arg(short, long, value_enum)]
        format: Option<ReportOutputFormat>,
    },

    /// Report how many products still need the spec migration
    Check {
        /// Product document (overrides `products_path`)
        #[arg(short, long, value_name = "PATH")]
        data: Option<PathBuf>,
    },
}

fn init_logging(verbose: bool) {
    let fallback = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback)),
        )
        .init();
}

fn finish(
    summary: &RunSummary,
    output: Option<PathBuf>,
    format: Option<ReportOutputFormat>,
) -> Result<()> {
    report::print_summary(summary);
    if let Some(path) = output {
        let format = format.unwrap_or_else(|| ReportOutputFormat::for_path(&path));
        report::save_summary(summary, &path, format)?;
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = MigrateConfig::resolve(cli.config.as_deref())?;
    tracing::debug!(
        products = ?config.products_path,
        translations = ?config.translations_path,
        "configuration resolved"
    );

    match cli.command {
        Commands::Specs {
            data,
            dry_run,
            report,
            format,
        } => {
            let options = RunOptions {
                document: data.unwrap_or_else(|| config.products_path.clone()),
                dry_run,
            };
            println!("Migrating product specs in: {}", options.document.display());

            let summary = commands::run_specs(&options, &config.normalizer())?;
            finish(&summary, report, format)?;
        }

        Commands::Labels {
            translations,
            dry_run,
            report,
            format,
        } => {
            let options = RunOptions {
                document: translations.unwrap_or_else(|| config.translations_path.clone()),
                dry_run,
            };
            println!("Copying spec labels in: {}", options.document.display());

            let summary = commands::run_labels(&options)?;
            finish(&summary, report, format)?;
        }

        Commands::Check { data } => {
            let document = data.unwrap_or_else(|| config.products_path.clone());
            println!("Checking product specs in: {}", document.display());

            let summary = commands::run_check(document, &config.normalizer())?;
            report::print_summary(&summary);
            if summary.specs.as_ref().is_some_and(|stats| stats.changed()) {
                println!("{}", "Run `catalog-migrate specs` to convert them.".yellow());
            }
        }
    }

    Ok(())
}
