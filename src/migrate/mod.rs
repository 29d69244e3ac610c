// SPDX-License-Identifier: PMPL-1.0-or-later

//! Document-level migrations
//!
//! Each migration works on a fully loaded `serde_json::Value` and mutates it
//! in place. Nothing here touches the filesystem; callers load the document,
//! run the migration, and persist it only once every record is processed.

mod labels;
mod products;

pub use labels::{copy_spec_labels, LabelCopyStats};
pub use products::{migrate_products, migrate_record, preview_products, MigrationStats, RecordOutcome};
