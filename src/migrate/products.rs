// SPDX-License-Identifier: PMPL-1.0-or-later

//! Batch spec migration over the product document

use crate::normalize::{pending_entries, Normalizer};
use crate::types::{SpecEntry, SpecMap};
use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// What happened to a single product record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordOutcome {
    /// At least one entry was converted.
    Migrated { converted: usize, passed_through: usize },
    /// Every entry already had `values`.
    AlreadyNormalized { entries: usize },
    /// No `specs`, a null `specs`, or an empty one.
    NoSpecs,
    /// The record or its `specs` is not a JSON object; left as is.
    Malformed,
}

/// Counters for one run over the product document.
///
/// Only `records_migrated` counts as a change; the other record counters
/// explain why the remaining records were left alone.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MigrationStats {
    pub records_total: usize,
    pub records_migrated: usize,
    pub records_already_normalized: usize,
    pub records_without_specs: usize,
    pub records_malformed: usize,
    pub entries_converted: usize,
    pub entries_passed_through: usize,
}

impl MigrationStats {
    fn record(&mut self, outcome: RecordOutcome) {
        self.records_total += 1;
        match outcome {
            RecordOutcome::Migrated {
                converted,
                passed_through,
            } => {
                self.records_migrated += 1;
                self.entries_converted += converted;
                self.entries_passed_through += passed_through;
            }
            RecordOutcome::AlreadyNormalized { entries } => {
                self.records_already_normalized += 1;
                self.entries_passed_through += entries;
            }
            RecordOutcome::NoSpecs => self.records_without_specs += 1,
            RecordOutcome::Malformed => self.records_malformed += 1,
        }
    }

    pub fn changed(&self) -> bool {
        self.records_migrated > 0
    }
}

/// Normalize the specs of every product in `document`.
///
/// The document is either an array of products or an object with a
/// `products` array. Any other shape is an error and leaves the document
/// unchanged.
pub fn migrate_products(document: &mut Value, normalizer: &Normalizer) -> Result<MigrationStats> {
    let products = products_mut(document)?;
    let mut stats = MigrationStats::default();

    for (index, record) in products.iter_mut().enumerate() {
        let outcome = migrate_record(record, normalizer);
        let id = record_label(record, index);
        match outcome {
            RecordOutcome::Malformed => {
                tracing::warn!(record = %id, "skipping product with malformed specs")
            }
            _ => tracing::debug!(record = %id, ?outcome, "processed product"),
        }
        stats.record(outcome);
    }

    Ok(stats)
}

/// Name used for a record in log lines: its `id` as plain text, or its
/// position when it has none.
fn record_label(record: &Value, index: usize) -> String {
    record
        .get("id")
        .map(|id| id.as_str().map(str::to_string).unwrap_or_else(|| id.to_string()))
        .unwrap_or_else(|| format!("#{index}"))
}

/// Run the migration on a copy of `document` and report what it would do.
pub fn preview_products(document: &Value, normalizer: &Normalizer) -> Result<MigrationStats> {
    let mut scratch = document.clone();
    migrate_products(&mut scratch, normalizer)
}

/// Normalize one product record in place.
pub fn migrate_record(record: &mut Value, normalizer: &Normalizer) -> RecordOutcome {
    let Some(fields) = record.as_object_mut() else {
        return RecordOutcome::Malformed;
    };
    let specs_obj = match fields.get_mut("specs") {
        None | Some(Value::Null) => return RecordOutcome::NoSpecs,
        Some(Value::Object(specs)) => specs,
        Some(_) => return RecordOutcome::Malformed,
    };
    if specs_obj.is_empty() {
        return RecordOutcome::NoSpecs;
    }

    let specs: SpecMap = specs_obj
        .iter()
        .map(|(key, value)| (key.clone(), SpecEntry::from(value.clone())))
        .collect();
    let converted = pending_entries(&specs);
    if converted == 0 {
        return RecordOutcome::AlreadyNormalized {
            entries: specs.len(),
        };
    }

    let normalized = normalizer.normalize(&specs);
    // Rebuild in the order the keys appeared on disk.
    let rebuilt: Map<String, Value> = specs_obj
        .keys()
        .filter_map(|key| normalized.get(key).map(|entry| (key.clone(), entry.to_value())))
        .collect();
    *specs_obj = rebuilt;

    RecordOutcome::Migrated {
        converted,
        passed_through: specs.len() - converted,
    }
}

fn products_mut(document: &mut Value) -> Result<&mut Vec<Value>> {
    match document {
        Value::Array(items) => Ok(items),
        Value::Object(fields) => match fields.get_mut("products") {
            Some(Value::Array(items)) => Ok(items),
            Some(_) => bail!("`products` field is not an array"),
            None => bail!("document object has no `products` array"),
        },
        _ => bail!("product document must be an array or an object with a `products` array"),
    }
}
