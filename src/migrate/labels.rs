// SPDX-License-Identifier: PMPL-1.0-or-later

//! Backfill `specLabels` from `specs` in the translation document
//!
//! The translation document holds one object per language:
//!
//! ```json
//! { "tr": { "specs": {..}, "specLabels": {..} }, "en": {..}, "ru": {..} }
//! ```
//!
//! Keys already present in `specLabels` are never overwritten.

use crate::i18n::Lang;
use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

const SOURCE_FIELD: &str = "specs";
const TARGET_FIELD: &str = "specLabels";

/// Per-language counters for one label copy run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelCopyStats {
    pub copied: BTreeMap<Lang, usize>,
    pub kept_existing: BTreeMap<Lang, usize>,
    /// Languages whose section is missing or not an object.
    pub skipped_languages: Vec<Lang>,
}

impl LabelCopyStats {
    pub fn total_copied(&self) -> usize {
        self.copied.values().sum()
    }

    pub fn copied_for(&self, lang: Lang) -> usize {
        self.copied.get(&lang).copied().unwrap_or(0)
    }
}

/// Copy missing `specLabels` entries from `specs` for every language in `langs`.
pub fn copy_spec_labels(document: &mut Value, langs: &[Lang]) -> Result<LabelCopyStats> {
    let Some(sections) = document.as_object_mut() else {
        bail!("translation document must be an object keyed by language code");
    };
    let mut stats = LabelCopyStats::default();

    for &lang in langs {
        let Some(Value::Object(section)) = sections.get_mut(lang.code()) else {
            tracing::warn!(%lang, "no translation section for language");
            stats.skipped_languages.push(lang);
            continue;
        };

        let source = match section.get(SOURCE_FIELD) {
            Some(Value::Object(specs)) => specs.clone(),
            _ => Map::new(),
        };

        let slot = section
            .entry(TARGET_FIELD)
            .or_insert_with(|| Value::Object(Map::new()));
        if slot.is_null() {
            *slot = Value::Object(Map::new());
        }
        let Value::Object(target) = slot else {
            tracing::warn!(%lang, "`specLabels` is not an object; leaving it alone");
            stats.skipped_languages.push(lang);
            continue;
        };

        let (copied, kept) = merge_missing(target, source);
        tracing::debug!(%lang, copied, kept, "copied spec labels");
        stats.copied.insert(lang, copied);
        stats.kept_existing.insert(lang, kept);
    }

    Ok(stats)
}

/// Insert every `source` entry whose key is absent from `target`.
/// Returns (inserted, already present).
fn merge_missing(target: &mut Map<String, Value>, source: Map<String, Value>) -> (usize, usize) {
    let mut copied = 0;
    let mut kept = 0;
    for (key, value) in source {
        if target.contains_key(&key) {
            kept += 1;
        } else {
            target.insert(key, value);
            copied += 1;
        }
    }
    (copied, kept)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn existing_label_is_not_overwritten() {
        let mut doc = json!({
            "en": {
                "specs": {"workingWidth": "Width", "weight": "Weight"},
                "specLabels": {"workingWidth": "Working width"}
            }
        });
        let stats = copy_spec_labels(&mut doc, &[Lang::En]).unwrap();
        assert_eq!(doc["en"]["specLabels"]["workingWidth"], "Working width");
        assert_eq!(doc["en"]["specLabels"]["weight"], "Weight");
        assert_eq!(stats.copied_for(Lang::En), 1);
        assert_eq!(stats.kept_existing[&Lang::En], 1);
    }

    #[test]
    fn missing_label_map_is_created() {
        let mut doc = json!({"ru": {"specs": {"weight": "Вес"}}});
        let stats = copy_spec_labels(&mut doc, &[Lang::Ru]).unwrap();
        assert_eq!(doc["ru"]["specLabels"], json!({"weight": "Вес"}));
        assert_eq!(stats.total_copied(), 1);
    }

    #[test]
    fn missing_language_is_reported_not_fatal() {
        let mut doc = json!({"tr": {"specs": {}, "specLabels": {}}});
        let stats = copy_spec_labels(&mut doc, Lang::all()).unwrap();
        assert_eq!(stats.skipped_languages, vec![Lang::En, Lang::Ru]);
        assert_eq!(stats.total_copied(), 0);
    }

    #[test]
    fn non_object_labels_are_left_alone() {
        let mut doc = json!({"tr": {"specs": {"weight": "Ağırlık"}, "specLabels": "todo"}});
        let stats = copy_spec_labels(&mut doc, &[Lang::Tr]).unwrap();
        assert_eq!(doc["tr"]["specLabels"], "todo");
        assert_eq!(stats.skipped_languages, vec![Lang::Tr]);
    }

    #[test]
    fn array_document_is_rejected() {
        let mut doc = json!([]);
        assert!(copy_spec_labels(&mut doc, Lang::all()).is_err());
    }
}
