// SPDX-License-Identifier: PMPL-1.0-or-later

//! End-to-end tests for the `labels` command

use catalog_migrate::commands::{self, RunOptions};
use catalog_migrate::i18n::Lang;
use catalog_migrate::report::{ReportOutputFormat, RunKind, RunSummary};
use serde_json::{json, Value};
use std::fs;
use tempfile::TempDir;

fn translations() -> Value {
    json!({
        "tr": {
            "nav": {"home": "Ana Sayfa"},
            "specs": {"workingWidth": "Çalışma Genişliği", "weight": "Ağırlık"},
            "specLabels": {"workingWidth": "İş Genişliği"}
        },
        "en": {
            "specs": {"workingWidth": "Working Width", "weight": "Weight"}
        },
        "ru": {
            "specs": {"weight": "Вес"},
            "specLabels": {}
        }
    })
}

#[test]
fn test_labels_copy_and_keep_existing() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("translations.json");
    fs::write(&path, serde_json::to_string_pretty(&translations()).unwrap()).unwrap();

    let options = RunOptions {
        document: path.clone(),
        dry_run: false,
    };
    let summary = commands::run_labels(&options).expect("label copy should succeed");
    assert_eq!(summary.kind, RunKind::Labels);
    assert!(summary.written);

    let stats = summary.labels.unwrap();
    assert_eq!(stats.copied_for(Lang::Tr), 1);
    assert_eq!(stats.copied_for(Lang::En), 2);
    assert_eq!(stats.copied_for(Lang::Ru), 1);
    assert_eq!(stats.total_copied(), 4);
    assert!(stats.skipped_languages.is_empty());

    let written: Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(written["tr"]["specLabels"]["workingWidth"], "İş Genişliği");
    assert_eq!(written["tr"]["specLabels"]["weight"], "Ağırlık");
    assert_eq!(written["en"]["specLabels"]["workingWidth"], "Working Width");
    assert_eq!(written["tr"]["nav"]["home"], "Ana Sayfa");
}

#[test]
fn test_labels_second_run_copies_nothing() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("translations.json");
    fs::write(&path, serde_json::to_string(&translations()).unwrap()).unwrap();
    let options = RunOptions {
        document: path,
        dry_run: false,
    };

    commands::run_labels(&options).unwrap();
    let second = commands::run_labels(&options).unwrap().labels.unwrap();
    assert_eq!(second.total_copied(), 0);
    assert_eq!(second.kept_existing[&Lang::En], 2);
}

#[test]
fn test_labels_dry_run_and_summary_export() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("translations.json");
    let original = serde_json::to_string(&translations()).unwrap();
    fs::write(&path, &original).unwrap();

    let options = RunOptions {
        document: path.clone(),
        dry_run: true,
    };
    let summary = commands::run_labels(&options).unwrap();
    assert!(!summary.written);
    assert_eq!(fs::read_to_string(&path).unwrap(), original);

    let json = ReportOutputFormat::Json.serialize(&summary).unwrap();
    let parsed: RunSummary = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed.labels.unwrap().copied_for(Lang::En), 2);
    assert!(parsed.dry_run);
}
