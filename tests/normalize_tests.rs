// SPDX-License-Identifier: PMPL-1.0-or-later

//! Properties of the spec normalizer over whole spec maps

use catalog_migrate::i18n::Lang;
use catalog_migrate::normalize::Normalizer;
use catalog_migrate::types::{SpecEntry, SpecMap, SpecValue};
use serde_json::json;

fn spec_map(value: serde_json::Value) -> SpecMap {
    serde_json::from_value(value).expect("spec map should deserialize")
}

fn sample() -> SpecMap {
    spec_map(json!({
        "workingWidth": {"value": "3", "unit": "M"},
        "weight": {"value": "950", "unit": "KG"},
        "hopperCapacity": {"value": "3.0", "unit": "KG"},
        "legCount": {"value": "7", "unit": "ADET"},
        "frameType": {"value": "Box", "unit": ""},
        "colour": {},
        "odd": {"value": "10", "unit": "XYZ"},
        "requiredPower": {"icon": "zap", "values": {
            "tr": {"value": "90", "unit": "HP"},
            "en": {"value": "90", "unit": "HP"},
            "ru": {"value": "90", "unit": "л.с."}
        }}
    }))
}

#[test]
fn test_normalize_is_idempotent() {
    let normalizer = Normalizer::builtin();
    let once = normalizer.normalize(&sample());
    let twice = normalizer.normalize(&once);
    assert_eq!(once, twice);
}

#[test]
fn test_normalize_preserves_key_set() {
    let input = sample();
    let output = Normalizer::builtin().normalize(&input);
    let in_keys: Vec<_> = input.keys().collect();
    let out_keys: Vec<_> = output.keys().collect();
    assert_eq!(in_keys, out_keys);
}

#[test]
fn test_every_output_entry_is_normalized_with_three_languages() {
    let output = Normalizer::builtin().normalize(&sample());
    for (key, entry) in &output {
        let SpecEntry::Normalized(spec) = entry else {
            panic!("{key} was left in legacy form");
        };
        for lang in Lang::all() {
            assert!(spec.value(*lang).is_some(), "{key} is missing the {lang} slot");
        }
    }
}

#[test]
fn test_default_and_known_icons() {
    let normalizer = Normalizer::builtin();
    let output = normalizer.normalize(&spec_map(json!({
        "foo": {"value": "5", "unit": "kg"},
        "weight": {"value": "5", "unit": "kg"}
    })));
    let icon = |key: &str| match &output[key] {
        SpecEntry::Normalized(spec) => spec.icon().map(str::to_string),
        SpecEntry::Legacy(_) => None,
    };
    assert_eq!(icon("foo").as_deref(), Some("tag"));
    assert_eq!(icon("weight").as_deref(), Some("weight"));
}

#[test]
fn test_unit_translation_and_fallbacks() {
    let output = Normalizer::builtin().normalize(&sample());
    let slot = |key: &str, lang: Lang| match &output[key] {
        SpecEntry::Normalized(spec) => spec.value(lang),
        SpecEntry::Legacy(_) => None,
    };

    assert_eq!(slot("weight", Lang::Tr), Some(SpecValue::new("950", "kg")));
    assert_eq!(slot("weight", Lang::En), Some(SpecValue::new("950", "kg")));
    assert_eq!(slot("weight", Lang::Ru), Some(SpecValue::new("950", "кг")));

    assert_eq!(slot("hopperCapacity", Lang::Tr), Some(SpecValue::new("3.0", "kg")));
    assert_eq!(slot("hopperCapacity", Lang::En), Some(SpecValue::new("3.0", "kg")));
    assert_eq!(slot("hopperCapacity", Lang::Ru), Some(SpecValue::new("3.0", "кг")));

    for lang in Lang::all() {
        assert_eq!(slot("odd", *lang), Some(SpecValue::new("10", "XYZ")));
        assert_eq!(slot("colour", *lang), Some(SpecValue::new("", "")));
        assert_eq!(slot("frameType", *lang), Some(SpecValue::new("Box", "")));
    }
}

#[test]
fn test_already_normalized_entry_is_passed_through() {
    let input = sample();
    let output = Normalizer::builtin().normalize(&input);
    assert_eq!(output["requiredPower"], input["requiredPower"]);
}
