// SPDX-License-Identifier: PMPL-1.0-or-later

//! Core type definitions for catalog-migrate
//!
//! A product's `specs` object maps a spec key (`workingWidth`, `weight`, ...)
//! to one entry. Entries exist in two shapes on disk:
//!
//! ```json
//! { "value": "3.0", "unit": "KG" }
//! { "icon": "weight", "values": { "tr": {..}, "en": {..}, "ru": {..} } }
//! ```
//!
//! The shape is decided once, when the entry is read: anything carrying a
//! `values` field, whatever its content, is [`SpecEntry::Normalized`],
//! everything else is [`SpecEntry::Legacy`].

use crate::i18n::Lang;
use crate::tables::UnitLabels;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// Spec key → entry for one product.
pub type SpecMap = BTreeMap<String, SpecEntry>;

/// One spec entry, in whichever shape it was stored.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum SpecEntry {
    Legacy(LegacySpec),
    Normalized(NormalizedSpec),
}

impl SpecEntry {
    pub fn is_normalized(&self) -> bool {
        matches!(self, SpecEntry::Normalized(_))
    }

    /// JSON form of the entry, exactly as it will be written back.
    pub fn to_value(&self) -> Value {
        match self {
            SpecEntry::Legacy(legacy) => legacy.to_value(),
            SpecEntry::Normalized(normalized) => Value::Object(normalized.0.clone()),
        }
    }
}

impl From<Value> for SpecEntry {
    fn from(value: Value) -> Self {
        match value {
            Value::Object(map) => {
                if map.contains_key("values") {
                    SpecEntry::Normalized(NormalizedSpec(map))
                } else {
                    SpecEntry::Legacy(LegacySpec {
                        value: scalar_text(map.get("value")),
                        unit: scalar_text(map.get("unit")),
                    })
                }
            }
            // A bare scalar is read as a value without a unit.
            other => SpecEntry::Legacy(LegacySpec {
                value: scalar_text(Some(&other)),
                unit: None,
            }),
        }
    }
}

impl<'de> Deserialize<'de> for SpecEntry {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Value::deserialize(deserializer).map(SpecEntry::from)
    }
}

/// Text of a scalar JSON value. Null, arrays and objects have none.
fn scalar_text(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::String(text) => Some(text.clone()),
        Value::Number(number) => Some(number.to_string()),
        Value::Bool(flag) => Some(flag.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

/// Single-language entry: one value and one unit code.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LegacySpec {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
}

impl LegacySpec {
    pub fn new(value: impl Into<String>, unit: impl Into<String>) -> Self {
        Self {
            value: Some(value.into()),
            unit: Some(unit.into()),
        }
    }

    pub fn value_or_empty(&self) -> &str {
        self.value.as_deref().unwrap_or("")
    }

    pub fn unit_or_empty(&self) -> &str {
        self.unit.as_deref().unwrap_or("")
    }

    fn to_value(&self) -> Value {
        let mut map = Map::new();
        if let Some(value) = &self.value {
            map.insert("value".into(), Value::String(value.clone()));
        }
        if let Some(unit) = &self.unit {
            map.insert("unit".into(), Value::String(unit.clone()));
        }
        Value::Object(map)
    }
}

/// Multi-language entry.
///
/// Holds the JSON object it was read from so that entries which were
/// already normalized on disk are written back untouched, including any
/// fields this tool does not know about.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct NormalizedSpec(Map<String, Value>);

impl NormalizedSpec {
    /// Build `{icon, values: {tr, en, ru}}` with `value` repeated in every
    /// language and the unit label taken per language.
    pub fn build(icon: &str, value: &str, units: &UnitLabels) -> Self {
        let mut values = Map::new();
        for lang in Lang::all() {
            let mut slot = Map::new();
            slot.insert("value".into(), Value::String(value.to_string()));
            slot.insert("unit".into(), Value::String(units.get(*lang).to_string()));
            values.insert(lang.code().into(), Value::Object(slot));
        }

        let mut map = Map::new();
        map.insert("icon".into(), Value::String(icon.to_string()));
        map.insert("values".into(), Value::Object(values));
        Self(map)
    }

    pub fn icon(&self) -> Option<&str> {
        self.0.get("icon").and_then(Value::as_str)
    }

    /// The `{value, unit}` slot for one language, if present and well formed.
    pub fn value(&self, lang: Lang) -> Option<SpecValue> {
        let slot = self.0.get("values")?.get(lang.code())?;
        serde_json::from_value(slot.clone()).ok()
    }
}

/// One language slot of a normalized entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpecValue {
    #[serde(default)]
    pub value: String,
    #[serde(default)]
    pub unit: String,
}

impl SpecValue {
    pub fn new(value: impl Into<String>, unit: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            unit: unit.into(),
        }
    }
}
