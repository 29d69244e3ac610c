// SPDX-License-Identifier: PMPL-1.0-or-later

//! Unit code → per-language unit label.
//!
//! Legacy records store units as the abbreviation typed into the admin
//! panel, so both the upper- and lower-case spelling of every code is
//! listed. The table is case-sensitive: a spelling that is not listed is
//! treated as an unknown unit and copied verbatim.

use crate::i18n::Lang;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// (code, tr, en, ru)
const BUILTIN: &[(&str, &str, &str, &str)] = &[
    ("", "", "", ""),
    // Mass
    ("KG", "kg", "kg", "кг"),
    ("kg", "kg", "kg", "кг"),
    ("TON", "ton", "t", "т"),
    ("ton", "ton", "t", "т"),
    // Length
    ("M", "m", "m", "м"),
    ("m", "m", "m", "м"),
    ("CM", "cm", "cm", "см"),
    ("cm", "cm", "cm", "см"),
    ("MM", "mm", "mm", "мм"),
    ("mm", "mm", "mm", "мм"),
    ("INCH", "inç", "in", "дюйм"),
    ("inch", "inç", "in", "дюйм"),
    // Area
    ("M2", "m²", "m²", "м²"),
    ("m2", "m²", "m²", "м²"),
    ("DA", "da", "decare", "дка"),
    ("da", "da", "decare", "дка"),
    ("DEKAR", "dekar", "decare", "декар"),
    ("dekar", "dekar", "decare", "декар"),
    ("HA", "ha", "ha", "га"),
    ("ha", "ha", "ha", "га"),
    // Volume
    ("LT", "lt", "L", "л"),
    ("lt", "lt", "L", "л"),
    ("L", "lt", "L", "л"),
    ("l", "lt", "L", "л"),
    ("M3", "m³", "m³", "м³"),
    ("m3", "m³", "m³", "м³"),
    // Power and drive
    ("HP", "HP", "HP", "л.с."),
    ("hp", "HP", "HP", "л.с."),
    ("BG", "BG", "HP", "л.с."),
    ("bg", "BG", "HP", "л.с."),
    ("KW", "kW", "kW", "кВт"),
    ("kw", "kW", "kW", "кВт"),
    ("RPM", "dev/dk", "rpm", "об/мин"),
    ("rpm", "dev/dk", "rpm", "об/мин"),
    // Speed and throughput
    ("KM/H", "km/sa", "km/h", "км/ч"),
    ("km/h", "km/sa", "km/h", "км/ч"),
    ("KM/SA", "km/sa", "km/h", "км/ч"),
    ("km/sa", "km/sa", "km/h", "км/ч"),
    ("DA/H", "da/sa", "decare/h", "дка/ч"),
    ("da/h", "da/sa", "decare/h", "дка/ч"),
    // Counts
    ("ADET", "adet", "pcs", "шт"),
    ("adet", "adet", "pcs", "шт"),
    ("PCS", "adet", "pcs", "шт"),
    ("pcs", "adet", "pcs", "шт"),
    ("SIRA", "sıra", "rows", "рядов"),
    ("sira", "sıra", "rows", "рядов"),
    // Pressure
    ("BAR", "bar", "bar", "бар"),
    ("bar", "bar", "bar", "бар"),
];

/// A unit label in every site language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnitLabels {
    pub tr: String,
    pub en: String,
    pub ru: String,
}

impl UnitLabels {
    pub fn new(tr: impl Into<String>, en: impl Into<String>, ru: impl Into<String>) -> Self {
        Self {
            tr: tr.into(),
            en: en.into(),
            ru: ru.into(),
        }
    }

    /// The same text in all three languages.
    pub fn verbatim(code: &str) -> Self {
        Self::new(code, code, code)
    }

    pub fn get(&self, lang: Lang) -> &str {
        match lang {
            Lang::Tr => &self.tr,
            Lang::En => &self.en,
            Lang::Ru => &self.ru,
        }
    }
}

/// Immutable, case-sensitive mapping from unit code to [`UnitLabels`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnitTable {
    entries: HashMap<String, UnitLabels>,
}

impl UnitTable {
    /// Table holding only the built-in entries.
    pub fn builtin() -> Self {
        let entries = BUILTIN
            .iter()
            .map(|(code, tr, en, ru)| (code.to_string(), UnitLabels::new(*tr, *en, *ru)))
            .collect();
        Self { entries }
    }

    /// Add or replace entries. Later entries win.
    pub fn with_overrides<I, K>(mut self, overrides: I) -> Self
    where
        I: IntoIterator<Item = (K, UnitLabels)>,
        K: Into<String>,
    {
        for (code, labels) in overrides {
            self.entries.insert(code.into(), labels);
        }
        self
    }

    /// Labels for `code`; unknown codes come back unchanged in every language.
    pub fn labels(&self, code: &str) -> UnitLabels {
        self.entries
            .get(code)
            .cloned()
            .unwrap_or_else(|| UnitLabels::verbatim(code))
    }
}

impl Default for UnitTable {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kilograms_translate() {
        let labels = UnitTable::builtin().labels("KG");
        assert_eq!(labels, UnitLabels::new("kg", "kg", "кг"));
    }

    #[test]
    fn both_cases_listed_for_every_letter_code() {
        let table = UnitTable::builtin();
        for (code, ..) in BUILTIN {
            let upper = code.to_uppercase();
            let lower = code.to_lowercase();
            assert!(table.entries.contains_key(&upper), "missing upper-case variant of {code:?}");
            assert!(table.entries.contains_key(&lower), "missing lower-case variant of {code:?}");
        }
    }

    #[test]
    fn unknown_unit_is_verbatim() {
        let labels = UnitTable::builtin().labels("XYZ");
        for lang in Lang::all() {
            assert_eq!(labels.get(*lang), "XYZ");
        }
    }

    #[test]
    fn mixed_case_spelling_is_unknown() {
        assert_eq!(UnitTable::builtin().labels("Kg"), UnitLabels::verbatim("Kg"));
    }

    #[test]
    fn empty_code_is_listed() {
        let table = UnitTable::builtin();
        assert!(table.entries.contains_key(""));
        assert_eq!(table.labels(""), UnitLabels::new("", "", ""));
    }

    #[test]
    fn overrides_win() {
        let table = UnitTable::builtin().with_overrides([("KG", UnitLabels::new("kilo", "kg", "кг"))]);
        assert_eq!(table.labels("KG").tr, "kilo");
        assert_eq!(table.labels("kg").tr, "kg");
    }
}
