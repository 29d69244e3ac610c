// SPDX-License-Identifier: PMPL-1.0-or-later

//! Spec normalizer
//!
//! Turns legacy `{value, unit}` entries into `{icon, values: {tr, en, ru}}`.
//! The source format has a single value per entry, so the value is repeated
//! in every language; only the unit label is translated. Entries that are
//! already normalized are returned as they are, which makes the transform
//! idempotent.

use crate::tables::{IconTable, UnitTable};
use crate::types::{LegacySpec, NormalizedSpec, SpecEntry, SpecMap};

/// Applies the icon and unit tables to spec entries.
#[derive(Debug, Clone, Default)]
pub struct Normalizer {
    icons: IconTable,
    units: UnitTable,
}

impl Normalizer {
    pub fn new(icons: IconTable, units: UnitTable) -> Self {
        Self { icons, units }
    }

    /// Normalizer over the built-in tables.
    pub fn builtin() -> Self {
        Self::new(IconTable::builtin(), UnitTable::builtin())
    }

    pub fn icons(&self) -> &IconTable {
        &self.icons
    }

    pub fn units(&self) -> &UnitTable {
        &self.units
    }

    /// Normalize every entry of a spec map. The output has the same keys.
    pub fn normalize(&self, specs: &SpecMap) -> SpecMap {
        specs
            .iter()
            .map(|(key, entry)| (key.clone(), self.normalize_entry(key, entry)))
            .collect()
    }

    pub fn normalize_entry(&self, key: &str, entry: &SpecEntry) -> SpecEntry {
        match entry {
            SpecEntry::Normalized(_) => entry.clone(),
            SpecEntry::Legacy(legacy) => SpecEntry::Normalized(self.convert(key, legacy)),
        }
    }

    fn convert(&self, key: &str, legacy: &LegacySpec) -> NormalizedSpec {
        let icon = self.icons.icon(key);
        let labels = self.units.labels(legacy.unit_or_empty());
        tracing::debug!(key, icon, unit = legacy.unit_or_empty(), "normalizing spec entry");
        NormalizedSpec::build(icon, legacy.value_or_empty(), &labels)
    }
}

/// Number of entries in `specs` that still need normalizing.
pub fn pending_entries(specs: &SpecMap) -> usize {
    specs.values().filter(|entry| !entry.is_normalized()).count()
}
