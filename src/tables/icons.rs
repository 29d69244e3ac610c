// SPDX-License-Identifier: PMPL-1.0-or-later

//! Spec key → display icon.
//!
//! Icon names are the glyph identifiers the site's product page renders
//! next to each spec row.

use std::collections::HashMap;

/// Icon used for any spec key without an entry.
pub const DEFAULT_ICON: &str = "tag";

const BUILTIN: &[(&str, &str)] = &[
    // Dimensions
    ("workingWidth", "move-horizontal"),
    ("transportWidth", "move-horizontal"),
    ("workingDepth", "arrow-down-to-line"),
    ("length", "ruler"),
    ("width", "move-horizontal"),
    ("height", "move-vertical"),
    ("weight", "weight"),
    // Tillage tools
    ("legCount", "anchor"),
    ("legSpacing", "columns"),
    ("discCount", "disc"),
    ("discDiameter", "circle"),
    ("bladeCount", "scissors"),
    ("rowCount", "rows"),
    ("rowSpacing", "align-justify"),
    // Tractor requirements
    ("requiredPower", "zap"),
    ("power", "zap"),
    ("pto", "settings"),
    ("hitchCategory", "link"),
    ("hydraulicOutlets", "git-branch"),
    // Capacity and throughput
    ("tankCapacity", "droplet"),
    ("hopperCapacity", "package"),
    ("capacity", "package"),
    ("workingSpeed", "gauge"),
    ("workCapacity", "timer"),
    ("tyreSize", "circle-dot"),
];

/// Immutable mapping from spec key to icon name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconTable {
    entries: HashMap<String, String>,
}

impl IconTable {
    /// Table holding only the built-in entries.
    pub fn builtin() -> Self {
        let entries = BUILTIN
            .iter()
            .map(|(key, icon)| (key.to_string(), icon.to_string()))
            .collect();
        Self { entries }
    }

    /// Add or replace entries. Later entries win.
    pub fn with_overrides<I, K, V>(mut self, overrides: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        for (key, icon) in overrides {
            self.entries.insert(key.into(), icon.into());
        }
        self
    }

    /// Icon for `key`, or [`DEFAULT_ICON`] when the key is unknown.
    pub fn icon(&self, key: &str) -> &str {
        self.entries
            .get(key)
            .map(String::as_str)
            .unwrap_or(DEFAULT_ICON)
    }
}

impl Default for IconTable {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_keys_resolve() {
        let table = IconTable::builtin();
        assert_eq!(table.icon("weight"), "weight");
        assert_eq!(table.icon("legCount"), "anchor");
    }

    #[test]
    fn unknown_key_falls_back() {
        let table = IconTable::builtin();
        assert_eq!(table.icon("foo"), DEFAULT_ICON);
        assert_eq!(table.icon(""), DEFAULT_ICON);
    }

    #[test]
    fn lookup_is_case_sensitive() {
        assert_eq!(IconTable::builtin().icon("Weight"), DEFAULT_ICON);
    }

    #[test]
    fn overrides_replace_and_extend() {
        let table = IconTable::builtin().with_overrides([("weight", "scale"), ("frameType", "box")]);
        assert_eq!(table.icon("weight"), "scale");
        assert_eq!(table.icon("frameType"), "box");
        assert_eq!(table.entries.len(), BUILTIN.len() + 1);
    }
}
