// SPDX-License-Identifier: PMPL-1.0-or-later

//! Run configuration
//!
//! Read from `catalog-migrate.yaml` in the working directory when it exists:
//!
//! ```yaml
//! products_path: data/products.json
//! translations_path: data/translations.json
//! icons:
//!   frameType: box
//! units:
//!   KOVA: { tr: kova, en: bucket, ru: ковш }
//! ```
//!
//! Every field is optional. `icons` and `units` extend the built-in tables.

use crate::normalize::Normalizer;
use crate::tables::{IconTable, UnitLabels, UnitTable};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG_FILE: &str = "catalog-migrate.yaml";
pub const DEFAULT_PRODUCTS_PATH: &str = "data/products.json";
pub const DEFAULT_TRANSLATIONS_PATH: &str = "data/translations.json";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MigrateConfig {
    pub products_path: PathBuf,
    pub translations_path: PathBuf,
    pub icons: BTreeMap<String, String>,
    pub units: BTreeMap<String, UnitLabels>,
}

impl Default for MigrateConfig {
    fn default() -> Self {
        Self {
            products_path: PathBuf::from(DEFAULT_PRODUCTS_PATH),
            translations_path: PathBuf::from(DEFAULT_TRANSLATIONS_PATH),
            icons: BTreeMap::new(),
            units: BTreeMap::new(),
        }
    }
}

impl MigrateConfig {
    /// Load `path`, which must exist.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        Self::parse(&raw).with_context(|| format!("parsing config {}", path.display()))
    }

    /// Load the explicitly requested file, or the default file if present,
    /// or fall back to built-in defaults.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self> {
        Self::resolve_in(Path::new("."), explicit)
    }

    /// As [`MigrateConfig::resolve`], looking for the default file in `dir`.
    pub fn resolve_in(dir: &Path, explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => Self::load(path),
            None => {
                let default_path = dir.join(DEFAULT_CONFIG_FILE);
                if default_path.is_file() {
                    Self::load(&default_path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    pub fn parse(raw: &str) -> Result<Self> {
        // An empty file deserializes to unit, not to an empty mapping.
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(raw)?)
    }

    pub fn normalizer(&self) -> Normalizer {
        Normalizer::new(
            IconTable::builtin().with_overrides(self.icons.clone()),
            UnitTable::builtin().with_overrides(self.units.clone()),
        )
    }
}
