// SPDX-License-Identifier: PMPL-1.0-or-later

//! Supported language codes.
//!
//! ## Adding a new language
//!
//! 1. Add a variant to [`Lang`]
//! 2. Add its arm to `Lang::code()`
//! 3. Append it to `Lang::all()`
//! 4. Give every built-in unit in `tables::units` a label for it

use serde::{Deserialize, Serialize};
use std::fmt;

/// A language the catalog is published in.
///
/// Variant order is the order language slots are written in migrated
/// records (`tr`, `en`, `ru`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Lang {
    Tr,
    En,
    Ru,
}

impl Lang {
    /// ISO 639-1 two-letter code for this language.
    pub fn code(&self) -> &'static str {
        match self {
            Lang::Tr => "tr",
            Lang::En => "en",
            Lang::Ru => "ru",
        }
    }

    /// All supported languages, in record order.
    pub fn all() -> &'static [Lang] {
        &[Lang::Tr, Lang::En, Lang::Ru]
    }
}

impl fmt::Display for Lang {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
