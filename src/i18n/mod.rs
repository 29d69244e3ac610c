// SPDX-License-Identifier: PMPL-1.0-or-later

//! Site languages.
//!
//! The catalog is published in three languages and every migrated record
//! carries one slot per language:
//!
//! | Code | Language | Native name |
//! |------|----------|-------------|
//! | tr   | Turkish  | Türkçe      |
//! | en   | English  | English     |
//! | ru   | Russian  | Русский     |
//!
//! Codes are ISO 639-1, lowercase, and are used verbatim as JSON keys in both
//! the product document (`values.tr`) and the translation document (`tr.specLabels`).

mod catalog;
mod iso639;

pub use catalog::Lang;
pub use iso639::{language_name, native_name};
