// SPDX-License-Identifier: PMPL-1.0-or-later

//! catalog-migrate: one-shot migrations for the product catalog.
//!
//! The site publishes every product in Turkish, English and Russian. Older
//! product records store each spec as a single `{value, unit}` pair; the
//! current site expects an icon plus one `{value, unit}` slot per language.
//!
//! MIGRATIONS:
//! 1. **Specs**: rewrites legacy spec entries of every product through the
//!    [`normalize::Normalizer`]. Already converted entries are left alone, so
//!    the migration can be re-run safely.
//! 2. **Labels**: backfills each language's `specLabels` from its `specs`
//!    in the translation document without overwriting existing labels.

pub mod commands;
pub mod config;
pub mod i18n;
pub mod migrate;
pub mod normalize;
pub mod report;
pub mod storage;
pub mod tables;
pub mod types;
