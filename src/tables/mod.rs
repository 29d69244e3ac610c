// SPDX-License-Identifier: PMPL-1.0-or-later

//! Lookup tables used by the spec normalizer
//!
//! Both tables are immutable once built. They start from the built-in
//! entries compiled into the binary and may be extended by the `icons` and
//! `units` sections of the configuration file. Lookups are total: a key or
//! unit code that is not in a table resolves through a fixed fallback.

mod icons;
mod units;

pub use icons::{IconTable, DEFAULT_ICON};
pub use units::{UnitLabels, UnitTable};
