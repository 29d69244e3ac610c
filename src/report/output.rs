// SPDX-License-Identifier: PMPL-1.0-or-later

//! Serialization helpers for exported run summaries

use crate::report::RunSummary;
use anyhow::Result;
use clap::ValueEnum;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ReportOutputFormat {
    #[default]
    Json,
    Yaml,
}

impl ReportOutputFormat {
    pub fn parse(value: &str) -> Option<Self> {
        match value.to_ascii_lowercase().as_str() {
            "json" => Some(ReportOutputFormat::Json),
            "yaml" | "yml" => Some(ReportOutputFormat::Yaml),
            _ => None,
        }
    }

    /// Pick the format from a file extension, defaulting to JSON.
    pub fn for_path(path: &std::path::Path) -> Self {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(Self::parse)
            .unwrap_or_default()
    }

    pub fn serialize(&self, summary: &RunSummary) -> Result<String> {
        match self {
            ReportOutputFormat::Json => Ok(serde_json::to_string_pretty(summary)?),
            ReportOutputFormat::Yaml => Ok(serde_yaml::to_string(summary)?),
        }
    }
}
