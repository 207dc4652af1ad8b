//! CLI configuration
//!
//! Read from an optional TOML file; every field has a default.
//!
//! ```toml
//! log_filter = "planctl=debug,plan_hierarchy=debug"
//! show_warnings = true
//!
//! [hierarchy]
//! log_orphans = false
//! ```

use anyhow::Context;
use plan_hierarchy::HierarchyConfig;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// planctl configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlanctlConfig {
    /// Default `tracing` filter, overridden by `RUST_LOG`
    pub log_filter: String,
    /// Print dropped rows to stderr after the output
    pub show_warnings: bool,
    /// Builder settings
    pub hierarchy: HierarchyConfig,
}

impl Default for PlanctlConfig {
    fn default() -> Self {
        Self {
            log_filter: "warn".to_string(),
            show_warnings: true,
            hierarchy: HierarchyConfig::default(),
        }
    }
}

impl PlanctlConfig {
    /// Parse TOML document
    ///
    /// # Errors
    /// Returns error on malformed TOML or mistyped fields
    pub fn from_toml_str(document: &str) -> anyhow::Result<Self> {
        toml::from_str(document).context("invalid planctl configuration")
    }

    /// Read configuration file, or defaults when no path is given
    ///
    /// # Errors
    /// Returns error if the file cannot be read or parsed
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let document = std::fs::read_to_string(path)
            .with_context(|| format!("cannot read config {}", path.display()))?;
        Self::from_toml_str(&document)
    }
}
