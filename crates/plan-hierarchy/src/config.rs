//! Builder configuration

use serde::{Deserialize, Serialize};

/// Hierarchy builder configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HierarchyConfig {
    /// Emit a `warn` summary when rows are dropped as orphans
    pub log_orphans: bool,
}

impl HierarchyConfig {
    /// Create default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With orphan logging
    #[inline]
    #[must_use]
    pub fn with_log_orphans(mut self, enabled: bool) -> Self {
        self.log_orphans = enabled;
        self
    }
}

impl Default for HierarchyConfig {
    fn default() -> Self {
        Self { log_orphans: true }
    }
}
