//! Configuration for the Reconciler

use revisor_domain::DEFAULT_CATEGORY;
use serde::{Deserialize, Serialize};

/// Configuration for the Reconciler
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReconcileConfig {
    /// Category given to a merged topic when none of the merged entries is
    /// still present
    pub default_category: String,

    /// Write patched artifacts as indented JSON
    pub pretty_output: bool,

    /// Fold every correction through the applier when all are selected,
    /// instead of returning the verified artifact
    pub replay_when_all_selected: bool,
}

impl ReconcileConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.default_category.trim().is_empty() {
            return Err("default_category must not be empty".to_string());
        }
        Ok(())
    }

    /// Replay preset: always patch the original for kinds with an applier
    pub fn replay() -> Self {
        Self {
            replay_when_all_selected: true,
            ..Self::default()
        }
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, String> {
        toml::from_str(toml_str).map_err(|e| format!("Failed to parse TOML: {}", e))
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, String> {
        toml::to_string_pretty(self).map_err(|e| format!("Failed to serialize to TOML: {}", e))
    }
}

impl Default for ReconcileConfig {
    fn default() -> Self {
        Self {
            default_category: DEFAULT_CATEGORY.to_string(),
            pretty_output: false,
            replay_when_all_selected: false,
        }
    }
}
