//! Topology configuration with TOML support.

use serde::{Deserialize, Serialize};

use crate::TopologyError;

/// Shape parameters for the broadcast tree.
///
/// Can be parsed from a TOML file via [`TopologyConfig::from_toml_str`] or
/// built programmatically (e.g. for tests). Both parameters are fixed for
/// the lifetime of a [`crate::TreeTopology`] instance; only the committee
/// list changes at runtime.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TopologyConfig {
    /// Branching factor of the broadcast tree — the number of direct
    /// children each committee position fans out to.
    #[serde(default = "default_tree_width")]
    pub tree_width: usize,

    /// Extra positions to skip when falling back past an unreachable
    /// child. With the default of 0 the search descends exactly one tree
    /// level per fallback hop.
    #[serde(default)]
    pub fallback_level_skip: usize,
}

// ── Serde default helpers ──────────────────────────────────────────────

fn default_tree_width() -> usize {
    3
}

// ── Impl ───────────────────────────────────────────────────────────────

impl TopologyConfig {
    /// Parse configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, TopologyError> {
        let config: Self = toml::from_str(s).map_err(|e| TopologyError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize the configuration to a TOML string.
    pub fn to_toml_string(&self) -> String {
        toml::to_string_pretty(self).expect("TopologyConfig is always serializable to TOML")
    }

    /// Check that the parameters describe a usable tree.
    pub fn validate(&self) -> Result<(), TopologyError> {
        if self.tree_width == 0 {
            return Err(TopologyError::InvalidTreeWidth(self.tree_width));
        }
        Ok(())
    }
}

impl Default for TopologyConfig {
    fn default() -> Self {
        Self {
            tree_width: default_tree_width(),
            fallback_level_skip: 0,
        }
    }
}
