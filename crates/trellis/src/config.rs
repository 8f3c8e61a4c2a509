//! Engine configuration.
//!
//! Configuration is read from YAML. Every field has a default, so an empty
//! file (or no file at all) yields [`EngineConfig::default`].
//!
//! ```yaml
//! graph-type: undirected
//! component-traversal: bfs-iterative
//! track-vertex-access: true
//! ```

use crate::domain::GraphType;
use crate::error::{Error, Result};
use crate::traversal::TraversalStrategy;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Tuning knobs for a [`crate::GraphManager`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct EngineConfig {
    /// Type of graph the manager is created with
    pub graph_type: GraphType,

    /// Traversal used to collect each component once its root is known
    pub component_traversal: TraversalStrategy,

    /// Whether neighbor queries update the queried vertex's access metadata
    pub track_vertex_access: bool,
}

impl EngineConfig {
    /// Parse configuration from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns `Error::Config` if the YAML is malformed or names an unknown
    /// field or value.
    pub fn from_yaml(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content).map_err(|e| Error::Config(e.to_string()))
    }

    /// Load configuration from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns `Error::Io` if the file cannot be read and `Error::Config` if
    /// it cannot be parsed.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_yaml(&content)?;
        tracing::debug!(path = %path.display(), ?config, "Loaded engine configuration");
        Ok(config)
    }

    /// Serialize the configuration to YAML.
    ///
    /// # Errors
    ///
    /// Returns `Error::Config` if serialization fails.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(|e| Error::Config(format!("YAML error: {e}")))
    }
}
