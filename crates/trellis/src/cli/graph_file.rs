//! Graph file format read by the CLI.
//!
//! ```yaml
//! type: directed        # or undirected; falls back to the engine config
//! vertices: [A, B]      # optional, for isolated vertices
//! edges:
//!   - { source: A, destination: B, weight: 2.5 }
//!   - { source: B, destination: C }               # weight defaults to 1.0
//! ```
//!
//! The same structure is accepted as JSON, since JSON is valid YAML.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::config::EngineConfig;
use crate::domain::{DEFAULT_WEIGHT, GraphType, Weight};
use crate::manager::GraphManager;

/// One edge entry of a graph file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EdgeSpec {
    /// Tail vertex
    pub source: String,
    /// Head vertex
    pub destination: String,
    /// Edge weight
    #[serde(default = "default_weight")]
    pub weight: Weight,
}

fn default_weight() -> Weight {
    DEFAULT_WEIGHT
}

/// Parsed graph file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GraphFile {
    /// Graph type; `None` defers to [`EngineConfig::graph_type`]
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub graph_type: Option<GraphType>,

    /// Vertices to create up front
    #[serde(default)]
    pub vertices: Vec<String>,

    /// Edges, added in file order
    #[serde(default)]
    pub edges: Vec<EdgeSpec>,
}

impl GraphFile {
    /// Parse a graph file from YAML or JSON text.
    ///
    /// # Errors
    ///
    /// Fails on malformed input, unknown fields or an unknown graph type.
    pub fn from_yaml(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content).context("Failed to parse graph file")
    }

    /// Read and parse a graph file.
    ///
    /// # Errors
    ///
    /// Fails if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read graph file: {}", path.display()))?;
        Self::from_yaml(&content).with_context(|| format!("Invalid graph file: {}", path.display()))
    }

    /// Build a manager holding this graph.
    ///
    /// The file's `type` wins over `config.graph_type` when both are given.
    /// Vertices are added before edges, so listing an edge endpoint under
    /// `vertices` as well is harmless.
    ///
    /// # Errors
    ///
    /// Fails on the first self-loop or duplicate edge, naming the offending
    /// entry.
    pub fn build(&self, config: EngineConfig) -> Result<GraphManager<String>> {
        let graph_type = self.graph_type.unwrap_or(config.graph_type);
        let manager = GraphManager::with_config(EngineConfig {
            graph_type,
            ..config
        });

        for vertex in &self.vertices {
            manager.add_vertex(vertex.clone());
        }

        for (index, edge) in self.edges.iter().enumerate() {
            manager
                .add_weighted_edge(edge.source.clone(), edge.destination.clone(), edge.weight)
                .with_context(|| {
                    format!(
                        "Invalid edge #{}: {} -> {}",
                        index + 1,
                        edge.source,
                        edge.destination
                    )
                })?;
        }

        tracing::info!(
            %graph_type,
            vertex_count = manager.vertex_count(),
            edge_count = manager.edge_count(),
            "Graph loaded"
        );
        Ok(manager)
    }
}
