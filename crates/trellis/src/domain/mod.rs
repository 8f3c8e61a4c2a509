//! Domain types for the graph engine.
//!
//! This module contains the value types shared by the context, the
//! operations and the algorithms: the graph type, the vertex bound, the
//! adjacency representation, aggregate statistics and per-vertex metadata.

mod metadata;
mod stats;

pub use metadata::VertexMetadata;
pub use stats::GraphStats;

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::hash::Hash;

/// Edge weight.
pub type Weight = f64;

/// Weight assigned by [`crate::GraphManager::add_edge`].
pub const DEFAULT_WEIGHT: Weight = 1.0;

/// Adjacency representation: vertex -> (neighbor -> weight).
///
/// Ordered maps keep every traversal deterministic for a given graph.
pub type AdjacencyMap<T> = BTreeMap<T, BTreeMap<T, Weight>>;

/// Bound for values usable as graph vertices.
///
/// Blanket-implemented for every type that is cloneable, hashable, totally
/// ordered and debuggable (e.g. `String`, `&'static str`, integers).
pub trait Vertex: Clone + Eq + Hash + Ord + fmt::Debug {}

impl<T: Clone + Eq + Hash + Ord + fmt::Debug> Vertex for T {}

/// Whether edges are one-way or mirrored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GraphType {
    /// Edges are one-way: `u -> v` says nothing about `v -> u`.
    #[default]
    Directed,
    /// Every edge `u - v` is stored in both directions with the same weight.
    Undirected,
}

impl GraphType {
    /// Returns `true` for [`GraphType::Undirected`].
    #[must_use]
    pub fn is_undirected(self) -> bool {
        self == Self::Undirected
    }
}

impl fmt::Display for GraphType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Directed => write!(f, "directed"),
            Self::Undirected => write!(f, "undirected"),
        }
    }
}
