//! Shared graph state.
//!
//! [`GraphContext`] is the single owner of a graph's adjacency list, vertex
//! metadata, statistics and revision counter. Mutators live in
//! [`crate::operations`]; the algorithms only read through the accessors
//! defined here.
//!
//! The context itself is not synchronized. [`crate::GraphManager`] wraps it
//! in a reader/writer lock and exposes whole operations as the locked unit.

use crate::domain::{AdjacencyMap, GraphStats, GraphType, Vertex, VertexMetadata, Weight};
use crate::traversal::Adjacency;
use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt::Write as _;

/// Adjacency list plus the bookkeeping kept alongside it.
///
/// # Invariants
///
/// - Every vertex that appears as a neighbor also has its own adjacency entry.
/// - `vertex_metadata` has exactly the keys of `adjacency`.
/// - For [`GraphType::Undirected`], `u -> v` with weight `w` implies
///   `v -> u` with weight `w`.
/// - `version` only grows, and only on successful mutations.
#[derive(Debug, Clone)]
pub struct GraphContext<T> {
    pub(crate) graph_type: GraphType,
    pub(crate) adjacency: AdjacencyMap<T>,
    pub(crate) vertex_metadata: BTreeMap<T, VertexMetadata>,
    pub(crate) properties: BTreeMap<String, Value>,
    pub(crate) stats: GraphStats,
    pub(crate) version: u64,
    pub(crate) updated_at: DateTime<Utc>,
}

/// Point-in-time copy of a context as plain nested records.
///
/// This is what a presentation layer serializes when it needs to render the
/// whole graph.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GraphSnapshot<T: Ord> {
    /// Graph type
    #[serde(rename = "type")]
    pub graph_type: GraphType,
    /// Vertex -> (neighbor -> weight)
    pub adjacency_list: AdjacencyMap<T>,
    /// Per-vertex metadata
    pub vertex_metadata: BTreeMap<T, VertexMetadata>,
    /// Graph-level properties
    pub properties: BTreeMap<String, Value>,
    /// Aggregate counters
    pub stats: GraphStats,
    /// Revision counter
    pub version: u64,
    /// Time of the last mutation
    pub updated_at: DateTime<Utc>,
}

impl<T: Vertex> GraphContext<T> {
    /// Create an empty context of the given type at version 1.
    #[must_use]
    pub fn new(graph_type: GraphType) -> Self {
        Self {
            graph_type,
            adjacency: AdjacencyMap::new(),
            vertex_metadata: BTreeMap::new(),
            properties: BTreeMap::new(),
            stats: GraphStats::default(),
            version: 1,
            updated_at: Utc::now(),
        }
    }

    /// The fixed graph type.
    #[must_use]
    pub fn graph_type(&self) -> GraphType {
        self.graph_type
    }

    /// All vertices in ascending order.
    pub fn vertices(&self) -> impl Iterator<Item = &T> {
        self.adjacency.keys()
    }

    /// Whether `vertex` has an adjacency entry.
    #[must_use]
    pub fn contains_vertex(&self, vertex: &T) -> bool {
        self.adjacency.contains_key(vertex)
    }

    /// Outgoing neighbors of `vertex`; empty when the vertex is absent.
    pub fn neighbors<'a>(&'a self, vertex: &T) -> impl Iterator<Item = &'a T> + use<'a, T> {
        self.adjacency.get(vertex).into_iter().flat_map(BTreeMap::keys)
    }

    /// Outgoing neighbors of `vertex` with their weights, if the vertex exists.
    #[must_use]
    pub fn neighbors_with_weight(&self, vertex: &T) -> Option<&BTreeMap<T, Weight>> {
        self.adjacency.get(vertex)
    }

    /// Weight of the edge `source -> destination`, if present.
    #[must_use]
    pub fn edge_weight(&self, source: &T, destination: &T) -> Option<Weight> {
        self.adjacency
            .get(source)
            .and_then(|edges| edges.get(destination))
            .copied()
    }

    /// Number of stored outgoing entries of `vertex`; 0 when absent.
    ///
    /// Undirected edges are stored in both directions, so this is the degree
    /// of the vertex for undirected graphs.
    #[must_use]
    pub fn out_degree(&self, vertex: &T) -> usize {
        self.adjacency.get(vertex).map_or(0, BTreeMap::len)
    }

    /// Metadata record of `vertex`.
    #[must_use]
    pub fn vertex_metadata(&self, vertex: &T) -> Option<&VertexMetadata> {
        self.vertex_metadata.get(vertex)
    }

    /// Graph-level properties.
    #[must_use]
    pub fn properties(&self) -> &BTreeMap<String, Value> {
        &self.properties
    }

    /// Aggregate counters.
    #[must_use]
    pub fn stats(&self) -> GraphStats {
        self.stats
    }

    /// Revision counter, starting at 1.
    #[must_use]
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Time of the last successful mutation (or creation).
    #[must_use]
    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Vertex -> set of predecessors, ignoring weights.
    ///
    /// Every vertex is present, with an empty set when nothing points at it.
    /// Computed freshly on each call in one pass over the adjacency list.
    #[must_use]
    pub fn reverse_graph(&self) -> BTreeMap<T, BTreeSet<T>> {
        let mut reversed: BTreeMap<T, BTreeSet<T>> = self
            .adjacency
            .keys()
            .map(|v| (v.clone(), BTreeSet::new()))
            .collect();

        for (source, edges) in &self.adjacency {
            for destination in edges.keys() {
                reversed
                    .entry(destination.clone())
                    .or_default()
                    .insert(source.clone());
            }
        }

        reversed
    }

    /// Vertex -> (predecessor -> weight of the original edge).
    ///
    /// Same shape guarantees as [`GraphContext::reverse_graph`].
    #[must_use]
    pub fn reverse_graph_with_weight(&self) -> AdjacencyMap<T> {
        let mut reversed: AdjacencyMap<T> = self
            .adjacency
            .keys()
            .map(|v| (v.clone(), BTreeMap::new()))
            .collect();

        for (source, edges) in &self.adjacency {
            for (destination, &weight) in edges {
                reversed
                    .entry(destination.clone())
                    .or_default()
                    .insert(source.clone(), weight);
            }
        }

        reversed
    }

    /// Render the adjacency list, one `vertex -> {neighbor: weight, ...}` line
    /// per vertex.
    #[must_use]
    pub fn dump(&self) -> String {
        let mut out = String::new();
        for (vertex, edges) in &self.adjacency {
            let rendered: Vec<String> = edges
                .iter()
                .map(|(neighbor, weight)| format!("{neighbor:?}: {weight}"))
                .collect();
            let _ = writeln!(out, "{vertex:?} -> {{{}}}", rendered.join(", "));
        }
        out
    }

    /// Copy the whole context into a serializable record.
    #[must_use]
    pub fn snapshot(&self) -> GraphSnapshot<T> {
        GraphSnapshot {
            graph_type: self.graph_type,
            adjacency_list: self.adjacency.clone(),
            vertex_metadata: self.vertex_metadata.clone(),
            properties: self.properties.clone(),
            stats: self.stats,
            version: self.version,
            updated_at: self.updated_at,
        }
    }

    /// Record a successful mutation.
    pub(crate) fn touch(&mut self) {
        self.updated_at = Utc::now();
        self.version += 1;
        tracing::debug!(version = self.version, "Graph updated");
    }
}

impl<T: Vertex> Adjacency<T> for GraphContext<T> {
    fn edges_from(&self, vertex: &T) -> Option<&BTreeMap<T, Weight>> {
        self.adjacency.get(vertex)
    }
}
