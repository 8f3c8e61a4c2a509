//! Thread-safe graph façade.
//!
//! [`GraphManager`] owns one [`GraphContext`] behind a reader/writer lock and
//! is the only public way to mutate it. Each method is one atomic unit:
//!
//! - Mutations take the write lock for their whole duration, including the
//!   auto-creation of edge endpoints, so validation and mutation cannot be
//!   interleaved with another writer.
//! - Queries take the read lock. No algorithm mutates the context, and a
//!   writer holds the exclusive lock for its whole operation, so a query
//!   never observes a half-applied mutation.
//!
//! Locked methods never call other locked methods; they work on the guarded
//! context directly, so there is no re-entrancy and no self-deadlock. The
//! guard is released on every exit path, panics included.
//!
//! # Example
//!
//! ```
//! use trellis::{GraphManager, GraphType};
//!
//! let graph = GraphManager::new(GraphType::Directed);
//! graph.add_edge("A", "B").unwrap();
//! graph.add_edge("B", "A").unwrap();
//!
//! assert!(graph.contains_cycle());
//! assert_eq!(graph.scc_find().unwrap().len(), 1);
//! ```

use crate::config::EngineConfig;
use crate::context::{GraphContext, GraphSnapshot};
use crate::cycle::{Cycle, CycleDetector};
use crate::domain::{
    AdjacencyMap, DEFAULT_WEIGHT, GraphStats, GraphType, Vertex, VertexMetadata, Weight,
};
use crate::error::Result;
use crate::paths;
use crate::scc::{Components, SccFinder};
use crate::traversal::TraversalStrategy;
use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use serde_json::Value;
use std::collections::{BTreeMap, BTreeSet};

/// Concurrent in-memory graph.
///
/// Share across threads with `Arc<GraphManager<T>>`.
#[derive(Debug)]
pub struct GraphManager<T> {
    context: RwLock<GraphContext<T>>,
    cycle_detector: CycleDetector,
    scc_finder: SccFinder,
    config: EngineConfig,
}

impl<T: Vertex> GraphManager<T> {
    /// Create an empty graph of `graph_type` with default settings.
    #[must_use]
    pub fn new(graph_type: GraphType) -> Self {
        Self::with_config(EngineConfig {
            graph_type,
            ..EngineConfig::default()
        })
    }

    /// Create an empty graph from `config`.
    ///
    /// Cycle and component strategies are bound here from the graph type and
    /// never change afterwards.
    #[must_use]
    pub fn with_config(config: EngineConfig) -> Self {
        let graph_type = config.graph_type;
        tracing::debug!(%graph_type, ?config, "Creating graph manager");

        Self {
            context: RwLock::new(GraphContext::new(graph_type)),
            cycle_detector: CycleDetector::for_graph_type(graph_type),
            scc_finder: SccFinder::for_graph_type(graph_type),
            config,
        }
    }

    fn read(&self) -> RwLockReadGuard<'_, GraphContext<T>> {
        tracing::trace!("Acquiring read lock");
        self.context.read()
    }

    fn write(&self) -> RwLockWriteGuard<'_, GraphContext<T>> {
        tracing::trace!("Acquiring write lock");
        self.context.write()
    }

    /// Settings the manager was created with.
    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// The fixed graph type.
    #[must_use]
    pub fn graph_type(&self) -> GraphType {
        self.config.graph_type
    }

    // ===== Mutations =====

    /// Add `vertex` if absent. Returns whether it was created.
    pub fn add_vertex(&self, vertex: T) -> bool {
        self.write().add_vertex_if_absent(vertex)
    }

    /// Remove `vertex` and every edge touching it. Returns whether it existed.
    pub fn remove_vertex(&self, vertex: &T) -> bool {
        self.write().remove_vertex_and_edges(vertex)
    }

    /// Add an edge with weight 1.0.
    ///
    /// # Errors
    ///
    /// See [`GraphManager::add_weighted_edge`].
    pub fn add_edge(&self, source: T, destination: T) -> Result<()> {
        self.add_weighted_edge(source, destination, DEFAULT_WEIGHT)
    }

    /// Add the edge `source -> destination`, creating missing endpoints.
    ///
    /// # Errors
    ///
    /// - `Error::SelfLoop` if `source == destination`
    /// - `Error::DuplicateEdge` if the edge already exists
    pub fn add_weighted_edge(&self, source: T, destination: T, weight: Weight) -> Result<()> {
        let mut context = self.write();
        context
            .add_weighted_edge(source, destination, weight)
            .inspect_err(|e| tracing::debug!(error = %e, "Edge rejected"))
    }

    /// Remove the edge `source -> destination`. Returns whether it existed.
    pub fn remove_edge(&self, source: &T, destination: &T) -> bool {
        self.write().remove_edge_between(source, destination)
    }

    /// Set a property on an existing vertex, returning the previous value.
    ///
    /// # Errors
    ///
    /// Returns `Error::VertexNotFound` if the vertex is absent.
    pub fn set_vertex_property(
        &self,
        vertex: &T,
        key: impl Into<String>,
        value: Value,
    ) -> Result<Option<Value>> {
        self.write().set_vertex_property(vertex, key, value)
    }

    /// Set a graph-level property, returning the previous value.
    pub fn set_graph_property(&self, key: impl Into<String>, value: Value) -> Option<Value> {
        self.write().set_graph_property(key, value)
    }

    // ===== Point queries =====

    /// Aggregate counters.
    #[must_use]
    pub fn stats(&self) -> GraphStats {
        self.read().stats()
    }

    /// Number of vertices.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.read().stats().vertex_count()
    }

    /// Number of logical edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.read().stats().edge_count()
    }

    /// Revision counter, bumped by every successful mutation.
    #[must_use]
    pub fn version(&self) -> u64 {
        self.read().version()
    }

    /// Whether `vertex` exists.
    #[must_use]
    pub fn contains_vertex(&self, vertex: &T) -> bool {
        self.read().contains_vertex(vertex)
    }

    /// Weight of the edge `source -> destination`, if present.
    #[must_use]
    pub fn edge_weight(&self, source: &T, destination: &T) -> Option<Weight> {
        self.read().edge_weight(source, destination)
    }

    /// Outgoing neighbors of `vertex` with weights; empty when absent.
    ///
    /// With `track_vertex_access` enabled this records an access on the
    /// vertex and therefore takes the write lock.
    #[must_use]
    pub fn neighbors(&self, vertex: &T) -> BTreeMap<T, Weight> {
        if self.config.track_vertex_access {
            let mut context = self.write();
            context.record_access(vertex);
            context.neighbors_with_weight(vertex).cloned().unwrap_or_default()
        } else {
            self.read()
                .neighbors_with_weight(vertex)
                .cloned()
                .unwrap_or_default()
        }
    }

    /// Copy of the metadata record of `vertex`.
    #[must_use]
    pub fn vertex_metadata(&self, vertex: &T) -> Option<VertexMetadata> {
        self.read().vertex_metadata(vertex).cloned()
    }

    // ===== Whole-graph queries =====

    /// Whether the graph contains a cycle.
    #[must_use]
    pub fn contains_cycle(&self) -> bool {
        let context = self.read();
        let found = self.cycle_detector.contains_cycle(&context);
        tracing::debug!(found, "Cycle check complete");
        found
    }

    /// Cycles found by one DFS over the whole graph.
    #[must_use]
    pub fn find_cycles(&self) -> Vec<Cycle<T>> {
        let context = self.read();
        let cycles = self.cycle_detector.find_cycles(&context);
        tracing::info!(cycle_count = cycles.len(), "Cycle detection complete");
        cycles
    }

    /// Strongly connected components (connected components for undirected
    /// graphs), using the finder bound at construction.
    ///
    /// # Errors
    ///
    /// Never fails for a manager built through its constructors; the result
    /// type is shared with [`GraphManager::kosaraju`] and
    /// [`GraphManager::connected_components`].
    pub fn scc_find(&self) -> Result<Components<T>> {
        self.components_with(self.scc_finder)
    }

    /// Kosaraju's algorithm.
    ///
    /// # Errors
    ///
    /// Returns `Error::UnsupportedForGraphType` on an undirected graph.
    pub fn kosaraju(&self) -> Result<Components<T>> {
        self.components_with(SccFinder::Kosaraju)
    }

    /// Connected components.
    ///
    /// # Errors
    ///
    /// Returns `Error::UnsupportedForGraphType` on a directed graph.
    pub fn connected_components(&self) -> Result<Components<T>> {
        self.components_with(SccFinder::ConnectedComponents)
    }

    fn components_with(&self, finder: SccFinder) -> Result<Components<T>> {
        let context = self.read();
        let components = finder
            .find(&context, self.config.component_traversal)
            .inspect_err(|e| tracing::warn!(error = %e, "Component search rejected"))?;
        tracing::info!(
            finder = finder.name(),
            component_count = components.len(),
            "Component search complete"
        );
        Ok(components)
    }

    /// Vertex -> predecessors.
    #[must_use]
    pub fn reverse_graph(&self) -> BTreeMap<T, BTreeSet<T>> {
        self.read().reverse_graph()
    }

    /// Vertex -> (predecessor -> weight).
    #[must_use]
    pub fn reverse_graph_with_cost(&self) -> AdjacencyMap<T> {
        self.read().reverse_graph_with_weight()
    }

    /// Visit order of `strategy` from `start`; empty when `start` is absent.
    #[must_use]
    pub fn traverse(&self, start: &T, strategy: TraversalStrategy) -> Vec<T> {
        let context = self.read();
        if !context.contains_vertex(start) {
            return Vec::new();
        }
        strategy.collect(&*context, start)
    }

    /// Every simple path from `source` to `destination`.
    #[must_use]
    pub fn find_all_paths(&self, source: &T, destination: &T) -> Vec<Vec<T>> {
        paths::find_all_paths(&self.read(), source, destination)
    }

    /// Log the adjacency list at info level and return it.
    pub fn dump(&self) -> String {
        let rendered = self.read().dump();
        for line in rendered.lines() {
            tracing::info!("{line}");
        }
        rendered
    }

    /// Serializable copy of the whole graph.
    #[must_use]
    pub fn snapshot(&self) -> GraphSnapshot<T> {
        self.read().snapshot()
    }
}

impl<T: Vertex> Default for GraphManager<T> {
    fn default() -> Self {
        Self::new(GraphType::Directed)
    }
}
