//! Vertex insertion, removal and property writes.

use crate::context::GraphContext;
use crate::domain::{Vertex, VertexMetadata};
use crate::error::{Error, Result};
use serde_json::Value;
use std::collections::BTreeMap;

impl<T: Vertex> GraphContext<T> {
    /// Add `vertex` with no edges unless it already exists.
    ///
    /// Returns `true` if the vertex was created. Re-adding is a no-op and does
    /// not bump the version.
    pub fn add_vertex_if_absent(&mut self, vertex: T) -> bool {
        if self.adjacency.contains_key(&vertex) {
            return false;
        }

        self.vertex_metadata
            .insert(vertex.clone(), VertexMetadata::new());
        self.adjacency.insert(vertex, BTreeMap::new());
        self.stats.increment_vertex_count();
        self.touch();
        true
    }

    /// Remove `vertex` together with every edge touching it.
    ///
    /// Returns `false` without changing anything if the vertex is absent.
    /// The edge count drops by the number of logical edges removed: for
    /// undirected graphs each edge was stored twice and counts once.
    pub fn remove_vertex_and_edges(&mut self, vertex: &T) -> bool {
        let Some(outgoing) = self.adjacency.remove(vertex) else {
            return false;
        };

        let mut incoming = 0;
        for edges in self.adjacency.values_mut() {
            if edges.remove(vertex).is_some() {
                incoming += 1;
            }
        }

        let edges_removed = if self.graph_type.is_undirected() {
            outgoing.len()
        } else {
            outgoing.len() + incoming
        };

        self.vertex_metadata.remove(vertex);
        self.stats.decrement_vertex_count();
        self.stats.decrement_edge_count(edges_removed);
        self.touch();

        tracing::debug!(
            vertex = ?vertex,
            edges_removed,
            "Removed vertex and its edges"
        );
        true
    }

    /// Set a property on an existing vertex, returning the previous value.
    ///
    /// # Errors
    ///
    /// Returns `Error::VertexNotFound` if the vertex is absent.
    pub fn set_vertex_property(
        &mut self,
        vertex: &T,
        key: impl Into<String>,
        value: Value,
    ) -> Result<Option<Value>> {
        let metadata = self
            .vertex_metadata
            .get_mut(vertex)
            .ok_or_else(|| Error::vertex_not_found(vertex))?;

        let previous = metadata.properties.insert(key.into(), value);
        self.touch();
        Ok(previous)
    }

    /// Set a graph-level property, returning the previous value.
    pub fn set_graph_property(&mut self, key: impl Into<String>, value: Value) -> Option<Value> {
        let previous = self.properties.insert(key.into(), value);
        self.touch();
        previous
    }

    /// Record a read of `vertex` in its metadata. No-op for absent vertices.
    ///
    /// Bookkeeping only: the version is not bumped.
    pub(crate) fn record_access(&mut self, vertex: &T) {
        if let Some(metadata) = self.vertex_metadata.get_mut(vertex) {
            metadata.record_access();
        }
    }
}
