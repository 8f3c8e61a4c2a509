//! Aggregate graph counters.

use serde::{Deserialize, Serialize};

/// Vertex count, edge count and density of a graph.
///
/// Counters are only changed through the increment/decrement methods, each of
/// which recomputes the density. Undirected edges count once.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct GraphStats {
    vertex_count: usize,
    edge_count: usize,
    density: f64,
}

impl GraphStats {
    /// Number of vertices.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    /// Number of logical edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// `edges / (vertices * (vertices - 1))`, or 0 with fewer than two vertices.
    #[must_use]
    pub fn density(&self) -> f64 {
        self.density
    }

    pub(crate) fn increment_vertex_count(&mut self) {
        self.vertex_count += 1;
        self.update_density();
    }

    pub(crate) fn decrement_vertex_count(&mut self) {
        self.vertex_count = self.vertex_count.saturating_sub(1);
        self.update_density();
    }

    pub(crate) fn increment_edge_count(&mut self) {
        self.edge_count += 1;
        self.update_density();
    }

    pub(crate) fn decrement_edge_count(&mut self, count: usize) {
        self.edge_count = self.edge_count.saturating_sub(count);
        self.update_density();
    }

    #[allow(clippy::cast_precision_loss)]
    fn update_density(&mut self) {
        self.density = if self.vertex_count <= 1 {
            0.0
        } else {
            let max_edges = self.vertex_count * (self.vertex_count - 1);
            self.edge_count as f64 / max_edges as f64
        };
    }
}
