//! Cycle detection strategies.
//!
//! Directed and undirected graphs need different notions of a cycle: in a
//! directed graph a cycle is a back edge to a vertex still on the DFS path,
//! while in an undirected graph every edge is trivially "back" to its parent
//! and only a second route to an already-visited vertex counts.
//!
//! [`CycleDetector`] is chosen once from the context's [`GraphType`] and kept
//! for the manager's lifetime, so a graph can never be analyzed with the
//! wrong strategy.

mod directed;
mod undirected;

use crate::context::GraphContext;
use crate::domain::{GraphType, Vertex};

/// A cycle as the sequence of vertices along it, without repeating the first.
pub type Cycle<T> = Vec<T>;

/// Cycle detection bound to a graph type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CycleDetector {
    /// Back-edge detection with an on-path set.
    Directed,
    /// Parent-tracking detection.
    Undirected,
}

impl CycleDetector {
    /// The detector for `graph_type`.
    #[must_use]
    pub fn for_graph_type(graph_type: GraphType) -> Self {
        match graph_type {
            GraphType::Directed => Self::Directed,
            GraphType::Undirected => Self::Undirected,
        }
    }

    /// Whether the graph contains at least one cycle.
    #[must_use]
    pub fn contains_cycle<T: Vertex>(self, context: &GraphContext<T>) -> bool {
        match self {
            Self::Directed => directed::contains_cycle(context),
            Self::Undirected => undirected::contains_cycle(context),
        }
    }

    /// Enumerate the cycles discovered by one DFS over every component.
    ///
    /// This is not an enumeration of all elementary cycles: each back edge
    /// found during the search contributes the path suffix it closes.
    #[must_use]
    pub fn find_cycles<T: Vertex>(self, context: &GraphContext<T>) -> Vec<Cycle<T>> {
        let cycles = match self {
            Self::Directed => directed::find_cycles(context),
            Self::Undirected => undirected::find_cycles(context),
        };

        tracing::debug!(
            detector = ?self,
            vertex_count = context.stats().vertex_count(),
            cycle_count = cycles.len(),
            "Cycle search complete"
        );
        cycles
    }
}
