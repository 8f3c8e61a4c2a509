//! Strongly connected component discovery.
//!
//! Directed graphs use Kosaraju's two-pass algorithm; undirected graphs,
//! where strong and weak connectivity coincide, use plain connected
//! components. [`SccFinder`] is bound to a [`GraphType`] once, like
//! [`crate::cycle::CycleDetector`].
//!
//! Component ids are sequential from 0 in discovery order. For a given graph
//! the result is deterministic because adjacency iteration is ordered.

mod components;
mod kosaraju;

use crate::context::GraphContext;
use crate::domain::{GraphType, Vertex};
use crate::error::{Error, Result};
use crate::traversal::TraversalStrategy;
use std::collections::{BTreeMap, BTreeSet};

/// Component id -> member vertices.
pub type Components<T> = BTreeMap<usize, BTreeSet<T>>;

/// Component discovery bound to a graph type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SccFinder {
    /// Kosaraju's algorithm, directed graphs only.
    Kosaraju,
    /// Connected components, undirected graphs only.
    ConnectedComponents,
}

impl SccFinder {
    /// The finder for `graph_type`.
    #[must_use]
    pub fn for_graph_type(graph_type: GraphType) -> Self {
        match graph_type {
            GraphType::Directed => Self::Kosaraju,
            GraphType::Undirected => Self::ConnectedComponents,
        }
    }

    /// Name used in logs and errors.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Kosaraju => "kosaraju",
            Self::ConnectedComponents => "connected_components",
        }
    }

    /// Partition the graph's vertices into components.
    ///
    /// `traversal` collects each component once its root is known.
    ///
    /// # Errors
    ///
    /// Returns `Error::UnsupportedForGraphType` if this finder is not the one
    /// bound to the context's graph type.
    pub fn find<T: Vertex>(
        self,
        context: &GraphContext<T>,
        traversal: TraversalStrategy,
    ) -> Result<Components<T>> {
        let graph_type = context.graph_type();
        if Self::for_graph_type(graph_type) != self {
            return Err(Error::UnsupportedForGraphType {
                operation: self.name(),
                graph_type,
            });
        }

        let components = match self {
            Self::Kosaraju => kosaraju::find(context, traversal),
            Self::ConnectedComponents => components::find(context, traversal),
        };

        tracing::debug!(
            finder = self.name(),
            %traversal,
            component_count = components.len(),
            "Component search complete"
        );
        Ok(components)
    }
}

/// Assign the next sequential id to `members`.
fn push_component<T>(components: &mut Components<T>, members: BTreeSet<T>) {
    let id = components.len();
    components.insert(id, members);
}
