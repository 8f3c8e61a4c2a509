//! Kosaraju's algorithm.
//!
//! 1. Post-order DFS over every vertex yields the finishing order.
//! 2. The graph is reversed.
//! 3. Vertices are taken in reverse finishing order; each one not yet
//!    assigned roots a traversal of the reversed graph that collects every
//!    reachable unassigned vertex as one component.

use super::{Components, push_component};
use crate::context::GraphContext;
use crate::domain::Vertex;
use crate::traversal::TraversalStrategy;
use std::collections::{BTreeSet, HashSet};

pub(super) fn find<T: Vertex>(context: &GraphContext<T>, traversal: TraversalStrategy) -> Components<T> {
    let mut visited = HashSet::new();
    let mut finish_order = Vec::with_capacity(context.stats().vertex_count());

    for vertex in context.vertices() {
        if !visited.contains(vertex) {
            TraversalStrategy::DfsPostOrder.traverse(
                context,
                vertex,
                |v| finish_order.push(v.clone()),
                Some(&mut visited),
            );
        }
    }

    let reversed = context.reverse_graph_with_weight();
    let mut assigned = HashSet::new();
    let mut components = Components::new();

    while let Some(root) = finish_order.pop() {
        if assigned.contains(&root) {
            continue;
        }
        let mut members = BTreeSet::new();
        traversal.traverse(
            &reversed,
            &root,
            |v| {
                members.insert(v.clone());
            },
            Some(&mut assigned),
        );
        push_component(&mut components, members);
    }

    components
}
