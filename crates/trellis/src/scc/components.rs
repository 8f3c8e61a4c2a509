//! Connected components of an undirected graph.

use super::{Components, push_component};
use crate::context::GraphContext;
use crate::domain::Vertex;
use crate::traversal::TraversalStrategy;
use std::collections::{BTreeSet, HashSet};

pub(super) fn find<T: Vertex>(context: &GraphContext<T>, traversal: TraversalStrategy) -> Components<T> {
    let mut visited = HashSet::new();
    let mut components = Components::new();

    for vertex in context.vertices() {
        if visited.contains(vertex) {
            continue;
        }
        let mut members = BTreeSet::new();
        traversal.traverse(
            context,
            vertex,
            |v| {
                members.insert(v.clone());
            },
            Some(&mut visited),
        );
        push_component(&mut components, members);
    }

    components
}
