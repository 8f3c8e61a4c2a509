//! Depth-first walkers.

use super::{Adjacency, neighbors};
use crate::domain::Vertex;
use std::collections::HashSet;

/// Pre-order DFS with an explicit stack.
///
/// Neighbors are pushed in reverse so they are popped in adjacency order,
/// matching [`recursive`]. A vertex is marked when popped, not when pushed.
pub(super) fn iterative<T, G, F>(graph: &G, start: &T, visit: &mut F, visited: &mut HashSet<T>)
where
    T: Vertex,
    G: Adjacency<T> + ?Sized,
    F: FnMut(&T),
{
    let mut stack = vec![start.clone()];
    while let Some(vertex) = stack.pop() {
        if !visited.insert(vertex.clone()) {
            continue;
        }
        visit(&vertex);
        stack.extend(
            neighbors(graph, &vertex)
                .rev()
                .filter(|n| !visited.contains(*n))
                .cloned(),
        );
    }
}

pub(super) fn recursive<T, G, F>(graph: &G, vertex: &T, visit: &mut F, visited: &mut HashSet<T>)
where
    T: Vertex,
    G: Adjacency<T> + ?Sized,
    F: FnMut(&T),
{
    if !visited.insert(vertex.clone()) {
        return;
    }
    visit(vertex);
    for neighbor in neighbors(graph, vertex) {
        if !visited.contains(neighbor) {
            recursive(graph, neighbor, visit, visited);
        }
    }
}

/// DFS calling back only once every descendant has been visited.
pub(super) fn post_order<T, G, F>(graph: &G, vertex: &T, visit: &mut F, visited: &mut HashSet<T>)
where
    T: Vertex,
    G: Adjacency<T> + ?Sized,
    F: FnMut(&T),
{
    if !visited.insert(vertex.clone()) {
        return;
    }
    for neighbor in neighbors(graph, vertex) {
        if !visited.contains(neighbor) {
            post_order(graph, neighbor, visit, visited);
        }
    }
    visit(vertex);
}
