//! Parent-tracking cycle detection for undirected graphs.

use super::Cycle;
use crate::context::GraphContext;
use crate::domain::Vertex;
use std::collections::HashSet;

pub(super) fn contains_cycle<T: Vertex>(context: &GraphContext<T>) -> bool {
    let mut visited = HashSet::new();

    context
        .vertices()
        .any(|v| !visited.contains(v) && revisits(context, v, None, &mut visited))
}

/// Whether a DFS from `vertex` reaches an already-visited vertex through any
/// edge other than the one it arrived by.
fn revisits<'a, T: Vertex>(
    context: &'a GraphContext<T>,
    vertex: &'a T,
    parent: Option<&'a T>,
    visited: &mut HashSet<&'a T>,
) -> bool {
    visited.insert(vertex);

    for neighbor in context.neighbors(vertex) {
        if Some(neighbor) == parent {
            continue;
        }
        if visited.contains(neighbor) || revisits(context, neighbor, Some(vertex), visited) {
            return true;
        }
    }

    false
}

pub(super) fn find_cycles<T: Vertex>(context: &GraphContext<T>) -> Vec<Cycle<T>> {
    let mut visited = HashSet::new();
    let mut path = Vec::new();
    let mut cycles = Vec::new();

    for vertex in context.vertices() {
        if !visited.contains(vertex) {
            collect(context, vertex, None, &mut visited, &mut path, &mut cycles);
        }
    }

    cycles
}

fn collect<'a, T: Vertex>(
    context: &'a GraphContext<T>,
    vertex: &'a T,
    parent: Option<&'a T>,
    visited: &mut HashSet<&'a T>,
    path: &mut Vec<&'a T>,
    cycles: &mut Vec<Cycle<T>>,
) {
    visited.insert(vertex);
    path.push(vertex);

    for neighbor in context.neighbors(vertex) {
        if Some(neighbor) == parent {
            continue;
        }
        if let Some(start) = path.iter().position(|v| *v == neighbor) {
            let cycle: Cycle<T> = path[start..].iter().map(|v| (*v).clone()).collect();
            if !is_known(cycles, &cycle) {
                cycles.push(cycle);
            }
        } else if !visited.contains(neighbor) {
            collect(context, neighbor, Some(vertex), visited, path, cycles);
        }
    }

    path.pop();
}

/// Same size and same members as an already collected cycle.
fn is_known<T: Vertex>(cycles: &[Cycle<T>], cycle: &[T]) -> bool {
    cycles
        .iter()
        .any(|known| known.len() == cycle.len() && cycle.iter().all(|v| known.contains(v)))
}
