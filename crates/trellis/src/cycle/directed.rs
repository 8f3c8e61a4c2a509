//! Back-edge cycle detection for directed graphs.

use super::Cycle;
use crate::context::GraphContext;
use crate::domain::Vertex;
use std::collections::HashSet;

pub(super) fn contains_cycle<T: Vertex>(context: &GraphContext<T>) -> bool {
    let mut visited = HashSet::new();
    let mut on_path = HashSet::new();

    context
        .vertices()
        .any(|v| !visited.contains(v) && has_back_edge(context, v, &mut visited, &mut on_path))
}

fn has_back_edge<'a, T: Vertex>(
    context: &'a GraphContext<T>,
    vertex: &'a T,
    visited: &mut HashSet<&'a T>,
    on_path: &mut HashSet<&'a T>,
) -> bool {
    visited.insert(vertex);
    on_path.insert(vertex);

    for neighbor in context.neighbors(vertex) {
        if on_path.contains(neighbor) {
            return true;
        }
        if !visited.contains(neighbor) && has_back_edge(context, neighbor, visited, on_path) {
            return true;
        }
    }

    on_path.remove(vertex);
    false
}

pub(super) fn find_cycles<T: Vertex>(context: &GraphContext<T>) -> Vec<Cycle<T>> {
    let mut search = Search {
        context,
        visited: HashSet::new(),
        on_path: HashSet::new(),
        path: Vec::new(),
        cycles: Vec::new(),
    };

    for vertex in context.vertices() {
        if !search.visited.contains(vertex) {
            search.visit(vertex);
        }
    }

    search.cycles
}

/// DFS state for cycle enumeration.
///
/// `on_path` mirrors `path` for O(1) membership checks.
struct Search<'a, T> {
    context: &'a GraphContext<T>,
    visited: HashSet<&'a T>,
    on_path: HashSet<&'a T>,
    path: Vec<&'a T>,
    cycles: Vec<Cycle<T>>,
}

impl<'a, T: Vertex> Search<'a, T> {
    fn visit(&mut self, vertex: &'a T) {
        self.visited.insert(vertex);
        self.on_path.insert(vertex);
        self.path.push(vertex);

        let context = self.context;
        for neighbor in context.neighbors(vertex) {
            if self.on_path.contains(neighbor) {
                // Back edge: the cycle is the path suffix starting at `neighbor`
                if let Some(start) = self.path.iter().position(|v| *v == neighbor) {
                    let cycle = self.path[start..].iter().map(|v| (*v).clone()).collect();
                    self.cycles.push(cycle);
                }
            } else if !self.visited.contains(neighbor) {
                self.visit(neighbor);
            }
        }

        self.path.pop();
        self.on_path.remove(vertex);
    }
}
