//! Simple path enumeration.

use crate::context::GraphContext;
use crate::domain::Vertex;
use std::collections::HashSet;

/// Every simple path from `source` to `destination`, in DFS discovery order.
///
/// A path never repeats a vertex. Absent endpoints yield no paths, and
/// `source == destination` yields the single one-vertex path. The number of
/// simple paths can grow exponentially with graph size.
#[must_use]
pub fn find_all_paths<T: Vertex>(
    context: &GraphContext<T>,
    source: &T,
    destination: &T,
) -> Vec<Vec<T>> {
    let mut paths = Vec::new();
    if !context.contains_vertex(source) || !context.contains_vertex(destination) {
        return paths;
    }

    let mut path = Vec::new();
    let mut on_path = HashSet::new();
    extend(context, source, destination, &mut path, &mut on_path, &mut paths);
    paths
}

fn extend<'a, T: Vertex>(
    context: &'a GraphContext<T>,
    vertex: &'a T,
    destination: &T,
    path: &mut Vec<&'a T>,
    on_path: &mut HashSet<&'a T>,
    paths: &mut Vec<Vec<T>>,
) {
    path.push(vertex);

    if vertex == destination {
        paths.push(path.iter().map(|v| (*v).clone()).collect());
    } else {
        on_path.insert(vertex);
        for neighbor in context.neighbors(vertex) {
            if !on_path.contains(neighbor) {
                extend(context, neighbor, destination, path, on_path, paths);
            }
        }
        on_path.remove(vertex);
    }

    path.pop();
}
