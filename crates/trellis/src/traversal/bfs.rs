//! Breadth-first walkers.

use super::{Adjacency, neighbors};
use crate::domain::Vertex;
use std::collections::{HashSet, VecDeque};

pub(super) fn iterative<T, G, F>(graph: &G, start: &T, visit: &mut F, visited: &mut HashSet<T>)
where
    T: Vertex,
    G: Adjacency<T> + ?Sized,
    F: FnMut(&T),
{
    if !visited.insert(start.clone()) {
        return;
    }

    let mut queue = VecDeque::from([start.clone()]);
    while let Some(vertex) = queue.pop_front() {
        visit(&vertex);
        for neighbor in neighbors(graph, &vertex) {
            if visited.insert(neighbor.clone()) {
                queue.push_back(neighbor.clone());
            }
        }
    }
}

pub(super) fn recursive<T, G, F>(graph: &G, start: &T, visit: &mut F, visited: &mut HashSet<T>)
where
    T: Vertex,
    G: Adjacency<T> + ?Sized,
    F: FnMut(&T),
{
    if visited.insert(start.clone()) {
        level(graph, vec![start.clone()], visit, visited);
    }
}

/// Visit one frontier, then recurse on the vertices it discovered.
fn level<T, G, F>(graph: &G, frontier: Vec<T>, visit: &mut F, visited: &mut HashSet<T>)
where
    T: Vertex,
    G: Adjacency<T> + ?Sized,
    F: FnMut(&T),
{
    if frontier.is_empty() {
        return;
    }

    let mut next = Vec::new();
    for vertex in &frontier {
        visit(vertex);
        for neighbor in neighbors(graph, vertex) {
            if visited.insert(neighbor.clone()) {
                next.push(neighbor.clone());
            }
        }
    }

    level(graph, next, visit, visited);
}
