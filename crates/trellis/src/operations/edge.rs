//! Edge insertion and removal.

use crate::context::GraphContext;
use crate::domain::{Vertex, Weight};
use crate::error::{Error, Result};

impl<T: Vertex> GraphContext<T> {
    /// Add the edge `source -> destination` with `weight`.
    ///
    /// Missing endpoints are created first. For undirected graphs the mirror
    /// edge is inserted as well; the edge count grows by one either way.
    ///
    /// # Errors
    ///
    /// - `Error::SelfLoop` if `source == destination`
    /// - `Error::DuplicateEdge` if the edge already exists
    ///
    /// Both checks run before any mutation, so a failed call leaves the
    /// context untouched.
    pub fn add_weighted_edge(&mut self, source: T, destination: T, weight: Weight) -> Result<()> {
        if source == destination {
            return Err(Error::self_loop(&source));
        }
        if self.edge_weight(&source, &destination).is_some() {
            return Err(Error::duplicate_edge(&source, &destination));
        }

        self.add_vertex_if_absent(source.clone());
        self.add_vertex_if_absent(destination.clone());

        if self.graph_type.is_undirected() {
            self.adjacency
                .entry(destination.clone())
                .or_default()
                .insert(source.clone(), weight);
        }
        self.adjacency
            .entry(source)
            .or_default()
            .insert(destination, weight);

        self.stats.increment_edge_count();
        self.touch();
        Ok(())
    }

    /// Remove the edge `source -> destination` (and its mirror for undirected
    /// graphs).
    ///
    /// Returns whether an edge was removed. Nothing changes otherwise.
    pub fn remove_edge_between(&mut self, source: &T, destination: &T) -> bool {
        if !self.remove_one_way(source, destination) {
            return false;
        }
        if self.graph_type.is_undirected() {
            self.remove_one_way(destination, source);
        }

        self.stats.decrement_edge_count(1);
        self.touch();
        true
    }

    fn remove_one_way(&mut self, from: &T, to: &T) -> bool {
        self.adjacency
            .get_mut(from)
            .is_some_and(|edges| edges.remove(to).is_some())
    }
}
