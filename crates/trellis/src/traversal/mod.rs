//! Pluggable graph walkers.
//!
//! Every [`TraversalStrategy`] honors the same contract: starting from one
//! vertex, invoke a callback once for every vertex reachable through
//! outgoing edges, skipping anything already present in the (optionally
//! caller-supplied) visited set. Sharing one visited set across calls lets
//! callers compose traversals, which is how Kosaraju's finishing order and
//! component collection are built.
//!
//! Walkers read neighbors through the [`Adjacency`] trait, so they run both
//! on a [`crate::GraphContext`] and on a plain [`AdjacencyMap`] such as the
//! reversed graph.

mod bfs;
mod dfs;

use crate::domain::{AdjacencyMap, Vertex, Weight};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use std::fmt;

/// Read access to outgoing edges.
pub trait Adjacency<T> {
    /// Outgoing edges of `vertex`, or `None` when it has no adjacency entry.
    fn edges_from(&self, vertex: &T) -> Option<&BTreeMap<T, Weight>>;
}

impl<T: Ord> Adjacency<T> for AdjacencyMap<T> {
    fn edges_from(&self, vertex: &T) -> Option<&BTreeMap<T, Weight>> {
        self.get(vertex)
    }
}

/// Visiting order of a traversal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TraversalStrategy {
    /// Queue-based breadth-first search.
    BfsIterative,
    /// Breadth-first search recursing once per frontier level.
    BfsRecursive,
    /// Explicit-stack depth-first search, pre-order. Same order as
    /// [`TraversalStrategy::DfsRecursive`] without growing the call stack.
    #[default]
    DfsIterative,
    /// Recursive depth-first search, pre-order.
    DfsRecursive,
    /// Recursive depth-first search calling back after all descendants.
    DfsPostOrder,
}

impl TraversalStrategy {
    /// Every strategy, in declaration order.
    pub const ALL: [Self; 5] = [
        Self::BfsIterative,
        Self::BfsRecursive,
        Self::DfsIterative,
        Self::DfsRecursive,
        Self::DfsPostOrder,
    ];

    /// Walk from `start`, calling `visit` once per newly reached vertex.
    ///
    /// When `visited` is `None` a fresh set is used. A `start` already in the
    /// set produces no visits. `start` is visited even when it has no
    /// adjacency entry in `graph`.
    ///
    /// The recursive variants use call-stack depth proportional to the
    /// longest path explored (or the number of BFS levels).
    pub fn traverse<T, G, F>(
        self,
        graph: &G,
        start: &T,
        mut visit: F,
        visited: Option<&mut HashSet<T>>,
    ) where
        T: Vertex,
        G: Adjacency<T> + ?Sized,
        F: FnMut(&T),
    {
        let mut fresh = HashSet::new();
        let visited = visited.unwrap_or(&mut fresh);

        match self {
            Self::BfsIterative => bfs::iterative(graph, start, &mut visit, visited),
            Self::BfsRecursive => bfs::recursive(graph, start, &mut visit, visited),
            Self::DfsIterative => dfs::iterative(graph, start, &mut visit, visited),
            Self::DfsRecursive => dfs::recursive(graph, start, &mut visit, visited),
            Self::DfsPostOrder => dfs::post_order(graph, start, &mut visit, visited),
        }
    }

    /// Convenience wrapper returning the visit order with a fresh visited set.
    #[must_use]
    pub fn collect<T, G>(self, graph: &G, start: &T) -> Vec<T>
    where
        T: Vertex,
        G: Adjacency<T> + ?Sized,
    {
        let mut order = Vec::new();
        self.traverse(graph, start, |v| order.push(v.clone()), None);
        order
    }
}

impl fmt::Display for TraversalStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::BfsIterative => "bfs-iterative",
            Self::BfsRecursive => "bfs-recursive",
            Self::DfsIterative => "dfs-iterative",
            Self::DfsRecursive => "dfs-recursive",
            Self::DfsPostOrder => "dfs-post-order",
        };
        f.write_str(name)
    }
}

/// Outgoing neighbors in adjacency order.
fn neighbors<'a, T, G>(graph: &'a G, vertex: &T) -> impl DoubleEndedIterator<Item = &'a T> + use<'a, T, G>
where
    T: Vertex + 'a,
    G: Adjacency<T> + ?Sized,
{
    graph.edges_from(vertex).into_iter().flat_map(BTreeMap::keys)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::GraphContext;
    use crate::domain::GraphType;
    use rstest::rstest;
    use std::collections::BTreeSet;

    //     A
    //    / \
    //   B   C
    //   |   |
    //   D   E
    //    \ /
    //     F
    fn tree_with_join() -> GraphContext<&'static str> {
        let mut ctx = GraphContext::new(GraphType::Directed);
        for (from, to) in [
            ("A", "B"),
            ("A", "C"),
            ("B", "D"),
            ("C", "E"),
            ("D", "F"),
            ("E", "F"),
        ] {
            ctx.add_weighted_edge(from, to, 1.0).unwrap();
        }
        ctx
    }

    #[rstest]
    #[case::bfs_iterative(TraversalStrategy::BfsIterative, &["A", "B", "C", "D", "E", "F"])]
    #[case::bfs_recursive(TraversalStrategy::BfsRecursive, &["A", "B", "C", "D", "E", "F"])]
    #[case::dfs_iterative(TraversalStrategy::DfsIterative, &["A", "B", "D", "F", "C", "E"])]
    #[case::dfs_recursive(TraversalStrategy::DfsRecursive, &["A", "B", "D", "F", "C", "E"])]
    #[case::dfs_post_order(TraversalStrategy::DfsPostOrder, &["F", "D", "B", "E", "C", "A"])]
    fn visit_order(#[case] strategy: TraversalStrategy, #[case] expected: &[&str]) {
        let ctx = tree_with_join();
        assert_eq!(strategy.collect(&ctx, &"A"), expected);
    }

    #[test]
    fn all_strategies_reach_the_same_set() {
        let ctx = tree_with_join();
        let sets: Vec<BTreeSet<&str>> = TraversalStrategy::ALL
            .iter()
            .map(|s| s.collect(&ctx, &"B").into_iter().collect())
            .collect();

        for set in &sets {
            assert_eq!(set, &BTreeSet::from(["B", "D", "F"]));
        }
    }

    #[rstest]
    #[case::bfs_iterative(TraversalStrategy::BfsIterative)]
    #[case::bfs_recursive(TraversalStrategy::BfsRecursive)]
    #[case::dfs_iterative(TraversalStrategy::DfsIterative)]
    #[case::dfs_recursive(TraversalStrategy::DfsRecursive)]
    #[case::dfs_post_order(TraversalStrategy::DfsPostOrder)]
    fn shared_visited_set_is_honored(#[case] strategy: TraversalStrategy) {
        let ctx = tree_with_join();
        let mut visited = HashSet::from(["C"]);
        let mut order = Vec::new();

        strategy.traverse(&ctx, &"A", |v| order.push(*v), Some(&mut visited));

        assert!(!order.contains(&"C"));
        assert!(!order.contains(&"E"));
        assert_eq!(order.len(), 4);
        assert_eq!(visited.len(), 5);

        // Second call with the same set: start already seen, nothing visited
        let mut again = Vec::new();
        strategy.traverse(&ctx, &"B", |v| again.push(*v), Some(&mut visited));
        assert!(again.is_empty());
    }

    #[rstest]
    #[case::bfs_iterative(TraversalStrategy::BfsIterative)]
    #[case::dfs_iterative(TraversalStrategy::DfsIterative)]
    #[case::dfs_post_order(TraversalStrategy::DfsPostOrder)]
    fn cycles_visit_each_vertex_once(#[case] strategy: TraversalStrategy) {
        let mut ctx = GraphContext::new(GraphType::Undirected);
        ctx.add_weighted_edge(1, 2, 1.0).unwrap();
        ctx.add_weighted_edge(2, 3, 1.0).unwrap();
        ctx.add_weighted_edge(3, 1, 1.0).unwrap();

        let order = strategy.collect(&ctx, &2);
        assert_eq!(order.len(), 3);
        assert_eq!(order.iter().collect::<BTreeSet<_>>().len(), 3);
    }

    #[test]
    fn runs_on_plain_adjacency_map() {
        let reversed = tree_with_join().reverse_graph_with_weight();
        let order = TraversalStrategy::BfsIterative.collect(&reversed, &"F");
        assert_eq!(order, ["F", "D", "E", "B", "C", "A"]);
    }

    #[test]
    fn unknown_start_is_visited_alone() {
        let ctx = tree_with_join();
        assert_eq!(TraversalStrategy::DfsRecursive.collect(&ctx, &"Z"), ["Z"]);
    }

    #[test]
    fn strategy_names_are_kebab_case() {
        assert_eq!(TraversalStrategy::DfsPostOrder.to_string(), "dfs-post-order");
        let parsed: TraversalStrategy = serde_json::from_str(r#""bfs-recursive""#).unwrap();
        assert_eq!(parsed, TraversalStrategy::BfsRecursive);
    }
}
