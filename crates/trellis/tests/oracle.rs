//! Property tests comparing the engine against `petgraph` on random graphs.

use petgraph::algo::{connected_components, is_cyclic_directed, is_cyclic_undirected, kosaraju_scc};
use petgraph::graph::{DiGraph, NodeIndex, UnGraph};
use petgraph::visit::Bfs;
use proptest::prelude::*;
use std::collections::BTreeSet;
use trellis::{GraphManager, GraphType, TraversalStrategy};

const MAX_VERTICES: u8 = 12;

/// Vertex count plus a list of distinct, loop-free edges.
///
/// For undirected graphs an unordered pair appears at most once.
fn arb_graph(undirected: bool) -> impl Strategy<Value = (u8, Vec<(u8, u8)>)> {
    (1..=MAX_VERTICES).prop_flat_map(move |n| {
        let edge = (0..n, 0..n);
        proptest::collection::vec(edge, 0..(usize::from(n) * 3)).prop_map(move |raw| {
            let mut seen = BTreeSet::new();
            let edges = raw
                .into_iter()
                .filter(|&(a, b)| a != b)
                .filter(|&(a, b)| {
                    let key = if undirected { (a.min(b), a.max(b)) } else { (a, b) };
                    seen.insert(key)
                })
                .collect();
            (n, edges)
        })
    })
}

fn manager(graph_type: GraphType, n: u8, edges: &[(u8, u8)]) -> GraphManager<u8> {
    let graph = GraphManager::new(graph_type);
    for v in 0..n {
        graph.add_vertex(v);
    }
    for &(a, b) in edges {
        graph.add_edge(a, b).expect("generated edges are distinct");
    }
    graph
}

fn digraph(n: u8, edges: &[(u8, u8)]) -> (DiGraph<u8, ()>, Vec<NodeIndex>) {
    let mut graph = DiGraph::new();
    let nodes: Vec<_> = (0..n).map(|v| graph.add_node(v)).collect();
    for &(a, b) in edges {
        graph.add_edge(nodes[usize::from(a)], nodes[usize::from(b)], ());
    }
    (graph, nodes)
}

fn ungraph(n: u8, edges: &[(u8, u8)]) -> UnGraph<u8, ()> {
    let mut graph = UnGraph::new_undirected();
    let nodes: Vec<_> = (0..n).map(|v| graph.add_node(v)).collect();
    for &(a, b) in edges {
        graph.add_edge(nodes[usize::from(a)], nodes[usize::from(b)], ());
    }
    graph
}

proptest! {
    #[test]
    fn directed_cycle_detection_matches_petgraph((n, edges) in arb_graph(false)) {
        let graph = manager(GraphType::Directed, n, &edges);
        let (oracle, _) = digraph(n, &edges);
        let expected = is_cyclic_directed(&oracle);

        prop_assert_eq!(graph.contains_cycle(), expected);
        prop_assert_eq!(!graph.find_cycles().is_empty(), expected);
    }

    #[test]
    fn undirected_cycle_detection_matches_petgraph((n, edges) in arb_graph(true)) {
        let graph = manager(GraphType::Undirected, n, &edges);
        let expected = is_cyclic_undirected(&ungraph(n, &edges));

        prop_assert_eq!(graph.contains_cycle(), expected);
        prop_assert_eq!(!graph.find_cycles().is_empty(), expected);
    }

    #[test]
    fn kosaraju_membership_matches_petgraph((n, edges) in arb_graph(false)) {
        let graph = manager(GraphType::Directed, n, &edges);
        let (oracle, _) = digraph(n, &edges);

        let ours: BTreeSet<BTreeSet<u8>> = graph.scc_find().unwrap().into_values().collect();
        let theirs: BTreeSet<BTreeSet<u8>> = kosaraju_scc(&oracle)
            .into_iter()
            .map(|component| component.into_iter().map(|ix| oracle[ix]).collect())
            .collect();

        prop_assert_eq!(ours, theirs);
    }

    #[test]
    fn component_count_matches_petgraph((n, edges) in arb_graph(true)) {
        let graph = manager(GraphType::Undirected, n, &edges);
        let components = graph.scc_find().unwrap();

        prop_assert_eq!(components.len(), connected_components(&ungraph(n, &edges)));
        let covered: usize = components.values().map(BTreeSet::len).sum();
        prop_assert_eq!(covered, usize::from(n));
    }

    #[test]
    fn every_traversal_reaches_what_petgraph_reaches(
        (n, edges) in arb_graph(false),
        start_seed in any::<u8>(),
    ) {
        let start = start_seed % n;
        let graph = manager(GraphType::Directed, n, &edges);
        let (oracle, nodes) = digraph(n, &edges);

        let mut bfs = Bfs::new(&oracle, nodes[usize::from(start)]);
        let mut expected = BTreeSet::new();
        while let Some(ix) = bfs.next(&oracle) {
            expected.insert(oracle[ix]);
        }

        for strategy in TraversalStrategy::ALL {
            let order = graph.traverse(&start, strategy);
            let visited: BTreeSet<u8> = order.iter().copied().collect();
            prop_assert_eq!(order.len(), visited.len());
            prop_assert_eq!(&visited, &expected);
        }
    }

    #[test]
    fn reverse_graph_inverts_every_edge((n, edges) in arb_graph(false)) {
        let graph = manager(GraphType::Directed, n, &edges);
        let reversed = graph.reverse_graph();

        prop_assert_eq!(reversed.len(), usize::from(n));
        let inverted: usize = reversed.values().map(BTreeSet::len).sum();
        prop_assert_eq!(inverted, edges.len());
        for &(a, b) in &edges {
            prop_assert!(reversed[&b].contains(&a));
        }
    }

    #[test]
    fn removing_a_vertex_drops_its_edges((n, edges) in arb_graph(false), seed in any::<u8>()) {
        let victim = seed % n;
        let graph = manager(GraphType::Directed, n, &edges);
        let touching = edges.iter().filter(|&&(a, b)| a == victim || b == victim).count();

        prop_assert!(graph.remove_vertex(&victim));
        prop_assert_eq!(graph.edge_count(), edges.len() - touching);
        prop_assert!(graph.reverse_graph().values().all(|preds| !preds.contains(&victim)));
    }
}
