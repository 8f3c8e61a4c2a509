//! Integration tests for concurrent access to a shared `GraphManager`.

use std::collections::BTreeSet;
use std::sync::Arc;
use std::thread;
use trellis::{EngineConfig, GraphManager, GraphType, TraversalStrategy};

const WRITERS: u32 = 8;
const EDGES_PER_WRITER: u32 = 50;

#[test]
fn concurrent_writers_keep_counts_consistent() {
    let graph = Arc::new(GraphManager::new(GraphType::Directed));

    let handles: Vec<_> = (0..WRITERS)
        .map(|writer| {
            let graph = Arc::clone(&graph);
            thread::spawn(move || {
                for i in 0..EDGES_PER_WRITER {
                    // Each writer owns a disjoint chain so every insert succeeds
                    let from = writer * 1_000 + i;
                    graph.add_edge(from, from + 1).expect("edge should be new");
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().expect("writer should not panic");
    }

    let expected_edges = (WRITERS * EDGES_PER_WRITER) as usize;
    assert_eq!(graph.edge_count(), expected_edges);
    assert_eq!(graph.vertex_count(), (WRITERS * (EDGES_PER_WRITER + 1)) as usize);
    // Every created vertex and every edge bumps the version once
    let mutations = graph.vertex_count() + graph.edge_count();
    assert_eq!(graph.version(), 1 + mutations as u64);
}

#[test]
fn racing_duplicate_inserts_admit_exactly_one() {
    let graph = Arc::new(GraphManager::new(GraphType::Undirected));

    let handles: Vec<_> = (0..WRITERS)
        .map(|writer| {
            let graph = Arc::clone(&graph);
            thread::spawn(move || {
                // Half the threads insert the reverse orientation
                if writer % 2 == 0 {
                    graph.add_edge("A", "B").is_ok()
                } else {
                    graph.add_edge("B", "A").is_ok()
                }
            })
        })
        .collect();

    let accepted = handles
        .into_iter()
        .map(|handle| handle.join().expect("writer should not panic"))
        .filter(|&ok| ok)
        .count();

    assert_eq!(accepted, 1);
    assert_eq!(graph.edge_count(), 1);
    assert_eq!(graph.edge_weight(&"A", &"B"), graph.edge_weight(&"B", &"A"));
}

#[test]
fn readers_never_observe_half_applied_edges() {
    let graph = Arc::new(GraphManager::new(GraphType::Undirected));

    let writer = {
        let graph = Arc::clone(&graph);
        thread::spawn(move || {
            for i in 0..200_u32 {
                graph.add_edge(i, i + 1).expect("edge should be new");
                if i % 3 == 0 {
                    graph.remove_edge(&i, &(i + 1));
                }
            }
        })
    };

    let readers: Vec<_> = (0..4)
        .map(|_| {
            let graph = Arc::clone(&graph);
            thread::spawn(move || {
                for _ in 0..100 {
                    let snapshot = graph.snapshot();
                    let mut stored = 0;
                    for (vertex, edges) in &snapshot.adjacency_list {
                        for (neighbor, weight) in edges {
                            let mirrored = snapshot.adjacency_list[neighbor].get(vertex);
                            assert_eq!(mirrored, Some(weight));
                            stored += 1;
                        }
                    }
                    assert_eq!(stored, snapshot.stats.edge_count() * 2);
                }
            })
        })
        .collect();

    writer.join().expect("writer should not panic");
    for reader in readers {
        reader.join().expect("reader should not panic");
    }

    assert_eq!(graph.edge_count(), 200 - 67);
}

#[test]
fn queries_run_while_graph_changes() {
    let graph = Arc::new(GraphManager::with_config(EngineConfig {
        track_vertex_access: true,
        ..EngineConfig::default()
    }));
    let root = "root".to_string();
    graph.add_edge(root.clone(), "0".to_string()).unwrap();

    let writer = {
        let graph = Arc::clone(&graph);
        thread::spawn(move || {
            for i in 1..100_u32 {
                graph
                    .add_edge((i - 1).to_string(), i.to_string())
                    .expect("edge should be new");
            }
        })
    };

    let reader = {
        let graph = Arc::clone(&graph);
        let root = root.clone();
        thread::spawn(move || {
            for _ in 0..50 {
                let reached: BTreeSet<String> = graph
                    .traverse(&root, TraversalStrategy::DfsIterative)
                    .into_iter()
                    .collect();
                assert!(reached.contains("root"));
                assert!(!graph.contains_cycle());
                let _ = graph.neighbors(&root);
            }
        })
    };

    writer.join().expect("writer should not panic");
    reader.join().expect("reader should not panic");

    assert_eq!(graph.traverse(&root, TraversalStrategy::BfsIterative).len(), 101);
    assert_eq!(graph.vertex_metadata(&root).unwrap().access_count, 50);
}
