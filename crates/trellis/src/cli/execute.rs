//! Command execution logic.
//!
//! Each command runs one query on a loaded [`GraphManager`] and renders the
//! result either as plain text or as pretty-printed JSON.

use anyhow::Result;
use serde::Serialize;
use std::io::Write;
use std::path::Path;

use super::OutputMode;
use super::args::{PathsArgs, TraverseArgs};
use super::graph_file::GraphFile;
use crate::config::EngineConfig;
use crate::error::Error;
use crate::manager::GraphManager;
use crate::traversal::TraversalStrategy;

type Graph = GraphManager<String>;

/// Load the engine config (if any) and the graph file into a manager.
pub(super) fn load_graph(graph_path: &Path, config_path: Option<&Path>) -> Result<Graph> {
    let config = match config_path {
        Some(path) => EngineConfig::load(path)?,
        None => EngineConfig::default(),
    };
    GraphFile::load(graph_path)?.build(config)
}

fn write_json<T: Serialize>(out: &mut impl Write, value: &T) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}

fn ensure_vertex(graph: &Graph, vertex: &str) -> Result<()> {
    if graph.contains_vertex(&vertex.to_string()) {
        Ok(())
    } else {
        Err(Error::VertexNotFound(vertex.to_string()).into())
    }
}

/// Execute the cycles command
pub(super) fn execute_cycles(graph: &Graph, out: &mut impl Write, mode: OutputMode) -> Result<()> {
    let cycles = graph.find_cycles();

    match mode {
        OutputMode::Json => write_json(out, &cycles)?,
        OutputMode::Text => {
            if cycles.is_empty() {
                writeln!(out, "No cycles found")?;
            } else {
                writeln!(out, "Found {} cycle(s):", cycles.len())?;
                for cycle in &cycles {
                    writeln!(out, "  {}", cycle.join(" -> "))?;
                }
            }
        }
    }

    Ok(())
}

/// Execute the scc command
pub(super) fn execute_scc(graph: &Graph, out: &mut impl Write, mode: OutputMode) -> Result<()> {
    let components = graph.scc_find()?;

    match mode {
        OutputMode::Json => write_json(out, &components)?,
        OutputMode::Text => {
            writeln!(out, "{} component(s):", components.len())?;
            for (id, members) in &components {
                let members: Vec<&str> = members.iter().map(String::as_str).collect();
                writeln!(out, "  {id}: {}", members.join(", "))?;
            }
        }
    }

    Ok(())
}

/// Execute the reverse command
pub(super) fn execute_reverse(
    graph: &Graph,
    out: &mut impl Write,
    mode: OutputMode,
) -> Result<()> {
    let reversed = graph.reverse_graph_with_cost();

    match mode {
        OutputMode::Json => write_json(out, &reversed)?,
        OutputMode::Text => {
            for (vertex, predecessors) in &reversed {
                let rendered: Vec<String> = predecessors
                    .iter()
                    .map(|(predecessor, weight)| format!("{predecessor} ({weight})"))
                    .collect();
                writeln!(out, "{vertex} <- {}", rendered.join(", "))?;
            }
        }
    }

    Ok(())
}

/// Execute the traverse command
pub(super) fn execute_traverse(
    graph: &Graph,
    args: &TraverseArgs,
    out: &mut impl Write,
    mode: OutputMode,
) -> Result<()> {
    ensure_vertex(graph, &args.from)?;
    let strategy = TraversalStrategy::from(args.strategy);
    let order = graph.traverse(&args.from, strategy);

    match mode {
        OutputMode::Json => write_json(
            out,
            &serde_json::json!({
                "start": args.from,
                "strategy": strategy,
                "order": order,
            }),
        )?,
        OutputMode::Text => {
            writeln!(out, "{strategy} from {}:", args.from)?;
            writeln!(out, "  {}", order.join(" -> "))?;
        }
    }

    Ok(())
}

/// Execute the paths command
pub(super) fn execute_paths(
    graph: &Graph,
    args: &PathsArgs,
    out: &mut impl Write,
    mode: OutputMode,
) -> Result<()> {
    ensure_vertex(graph, &args.from)?;
    ensure_vertex(graph, &args.to)?;
    let paths = graph.find_all_paths(&args.from, &args.to);

    match mode {
        OutputMode::Json => write_json(out, &paths)?,
        OutputMode::Text => {
            if paths.is_empty() {
                writeln!(out, "No path from {} to {}", args.from, args.to)?;
            } else {
                writeln!(out, "Found {} path(s):", paths.len())?;
                for path in &paths {
                    writeln!(out, "  {}", path.join(" -> "))?;
                }
            }
        }
    }

    Ok(())
}

/// Execute the stats command
pub(super) fn execute_stats(graph: &Graph, out: &mut impl Write, mode: OutputMode) -> Result<()> {
    let stats = graph.stats();

    match mode {
        OutputMode::Json => write_json(
            out,
            &serde_json::json!({
                "type": graph.graph_type(),
                "version": graph.version(),
                "stats": stats,
            }),
        )?,
        OutputMode::Text => {
            writeln!(out, "Type:     {}", graph.graph_type())?;
            writeln!(out, "Vertices: {}", stats.vertex_count())?;
            writeln!(out, "Edges:    {}", stats.edge_count())?;
            writeln!(out, "Density:  {:.4}", stats.density())?;
            writeln!(out, "Version:  {}", graph.version())?;
        }
    }

    Ok(())
}

/// Execute the dump command
pub(super) fn execute_dump(graph: &Graph, out: &mut impl Write, mode: OutputMode) -> Result<()> {
    match mode {
        OutputMode::Json => write_json(out, &graph.snapshot())?,
        OutputMode::Text => write!(out, "{}", graph.dump())?,
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::types::TraversalArg;
    use crate::domain::GraphType;
    use rstest::{fixture, rstest};

    fn run(
        command: impl Fn(&Graph, &mut Vec<u8>, OutputMode) -> Result<()>,
        graph: &Graph,
        mode: OutputMode,
    ) -> String {
        let mut out = Vec::new();
        command(graph, &mut out, mode).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[fixture]
    fn two_cycles() -> Graph {
        let graph = GraphManager::new(GraphType::Directed);
        for (from, to) in [("A", "B"), ("B", "A"), ("B", "C"), ("C", "D"), ("D", "C")] {
            graph.add_edge(from.to_string(), to.to_string()).unwrap();
        }
        graph
    }

    #[rstest]
    fn cycles_text(two_cycles: Graph) {
        let text = run(|g, o, m| execute_cycles(g, o, m), &two_cycles, OutputMode::Text);
        assert_eq!(text, "Found 2 cycle(s):\n  A -> B\n  C -> D\n");
    }

    #[test]
    fn cycles_text_when_acyclic() {
        let graph = GraphManager::new(GraphType::Directed);
        graph.add_edge("A".to_string(), "B".to_string()).unwrap();
        let text = run(|g, o, m| execute_cycles(g, o, m), &graph, OutputMode::Text);
        assert_eq!(text, "No cycles found\n");
    }

    #[rstest]
    fn scc_json(two_cycles: Graph) {
        let json = run(|g, o, m| execute_scc(g, o, m), &two_cycles, OutputMode::Json);
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["0"], serde_json::json!(["A", "B"]));
        assert_eq!(value["1"], serde_json::json!(["C", "D"]));
    }

    #[rstest]
    fn scc_text(two_cycles: Graph) {
        let text = run(|g, o, m| execute_scc(g, o, m), &two_cycles, OutputMode::Text);
        assert_eq!(text, "2 component(s):\n  0: A, B\n  1: C, D\n");
    }

    #[rstest]
    fn reverse_text(two_cycles: Graph) {
        let text = run(|g, o, m| execute_reverse(g, o, m), &two_cycles, OutputMode::Text);
        assert_eq!(text, "A <- B (1)\nB <- A (1)\nC <- B (1), D (1)\nD <- C (1)\n");
    }

    #[rstest]
    fn traverse_text_and_json(two_cycles: Graph) {
        let args = TraverseArgs {
            from: "A".to_string(),
            strategy: TraversalArg::BfsIterative,
        };

        let mut out = Vec::new();
        execute_traverse(&two_cycles, &args, &mut out, OutputMode::Text).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "bfs-iterative from A:\n  A -> B -> C -> D\n"
        );

        let mut out = Vec::new();
        execute_traverse(&two_cycles, &args, &mut out, OutputMode::Json).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value["strategy"], "bfs-iterative");
        assert_eq!(value["order"], serde_json::json!(["A", "B", "C", "D"]));
    }

    #[rstest]
    fn traverse_unknown_start_is_an_error(two_cycles: Graph) {
        let args = TraverseArgs {
            from: "Z".to_string(),
            strategy: TraversalArg::DfsIterative,
        };
        let err = execute_traverse(&two_cycles, &args, &mut Vec::new(), OutputMode::Text)
            .unwrap_err();
        assert!(matches!(
            err.downcast_ref::<Error>(),
            Some(Error::VertexNotFound(v)) if v == "Z"
        ));
    }

    #[rstest]
    fn paths_text(two_cycles: Graph) {
        let args = PathsArgs {
            from: "A".to_string(),
            to: "D".to_string(),
        };
        let mut out = Vec::new();
        execute_paths(&two_cycles, &args, &mut out, OutputMode::Text).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Found 1 path(s):\n  A -> B -> C -> D\n"
        );
    }

    #[rstest]
    fn paths_text_when_unreachable(two_cycles: Graph) {
        let args = PathsArgs {
            from: "D".to_string(),
            to: "A".to_string(),
        };
        let mut out = Vec::new();
        execute_paths(&two_cycles, &args, &mut out, OutputMode::Text).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "No path from D to A\n");
    }

    #[rstest]
    fn stats_json(two_cycles: Graph) {
        let json = run(|g, o, m| execute_stats(g, o, m), &two_cycles, OutputMode::Json);
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["type"], "directed");
        assert_eq!(value["stats"]["vertex_count"], 4);
        assert_eq!(value["stats"]["edge_count"], 5);
    }

    #[rstest]
    fn stats_text(two_cycles: Graph) {
        let text = run(|g, o, m| execute_stats(g, o, m), &two_cycles, OutputMode::Text);
        assert!(text.contains("Vertices: 4\n"));
        assert!(text.contains("Edges:    5\n"));
        assert!(text.contains("Density:  0.4167\n"));
    }

    #[test]
    fn dump_text() {
        let graph = GraphManager::new(GraphType::Directed);
        graph.add_weighted_edge("A".to_string(), "B".to_string(), 2.5).unwrap();
        let text = run(|g, o, m| execute_dump(g, o, m), &graph, OutputMode::Text);
        assert_eq!(text, "\"A\" -> {\"B\": 2.5}\n\"B\" -> {}\n");
    }

    #[rstest]
    fn dump_json_is_snapshot(two_cycles: Graph) {
        let json = run(|g, o, m| execute_dump(g, o, m), &two_cycles, OutputMode::Json);
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["type"], "directed");
        assert_eq!(value["adjacency_list"]["B"]["C"], 1.0);
    }
}
