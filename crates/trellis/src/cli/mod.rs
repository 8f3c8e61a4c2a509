//! CLI argument parsing and command dispatch.
//!
//! The binary loads one graph file, builds a [`GraphManager`] from it and runs
//! a single query against it.
//!
//! # Commands
//!
//! - `cycles`: List the cycles found by one DFS over the graph
//! - `scc`: Strongly connected (or connected) components
//! - `reverse`: Predecessors of every vertex with edge weights
//! - `traverse`: Visit order from a start vertex
//! - `paths`: Every simple path between two vertices
//! - `stats`: Vertex and edge counts, density and version
//! - `dump`: The adjacency list
//!
//! # Global Flags
//!
//! - `--json`: Output in JSON format (applies to all commands)
//!
//! # Example
//!
//! ```bash
//! trellis --graph deps.yaml cycles
//! trellis --graph deps.yaml --config trellis.yaml scc --json
//! trellis --graph deps.yaml traverse --from A --strategy bfs-iterative
//! trellis --graph deps.yaml paths --from A --to D
//! ```
//!
//! [`GraphManager`]: crate::GraphManager

mod args;
mod execute;
mod graph_file;
mod types;
mod validators;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::io::{self, Write};
use std::path::PathBuf;

pub use args::{PathsArgs, TraverseArgs};
pub use graph_file::{EdgeSpec, GraphFile};
pub use types::TraversalArg;
pub use validators::validate_vertex;

/// Output format selected by the global `--json` flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Human-readable text format
    Text,
    /// JSON format for programmatic use
    Json,
}

/// Trellis - query a weighted graph from the command line
///
/// Loads a graph from a YAML or JSON file and runs one analysis on it.
#[derive(Parser, Debug)]
#[command(name = "trellis")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Graph file (YAML or JSON)
    #[arg(short, long)]
    pub graph: PathBuf,

    /// Engine configuration file (YAML)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Output in JSON format for programmatic use
    #[arg(long, global = true)]
    pub json: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// List cycles
    ///
    /// Runs one DFS over the whole graph and prints every cycle it closes.
    Cycles,

    /// Find strongly connected components
    ///
    /// Uses Kosaraju's algorithm on directed graphs and connected components
    /// on undirected graphs.
    Scc,

    /// Show the reverse graph
    ///
    /// Lists the predecessors of every vertex with the weight of each edge.
    Reverse,

    /// Traverse the graph from a start vertex
    Traverse(TraverseArgs),

    /// Enumerate simple paths between two vertices
    Paths(PathsArgs),

    /// Show graph statistics
    Stats,

    /// Print the adjacency list
    Dump,
}

impl Cli {
    /// Parse CLI arguments from command line
    #[must_use]
    pub fn parse_args() -> Self {
        <Self as Parser>::parse()
    }

    /// Parse CLI arguments from an iterator (for testing)
    ///
    /// # Errors
    ///
    /// Returns the clap error for unknown flags, missing arguments or invalid
    /// values.
    pub fn try_parse_from<I, T>(iter: I) -> std::result::Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        <Self as Parser>::try_parse_from(iter)
    }

    /// Output mode selected by the flags.
    #[must_use]
    pub fn output_mode(&self) -> OutputMode {
        if self.json {
            OutputMode::Json
        } else {
            OutputMode::Text
        }
    }

    /// Execute the CLI command, writing to stdout.
    ///
    /// # Errors
    ///
    /// Fails if the graph or config file cannot be loaded, if the graph file
    /// describes an invalid graph, or if a named vertex does not exist.
    pub fn execute(&self) -> Result<()> {
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        self.execute_to(&mut handle)?;
        handle.flush()?;
        Ok(())
    }

    /// Execute the CLI command, writing to `out`.
    ///
    /// # Errors
    ///
    /// Same as [`Cli::execute`], plus write failures on `out`.
    pub fn execute_to(&self, out: &mut impl Write) -> Result<()> {
        let graph = execute::load_graph(&self.graph, self.config.as_deref())?;
        let mode = self.output_mode();

        match &self.command {
            Commands::Cycles => execute::execute_cycles(&graph, out, mode),
            Commands::Scc => execute::execute_scc(&graph, out, mode),
            Commands::Reverse => execute::execute_reverse(&graph, out, mode),
            Commands::Traverse(args) => execute::execute_traverse(&graph, args, out, mode),
            Commands::Paths(args) => execute::execute_paths(&graph, args, out, mode),
            Commands::Stats => execute::execute_stats(&graph, out, mode),
            Commands::Dump => execute::execute_dump(&graph, out, mode),
        }
    }
}
