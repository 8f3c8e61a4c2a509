//! CLI argument structs for commands that take parameters.

use clap::Parser;

use super::types::TraversalArg;
use super::validators::validate_vertex;

/// Arguments for the `traverse` command
#[derive(Parser, Debug, Clone)]
pub struct TraverseArgs {
    /// Start vertex
    #[arg(short, long, value_parser = validate_vertex)]
    pub from: String,

    /// Traversal strategy
    #[arg(short, long, value_enum, default_value_t = TraversalArg::DfsIterative)]
    pub strategy: TraversalArg,
}

/// Arguments for the `paths` command
#[derive(Parser, Debug, Clone)]
pub struct PathsArgs {
    /// Source vertex
    #[arg(short, long, value_parser = validate_vertex)]
    pub from: String,

    /// Destination vertex
    #[arg(short, long, value_parser = validate_vertex)]
    pub to: String,
}
