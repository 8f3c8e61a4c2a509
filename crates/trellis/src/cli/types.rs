//! CLI value enums and domain type conversions.

use clap::ValueEnum;

use crate::traversal::TraversalStrategy;

/// Traversal strategy for CLI arguments
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraversalArg {
    /// Breadth-first with an explicit queue
    BfsIterative,
    /// Breadth-first, one recursion per level
    BfsRecursive,
    /// Depth-first with an explicit stack
    DfsIterative,
    /// Depth-first, one recursion per vertex
    DfsRecursive,
    /// Depth-first, each vertex visited after its descendants
    DfsPostOrder,
}

impl std::fmt::Display for TraversalArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BfsIterative => write!(f, "bfs-iterative"),
            Self::BfsRecursive => write!(f, "bfs-recursive"),
            Self::DfsIterative => write!(f, "dfs-iterative"),
            Self::DfsRecursive => write!(f, "dfs-recursive"),
            Self::DfsPostOrder => write!(f, "dfs-post-order"),
        }
    }
}

impl From<TraversalArg> for TraversalStrategy {
    fn from(arg: TraversalArg) -> Self {
        match arg {
            TraversalArg::BfsIterative => TraversalStrategy::BfsIterative,
            TraversalArg::BfsRecursive => TraversalStrategy::BfsRecursive,
            TraversalArg::DfsIterative => TraversalStrategy::DfsIterative,
            TraversalArg::DfsRecursive => TraversalStrategy::DfsRecursive,
            TraversalArg::DfsPostOrder => TraversalStrategy::DfsPostOrder,
        }
    }
}
