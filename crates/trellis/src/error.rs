//! Error types for graph engine operations.

use std::io;

use thiserror::Error;

use crate::domain::GraphType;

/// The error type for graph engine operations.
///
/// Vertices are rendered with their `Debug` representation so the error
/// stays independent of the vertex type.
#[derive(Debug, Error)]
pub enum Error {
    /// An edge from a vertex to itself was requested.
    #[error("self-loop is not allowed: {vertex}")]
    SelfLoop {
        /// The offending vertex
        vertex: String,
    },

    /// An edge already exists between the ordered endpoint pair.
    #[error("edge already exists: {from} -> {to}")]
    DuplicateEdge {
        /// Edge source
        from: String,
        /// Edge destination
        to: String,
    },

    /// The operation has no defined semantics for this graph type.
    #[error("{operation} is not supported for {graph_type} graphs")]
    UnsupportedForGraphType {
        /// Name of the rejected operation
        operation: &'static str,
        /// Type of the graph the operation was invoked on
        graph_type: GraphType,
    },

    /// The vertex is not part of the graph.
    #[error("vertex not found: {0}")]
    VertexNotFound(String),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// IO error occurred.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

impl Error {
    pub(crate) fn self_loop<T: std::fmt::Debug>(vertex: &T) -> Self {
        Self::SelfLoop {
            vertex: format!("{vertex:?}"),
        }
    }

    pub(crate) fn duplicate_edge<T: std::fmt::Debug>(source: &T, destination: &T) -> Self {
        Self::DuplicateEdge {
            from: format!("{source:?}"),
            to: format!("{destination:?}"),
        }
    }

    pub(crate) fn vertex_not_found<T: std::fmt::Debug>(vertex: &T) -> Self {
        Self::VertexNotFound(format!("{vertex:?}"))
    }
}

/// A specialized Result type for graph engine operations.
pub type Result<T> = std::result::Result<T, Error>;
