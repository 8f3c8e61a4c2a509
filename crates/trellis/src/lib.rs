//! Trellis - an in-memory, concurrently accessed weighted graph engine.
//!
//! A [`GraphManager`] owns one directed or undirected graph behind a
//! reader/writer lock and exposes whole mutations and whole-graph queries:
//! cycle detection, strongly connected components (Kosaraju) or connected
//! components, reverse views, traversal and simple path enumeration.
//!
//! The algorithms are also usable directly on a [`GraphContext`] when the
//! caller manages synchronization itself.

#![forbid(unsafe_code)]

// Public modules for library usage
pub mod config;
pub mod context;
pub mod cycle;
pub mod domain;
pub mod error;
pub mod manager;
pub mod paths;
pub mod scc;
pub mod traversal;

// Public CLI module (needed by binary)
pub mod cli;

mod operations;

pub use config::EngineConfig;
pub use context::{GraphContext, GraphSnapshot};
pub use cycle::{Cycle, CycleDetector};
pub use domain::{AdjacencyMap, GraphStats, GraphType, Vertex, VertexMetadata, Weight};
pub use error::{Error, Result};
pub use manager::GraphManager;
pub use scc::{Components, SccFinder};
pub use traversal::{Adjacency, TraversalStrategy};
