//! Per-vertex bookkeeping.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Side-table record kept for every vertex.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VertexMetadata {
    /// Free-form properties attached to the vertex
    pub properties: BTreeMap<String, Value>,

    /// Last time the vertex was created or read through an access-tracking query
    pub last_accessed: DateTime<Utc>,

    /// Number of recorded accesses
    pub access_count: u64,
}

impl VertexMetadata {
    /// Fresh record with no properties and no accesses.
    #[must_use]
    pub fn new() -> Self {
        Self {
            properties: BTreeMap::new(),
            last_accessed: Utc::now(),
            access_count: 0,
        }
    }

    /// Bump the access counter and timestamp.
    pub fn record_access(&mut self) {
        self.last_accessed = Utc::now();
        self.access_count += 1;
    }
}

impl Default for VertexMetadata {
    fn default() -> Self {
        Self::new()
    }
}
