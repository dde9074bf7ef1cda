//! Tree metrics snapshot

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Counts computed over one `SyntaxTree`; not cached, never mutated after creation
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyntaxTreeMetrics {
    pub total_nodes: usize,
    pub max_depth: usize,
    pub error_count: usize,
    pub missing_count: usize,
    /// Keys are lower-cased node types
    pub node_type_counts: FxHashMap<String, usize>,
    pub source_length: usize,
    pub line_count: usize,
}

impl SyntaxTreeMetrics {
    /// Number of nodes of `node_type`, compared case-insensitively
    pub fn count_for(&self, node_type: &str) -> usize {
        self.node_type_counts
            .get(&node_type.to_lowercase())
            .copied()
            .unwrap_or(0)
    }

    /// Number of distinct node types
    pub fn distinct_types(&self) -> usize {
        self.node_type_counts.len()
    }

    pub(crate) fn record_type(&mut self, node_type: &str) {
        *self
            .node_type_counts
            .entry(node_type.to_lowercase())
            .or_insert(0) += 1;
    }
}
