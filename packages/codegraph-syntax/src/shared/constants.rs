//! Centralized constants
//!
//! Messages and capacity hints shared by the parsing feature.

/// Diagnostic and validation messages
pub mod messages {
    /// Returned by every adapter when asked to parse empty input
    pub const EMPTY_SOURCE: &str = "Source code cannot be null or empty";

    /// Message attached to every diagnostic derived from an error node
    pub const SYNTAX_ERROR: &str = "Syntax error";
}

/// Tree construction
pub mod tree_builder {
    /// Initial arena capacity (typical file has 100-1000 nodes)
    pub const INITIAL_NODE_CAPACITY: usize = 512;

    /// Metadata key holding the grammar field name of a child
    pub const FIELD_METADATA_KEY: &str = "field";

    /// Metadata key flagging grammar tokens that are not named nodes
    pub const ANONYMOUS_METADATA_KEY: &str = "anonymous";
}

/// Configuration schema
pub mod config {
    /// YAML schema versions this crate can read
    pub const SUPPORTED_VERSIONS: &[u32] = &[1];
}
