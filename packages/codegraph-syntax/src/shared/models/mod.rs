//! Shared models

mod span;

pub use span::{LineColumn, SourceLocation};

// Re-export serde_json::Value for node metadata
pub use serde_json::Value;
