//! Configuration I/O (YAML schema)
//!
//! Defines YAML schema types. Loading lives in parser_config.rs.

use serde::{Deserialize, Serialize};

/// YAML Schema v1
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigExportV1 {
    /// Schema version (always 1 for v1)
    pub version: Option<u32>,

    /// Base preset
    pub preset: String,

    /// Fine-grained overrides
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overrides: Option<ParserOverrides>,
}

/// Per-field overrides on top of the preset
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ParserOverrides {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub include_anonymous_nodes: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub include_extras: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capture_leaf_text: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub record_field_names: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_micros: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_source_bytes: Option<usize>,
}
