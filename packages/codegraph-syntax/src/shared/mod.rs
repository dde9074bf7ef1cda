//! Shared module - Common types and utilities
//!
//! This module contains types that are shared across all features.
//! It has no tree-sitter dependency.

pub mod constants;
pub mod models;

// Re-exports for convenience
pub use models::*;
