/*
 * Codegraph Syntax - generic AST model and language parser adapters
 *
 * Feature-First Hexagonal Architecture:
 * - shared/      : Common models (SourceLocation, constants)
 * - features/    : Vertical slices (parsing)
 * - config/      : Parser presets and YAML overrides
 * - errors       : Crate-wide error type
 */

#![allow(clippy::should_implement_trait)] // from_str naming intentional
#![allow(clippy::new_without_default)] // Default impl not always needed

/// Shared models and utilities
pub mod shared;

/// Feature modules
pub mod features;

/// Configuration system
pub mod config;

/// Error types
pub mod errors;

// ═══════════════════════════════════════════════════════════════════════════
// Re-exports for Public API
// ═══════════════════════════════════════════════════════════════════════════

pub use config::{ParserConfig, Preset};
pub use errors::{CodegraphError, Result};
pub use features::parsing::{
    AdapterPhase, AstNode, LanguageId, LanguageParser, ParseFileUseCase, ParserRegistry,
    SyntaxError, SyntaxTree, SyntaxTreeMetrics,
};
pub use shared::models::{LineColumn, SourceLocation};
pub use tokio_util::sync::CancellationToken;
