//! Parsing infrastructure
//!
//! Adapter lifecycle plus the tree-sitter grammars behind it.

mod adapter;
mod lifecycle;
pub mod tree_sitter;

pub use adapter::LanguageParserAdapter;
pub use lifecycle::{AdapterPhase, IllegalTransition, LifecycleEvent};
pub use self::tree_sitter::{TreeSitterEngine, TreeSitterGrammar};
