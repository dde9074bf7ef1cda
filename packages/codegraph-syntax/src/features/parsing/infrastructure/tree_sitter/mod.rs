//! Tree-sitter backed grammars

mod builder;
mod engine;

pub use builder::{AstBuilder, BuildOptions};
pub use engine::{TreeSitterEngine, TreeSitterGrammar};
