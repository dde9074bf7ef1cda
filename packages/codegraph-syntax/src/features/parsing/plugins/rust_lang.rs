//! Rust Language Plugin

use tree_sitter::Language as TSLanguage;

use crate::config::ParserConfig;
use crate::features::parsing::infrastructure::{LanguageParserAdapter, TreeSitterGrammar};
use crate::features::parsing::ports::{LanguageId, LanguagePlugin};

/// Rust language plugin
pub struct RustPlugin;

pub type RustParser = LanguageParserAdapter<TreeSitterGrammar<RustPlugin>>;

impl RustPlugin {
    pub fn new() -> Self {
        Self
    }

    pub fn parser(config: ParserConfig) -> RustParser {
        LanguageParserAdapter::with_config(TreeSitterGrammar::new(Self::new()), config)
    }
}

impl Default for RustPlugin {
    fn default() -> Self {
        Self::new()
    }
}

impl LanguagePlugin for RustPlugin {
    fn tree_sitter_language(&self) -> TSLanguage {
        tree_sitter_rust::language()
    }

    fn language_id(&self) -> LanguageId {
        LanguageId::Rust
    }
}
