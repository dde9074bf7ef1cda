//! Go Language Plugin

use tree_sitter::Language as TSLanguage;

use crate::config::ParserConfig;
use crate::features::parsing::infrastructure::{LanguageParserAdapter, TreeSitterGrammar};
use crate::features::parsing::ports::{LanguageId, LanguagePlugin};

/// Go language plugin
pub struct GoPlugin;

pub type GoParser = LanguageParserAdapter<TreeSitterGrammar<GoPlugin>>;

impl GoPlugin {
    pub fn new() -> Self {
        Self
    }

    pub fn parser(config: ParserConfig) -> GoParser {
        LanguageParserAdapter::with_config(TreeSitterGrammar::new(Self::new()), config)
    }
}

impl Default for GoPlugin {
    fn default() -> Self {
        Self::new()
    }
}

impl LanguagePlugin for GoPlugin {
    fn tree_sitter_language(&self) -> TSLanguage {
        tree_sitter_go::language()
    }

    fn language_id(&self) -> LanguageId {
        LanguageId::Go
    }
}
