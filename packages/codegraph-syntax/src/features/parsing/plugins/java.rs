//! Java Language Plugin

use tree_sitter::Language as TSLanguage;

use crate::config::ParserConfig;
use crate::features::parsing::infrastructure::{LanguageParserAdapter, TreeSitterGrammar};
use crate::features::parsing::ports::{LanguageId, LanguagePlugin};

/// Java language plugin
pub struct JavaPlugin;

pub type JavaParser = LanguageParserAdapter<TreeSitterGrammar<JavaPlugin>>;

impl JavaPlugin {
    pub fn new() -> Self {
        Self
    }

    pub fn parser(config: ParserConfig) -> JavaParser {
        LanguageParserAdapter::with_config(TreeSitterGrammar::new(Self::new()), config)
    }
}

impl Default for JavaPlugin {
    fn default() -> Self {
        Self::new()
    }
}

impl LanguagePlugin for JavaPlugin {
    fn tree_sitter_language(&self) -> TSLanguage {
        tree_sitter_java::language()
    }

    fn language_id(&self) -> LanguageId {
        LanguageId::Java
    }
}
