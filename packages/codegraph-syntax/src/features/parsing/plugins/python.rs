//! Python Language Plugin

use tree_sitter::Language as TSLanguage;

use crate::config::ParserConfig;
use crate::features::parsing::infrastructure::{LanguageParserAdapter, TreeSitterGrammar};
use crate::features::parsing::ports::{LanguageId, LanguagePlugin};

/// Python language plugin
pub struct PythonPlugin;

pub type PythonParser = LanguageParserAdapter<TreeSitterGrammar<PythonPlugin>>;

impl PythonPlugin {
    pub fn new() -> Self {
        Self
    }

    pub fn parser(config: ParserConfig) -> PythonParser {
        LanguageParserAdapter::with_config(TreeSitterGrammar::new(Self::new()), config)
    }
}

impl Default for PythonPlugin {
    fn default() -> Self {
        Self::new()
    }
}

impl LanguagePlugin for PythonPlugin {
    fn tree_sitter_language(&self) -> TSLanguage {
        tree_sitter_python::language()
    }

    fn language_id(&self) -> LanguageId {
        LanguageId::Python
    }
}
