//! Kotlin Language Plugin
//!
//! The Kotlin grammar exposes no `name` field on declarations; names are
//! taken from the first identifier child instead.

use tree_sitter::{Language as TSLanguage, Node as TSNode};

use crate::config::ParserConfig;
use crate::features::parsing::infrastructure::{LanguageParserAdapter, TreeSitterGrammar};
use crate::features::parsing::ports::{LanguageId, LanguagePlugin};

/// Declarations named by their first identifier child
const NAMED_DECLARATIONS: &[&str] = &[
    "class_declaration",
    "object_declaration",
    "function_declaration",
    "type_alias",
    "enum_entry",
];

/// Kotlin language plugin
pub struct KotlinPlugin;

pub type KotlinParser = LanguageParserAdapter<TreeSitterGrammar<KotlinPlugin>>;

impl KotlinPlugin {
    pub fn new() -> Self {
        Self
    }

    pub fn parser(config: ParserConfig) -> KotlinParser {
        LanguageParserAdapter::with_config(TreeSitterGrammar::new(Self::new()), config)
    }
}

impl Default for KotlinPlugin {
    fn default() -> Self {
        Self::new()
    }
}

impl LanguagePlugin for KotlinPlugin {
    fn tree_sitter_language(&self) -> TSLanguage {
        tree_sitter_kotlin::language()
    }

    fn language_id(&self) -> LanguageId {
        LanguageId::Kotlin
    }

    fn node_name(&self, node: &TSNode<'_>, source: &str) -> Option<String> {
        if let Some(name) = node.child_by_field_name("name") {
            return source.get(name.byte_range()).map(str::to_string);
        }
        if !NAMED_DECLARATIONS.contains(&node.kind()) {
            return None;
        }
        let mut cursor = node.walk();
        let ident = node
            .children(&mut cursor)
            .find(|c| c.kind() == "type_identifier" || c.kind() == "simple_identifier")?;
        source.get(ident.byte_range()).map(str::to_string)
    }
}
