//! Language Plugin Port
//!
//! Defines the contract for tree-sitter language plugins.
//! Each language (Python, Java, TypeScript, etc.) implements this trait.

use tree_sitter::{Language as TSLanguage, Node as TSNode};

use super::LanguageId;

/// Language Plugin trait
///
/// Each supported language implements this trait to provide:
/// - Tree-sitter grammar
/// - Declaration naming rules
pub trait LanguagePlugin: Send + Sync + 'static {
    /// Get the tree-sitter language
    fn tree_sitter_language(&self) -> TSLanguage;

    /// Get the language identifier
    fn language_id(&self) -> LanguageId;

    /// Get supported file extensions
    fn extensions(&self) -> &[&str] {
        self.language_id().extensions()
    }

    /// Check if this plugin supports a file extension
    fn supports(&self, ext: &str) -> bool {
        self.extensions()
            .iter()
            .any(|e| e.eq_ignore_ascii_case(ext))
    }

    /// Declared name of a node, if it has one.
    ///
    /// Default: text of the `name` field.
    fn node_name(&self, node: &TSNode<'_>, source: &str) -> Option<String> {
        node.child_by_field_name("name")
            .and_then(|name| source.get(name.byte_range()))
            .map(str::to_string)
    }
}
