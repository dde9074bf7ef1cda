//! TypeScript / JavaScript Language Plugin
//!
//! JavaScript is parsed with the TypeScript grammar, which accepts it.
//! `.tsx` and `.jsx` files need the TSX dialect of that grammar.

use tree_sitter::Language as TSLanguage;

use crate::config::ParserConfig;
use crate::features::parsing::infrastructure::{LanguageParserAdapter, TreeSitterGrammar};
use crate::features::parsing::ports::{LanguageId, LanguagePlugin};

/// TypeScript language plugin
pub struct TypeScriptPlugin {
    /// Report trees as TypeScript (true) or JavaScript (false)
    use_typescript: bool,
    /// Parse with the TSX grammar
    jsx: bool,
}

pub type TypeScriptParser = LanguageParserAdapter<TreeSitterGrammar<TypeScriptPlugin>>;

impl TypeScriptPlugin {
    pub fn new() -> Self {
        Self {
            use_typescript: true,
            jsx: false,
        }
    }

    pub fn javascript() -> Self {
        Self {
            use_typescript: false,
            jsx: false,
        }
    }

    pub fn tsx() -> Self {
        Self {
            use_typescript: true,
            jsx: true,
        }
    }

    pub fn jsx() -> Self {
        Self {
            use_typescript: false,
            jsx: true,
        }
    }

    pub fn is_jsx(&self) -> bool {
        self.jsx
    }

    pub fn parser(config: ParserConfig) -> TypeScriptParser {
        LanguageParserAdapter::with_config(TreeSitterGrammar::new(Self::new()), config)
    }

    pub fn javascript_parser(config: ParserConfig) -> TypeScriptParser {
        LanguageParserAdapter::with_config(TreeSitterGrammar::new(Self::javascript()), config)
    }

    pub fn tsx_parser(config: ParserConfig) -> TypeScriptParser {
        LanguageParserAdapter::with_config(TreeSitterGrammar::new(Self::tsx()), config)
    }

    pub fn jsx_parser(config: ParserConfig) -> TypeScriptParser {
        LanguageParserAdapter::with_config(TreeSitterGrammar::new(Self::jsx()), config)
    }
}

impl Default for TypeScriptPlugin {
    fn default() -> Self {
        Self::new()
    }
}

impl LanguagePlugin for TypeScriptPlugin {
    fn tree_sitter_language(&self) -> TSLanguage {
        if self.jsx {
            tree_sitter_typescript::language_tsx()
        } else {
            tree_sitter_typescript::language_typescript()
        }
    }

    fn language_id(&self) -> LanguageId {
        if self.use_typescript {
            LanguageId::TypeScript
        } else {
            LanguageId::JavaScript
        }
    }

    fn extensions(&self) -> &[&str] {
        let id = self.language_id();
        if self.jsx {
            id.jsx_extensions()
        } else {
            id.plain_extensions()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::parsing::ports::LanguageParser;
    use tokio_util::sync::CancellationToken;

    #[tokio::test]
    async fn test_typescript_declarations() {
        let parser = TypeScriptPlugin::parser(ParserConfig::default());
        let source = "interface Point { x: number }\n\
                      function add(a: number, b: number): number { return a + b; }\n";
        let tree = parser
            .parse(source, Some("point.ts"), &CancellationToken::new())
            .await
            .unwrap();

        assert_eq!(tree.language(), "typescript");
        assert!(!tree.has_errors());
        assert_eq!(tree.root().find_descendant("Point").unwrap().node_type(), "interface_declaration");
        assert_eq!(tree.root().find_descendant("add").unwrap().node_type(), "function_declaration");
    }

    #[tokio::test]
    async fn test_javascript_uses_same_grammar() {
        let parser = TypeScriptPlugin::javascript_parser(ParserConfig::default());
        let source = "class A {}\nconst f = () => 1;\n";
        let tree = parser
            .parse(source, Some("a.js"), &CancellationToken::new())
            .await
            .unwrap();

        assert_eq!(tree.language(), "javascript");
        assert_eq!(tree.root().find_descendant("A").unwrap().node_type(), "class_declaration");
    }

    #[tokio::test]
    async fn test_jsx_dialects() {
        let cancel = CancellationToken::new();
        let source = "const App = () => <div className=\"x\">hi</div>;\n";
        for (parser, path, language) in [
            (TypeScriptPlugin::tsx_parser(ParserConfig::default()), "App.tsx", "typescript"),
            (TypeScriptPlugin::jsx_parser(ParserConfig::default()), "App.jsx", "javascript"),
        ] {
            let tree = parser.parse(source, Some(path), &cancel).await.unwrap();
            assert_eq!(tree.language(), language);
            assert!(!tree.has_errors(), "{}", tree.to_sexp());
            assert_eq!(tree.nodes_by_type("jsx_element").count(), 1, "{path}");
        }
    }

    #[tokio::test]
    async fn test_plain_typescript_rejects_jsx() {
        let parser = TypeScriptPlugin::parser(ParserConfig::default());
        let tree = parser
            .parse("const App = () => <div>hi</div>;", None, &CancellationToken::new())
            .await
            .unwrap();
        assert!(tree.has_errors());
    }

    #[test]
    fn test_extensions_follow_language() {
        assert!(TypeScriptPlugin::new().supports("ts"));
        assert!(!TypeScriptPlugin::new().supports("tsx"));
        assert!(!TypeScriptPlugin::new().supports("js"));
        assert!(TypeScriptPlugin::javascript().supports("mjs"));
        assert!(!TypeScriptPlugin::javascript().supports("jsx"));
        assert!(TypeScriptPlugin::tsx().supports("TSX"));
        assert!(TypeScriptPlugin::jsx().supports("jsx"));
        assert!(!TypeScriptPlugin::jsx().supports("js"));
    }
}
