//! Parser registry
//!
//! Maps language identifiers to shared adapters so callers can resolve a
//! parser by name or by file extension. Languages with a JSX dialect keep a
//! second adapter for `.tsx` / `.jsx` files.

use std::path::Path;
use std::sync::Arc;

use rustc_hash::FxHashMap;
use tracing::info;

use crate::config::ParserConfig;
use crate::errors::{CodegraphError, Result};
use crate::features::parsing::plugins::{create_jsx_parser, create_parser};
use crate::features::parsing::ports::{LanguageId, LanguageParser};

#[derive(Default)]
pub struct ParserRegistry {
    parsers: FxHashMap<LanguageId, Arc<dyn LanguageParser>>,
    jsx_parsers: FxHashMap<LanguageId, Arc<dyn LanguageParser>>,
}

impl ParserRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with an adapter for every bundled language
    pub fn with_all_languages(config: ParserConfig) -> Self {
        Self::with_languages(&LanguageId::ALL, config)
    }

    /// Registry with only specific languages
    pub fn with_languages(languages: &[LanguageId], config: ParserConfig) -> Self {
        let mut registry = Self::new();
        for &id in languages {
            registry.register(id, create_parser(id, config.clone()));
            if let Some(jsx) = create_jsx_parser(id, config.clone()) {
                registry.register_jsx(id, jsx);
            }
        }
        registry
    }

    /// Register an adapter, returning the one it replaces
    pub fn register(
        &mut self,
        id: LanguageId,
        parser: Arc<dyn LanguageParser>,
    ) -> Option<Arc<dyn LanguageParser>> {
        self.parsers.insert(id, parser)
    }

    /// Register the adapter used for `id`'s JSX extensions
    pub fn register_jsx(
        &mut self,
        id: LanguageId,
        parser: Arc<dyn LanguageParser>,
    ) -> Option<Arc<dyn LanguageParser>> {
        self.jsx_parsers.insert(id, parser)
    }

    /// Resolve by language name (case-insensitive)
    pub fn lookup(&self, name: &str) -> Result<Arc<dyn LanguageParser>> {
        LanguageId::from_name(name)
            .and_then(|id| self.lookup_id(id))
            .ok_or_else(|| CodegraphError::UnsupportedLanguage(name.to_string()))
    }

    pub fn lookup_id(&self, id: LanguageId) -> Option<Arc<dyn LanguageParser>> {
        self.parsers.get(&id).cloned()
    }

    /// Resolve by the file extension of `path`
    ///
    /// `.tsx` / `.jsx` resolve to the JSX adapter when one is registered.
    pub fn for_path(&self, path: impl AsRef<Path>) -> Result<Arc<dyn LanguageParser>> {
        let path = path.as_ref();
        let ext = path.extension().and_then(|e| e.to_str()).unwrap_or_default();
        LanguageId::from_extension(ext)
            .and_then(|id| {
                if id.is_jsx_extension(ext) {
                    if let Some(parser) = self.jsx_parsers.get(&id) {
                        return Some(Arc::clone(parser));
                    }
                }
                self.lookup_id(id)
            })
            .ok_or_else(|| CodegraphError::UnsupportedLanguage(path.display().to_string()))
    }

    /// Registered languages in declaration order
    pub fn languages(&self) -> Vec<LanguageId> {
        LanguageId::ALL
            .into_iter()
            .filter(|id| self.parsers.contains_key(id))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.parsers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parsers.is_empty()
    }

    /// Dispose every registered adapter
    pub async fn dispose_all(&self) {
        for id in LanguageId::ALL {
            if let Some(parser) = self.parsers.get(&id) {
                parser.dispose().await;
            }
            if let Some(parser) = self.jsx_parsers.get(&id) {
                parser.dispose().await;
            }
        }
        info!(
            "Disposed {} parsers",
            self.parsers.len() + self.jsx_parsers.len()
        );
    }
}

impl std::fmt::Debug for ParserRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ParserRegistry")
            .field("languages", &self.languages())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::parsing::infrastructure::AdapterPhase;
    use tokio_util::sync::CancellationToken;

    #[test]
    fn test_lookup_by_name_and_path() {
        let registry = ParserRegistry::with_all_languages(ParserConfig::default());
        assert_eq!(registry.len(), LanguageId::ALL.len());
        assert_eq!(registry.lookup("Kotlin").unwrap().language(), "kotlin");
        assert_eq!(registry.for_path("web/app.jsx").unwrap().language(), "javascript");
        assert_eq!(registry.for_path("lib.rs").unwrap().language(), "rust");
    }

    #[test]
    fn test_jsx_extensions_get_their_own_adapter() {
        let registry = ParserRegistry::with_languages(
            &[LanguageId::TypeScript, LanguageId::JavaScript],
            ParserConfig::default(),
        );
        let ts = registry.for_path("src/app.ts").unwrap();
        let tsx = registry.for_path("src/App.TSX").unwrap();
        assert_eq!(tsx.language(), "typescript");
        assert!(!Arc::ptr_eq(&ts, &tsx));
        assert!(Arc::ptr_eq(&ts, &registry.lookup_id(LanguageId::TypeScript).unwrap()));

        let js = registry.for_path("index.mjs").unwrap();
        let jsx = registry.for_path("index.jsx").unwrap();
        assert_eq!(jsx.language(), "javascript");
        assert!(!Arc::ptr_eq(&js, &jsx));
    }

    #[tokio::test]
    async fn test_react_components_parse_cleanly() {
        let registry = ParserRegistry::with_all_languages(ParserConfig::default());
        let cancel = CancellationToken::new();
        let source = "const App = () => <div>hi</div>;";
        for path in ["App.tsx", "App.jsx"] {
            let tree = registry
                .for_path(path)
                .unwrap()
                .parse(source, Some(path), &cancel)
                .await
                .unwrap();
            assert!(!tree.has_errors(), "{path}: {}", tree.to_sexp());
            assert!(tree.nodes_by_type("jsx_element").next().is_some(), "{path}");
        }
    }

    #[test]
    fn test_jsx_falls_back_to_plain_adapter() {
        let mut registry = ParserRegistry::new();
        registry.register(
            LanguageId::JavaScript,
            create_parser(LanguageId::JavaScript, ParserConfig::default()),
        );
        assert_eq!(registry.for_path("a.jsx").unwrap().language(), "javascript");
    }

    #[test]
    fn test_unsupported_language() {
        let registry = ParserRegistry::with_languages(&[LanguageId::Go], ParserConfig::default());
        assert_eq!(registry.languages(), vec![LanguageId::Go]);

        let err = registry.lookup("python").err().unwrap();
        assert!(matches!(err, CodegraphError::UnsupportedLanguage(ref n) if n == "python"));
        assert!(registry.lookup("cobol").is_err());
        assert!(registry.for_path("README.md").is_err());
    }

    #[tokio::test]
    async fn test_dispose_all() {
        let registry = ParserRegistry::with_languages(
            &[LanguageId::Python, LanguageId::Java],
            ParserConfig::default(),
        );
        let python = registry.lookup_id(LanguageId::Python).unwrap();
        python.initialize(&CancellationToken::new()).await.unwrap();

        registry.dispose_all().await;
        for id in registry.languages() {
            assert_eq!(registry.lookup_id(id).unwrap().phase(), AdapterPhase::Disposed);
        }
    }

    #[tokio::test]
    async fn test_dispose_all_reaches_jsx_adapters() {
        let registry =
            ParserRegistry::with_languages(&[LanguageId::TypeScript], ParserConfig::default());
        registry.dispose_all().await;
        assert_eq!(registry.for_path("a.tsx").unwrap().phase(), AdapterPhase::Disposed);
    }
}
