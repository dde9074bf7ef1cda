//! Tree-sitter grammar and engine
//!
//! This is where tree-sitter dependency lives.

use std::sync::Arc;

use tracing::{debug, warn};
use tree_sitter::Parser as TSParser;

use super::builder::{AstBuilder, BuildOptions};
use crate::config::ParserConfig;
use crate::errors::{CodegraphError, Result};
use crate::features::parsing::ports::{Grammar, GrammarEngine, LanguagePlugin, ParsedAst};

/// Grammar backed by a tree-sitter language plugin
pub struct TreeSitterGrammar<P: LanguagePlugin> {
    plugin: Arc<P>,
}

impl<P: LanguagePlugin> TreeSitterGrammar<P> {
    pub fn new(plugin: P) -> Self {
        Self {
            plugin: Arc::new(plugin),
        }
    }

    pub fn plugin(&self) -> &P {
        &self.plugin
    }
}

impl<P: LanguagePlugin> Grammar for TreeSitterGrammar<P> {
    fn language(&self) -> &str {
        self.plugin.language_id().name()
    }

    fn load(&self, config: &ParserConfig) -> Result<Box<dyn GrammarEngine>> {
        let mut parser = TSParser::new();
        parser
            .set_language(&self.plugin.tree_sitter_language())
            .map_err(|e| CodegraphError::initialization(self.language(), e.to_string()))?;
        if config.timeout_micros > 0 {
            parser.set_timeout_micros(config.timeout_micros);
        }
        debug!(
            "Loaded tree-sitter grammar for {} (timeout: {}us)",
            self.language(),
            config.timeout_micros
        );

        Ok(Box::new(TreeSitterEngine {
            parser,
            plugin: Arc::clone(&self.plugin),
            options: BuildOptions::from(config),
        }))
    }
}

/// Tree-sitter parser bound to one language
pub struct TreeSitterEngine<P: LanguagePlugin> {
    parser: TSParser,
    plugin: Arc<P>,
    options: BuildOptions,
}

impl<P: LanguagePlugin> GrammarEngine for TreeSitterEngine<P> {
    fn parse(&mut self, source: &str) -> Result<ParsedAst> {
        let Some(tree) = self.parser.parse(source, None) else {
            // timed out; discard the partial state so the next call starts fresh
            self.parser.reset();
            warn!(
                "tree-sitter gave up on {} source ({} bytes)",
                self.plugin.language_id(),
                source.len()
            );
            return Err(CodegraphError::parse_error(
                "tree-sitter returned no tree (timeout exceeded)",
            ));
        };

        AstBuilder::new(&*self.plugin, source, self.options).build(&tree)
    }
}
