//! Grammar port
//!
//! A [`Grammar`] knows how to load a native parsing engine for one language;
//! the loaded [`GrammarEngine`] turns source text into an AST arena. Adapters
//! own the engine and drive its lifecycle.

use crate::config::ParserConfig;
use crate::errors::Result;
use crate::features::parsing::domain::{AstArena, NodeId};

/// Arena produced by one engine call, plus the id of its root
#[derive(Debug, Clone)]
pub struct ParsedAst {
    pub arena: AstArena,
    pub root: NodeId,
}

/// Grammar loader for one language
pub trait Grammar: Send + Sync + 'static {
    /// Language name reported on trees and errors
    fn language(&self) -> &str;

    /// Load the grammar and create an engine (the expensive, fallible step)
    fn load(&self, config: &ParserConfig) -> Result<Box<dyn GrammarEngine>>;
}

/// Loaded native engine; owned by exactly one adapter
pub trait GrammarEngine: Send {
    fn parse(&mut self, source: &str) -> Result<ParsedAst>;
}
