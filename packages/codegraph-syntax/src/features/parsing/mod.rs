//! Parsing Feature
//!
//! Generic AST model plus per-language parser adapters.
//!
//! ## Structure
//! - `domain/` - AstArena/AstNode, SyntaxTree, diagnostics, metrics, visitor
//! - `ports/` - LanguageParser, Grammar, LanguagePlugin, TreeConverter traits
//! - `application/` - ParserRegistry, ParseFileUseCase
//! - `infrastructure/` - Adapter lifecycle, tree-sitter grammar and engine
//! - `plugins/` - Language-specific plugins (Python, Java, TypeScript, etc.)

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod plugins;
pub mod ports;

// Re-exports
pub use application::{ParseFileUseCase, ParserRegistry};
pub use domain::{
    AstArena, AstNode, AstVisitor, NodeData, NodeId, Severity, SyntaxError, SyntaxTree,
    SyntaxTreeMetrics,
};
pub use infrastructure::{AdapterPhase, LanguageParserAdapter, TreeSitterGrammar};
pub use plugins::{
    create_jsx_parser, create_parser, GoParser, GoPlugin, JavaParser, JavaPlugin, KotlinParser,
    KotlinPlugin, PythonParser, PythonPlugin, RustParser, RustPlugin, TypeScriptParser,
    TypeScriptPlugin,
};
pub use ports::{
    Grammar, GrammarEngine, LanguageId, LanguageParser, LanguagePlugin, ParsedAst, TreeConverter,
};
