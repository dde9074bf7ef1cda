//! Parsing ports (interfaces)

mod converter;
mod grammar;
mod language;
mod language_plugin;
mod parser;

pub use converter::TreeConverter;
pub use grammar::{Grammar, GrammarEngine, ParsedAst};
pub use language::LanguageId;
pub use language_plugin::LanguagePlugin;
pub use parser::LanguageParser;
