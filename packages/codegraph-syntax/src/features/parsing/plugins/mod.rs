//! Language plugins
//!
//! Each language has its own plugin implementing the LanguagePlugin trait.
//! Python, Java, TypeScript (and JavaScript), Kotlin, Rust, Go.

pub mod go;
pub mod java;
pub mod kotlin;
pub mod python;
pub mod rust_lang;
pub mod typescript;

use std::sync::Arc;

pub use go::{GoParser, GoPlugin};
pub use java::{JavaParser, JavaPlugin};
pub use kotlin::{KotlinParser, KotlinPlugin};
pub use python::{PythonParser, PythonPlugin};
pub use rust_lang::{RustParser, RustPlugin};
pub use typescript::{TypeScriptParser, TypeScriptPlugin};

use crate::config::ParserConfig;
use crate::features::parsing::ports::{LanguageId, LanguageParser};

/// Create an uninitialized adapter for `language`
pub fn create_parser(language: LanguageId, config: ParserConfig) -> Arc<dyn LanguageParser> {
    match language {
        LanguageId::Python => Arc::new(PythonPlugin::parser(config)),
        LanguageId::Java => Arc::new(JavaPlugin::parser(config)),
        LanguageId::TypeScript => Arc::new(TypeScriptPlugin::parser(config)),
        LanguageId::JavaScript => Arc::new(TypeScriptPlugin::javascript_parser(config)),
        LanguageId::Kotlin => Arc::new(KotlinPlugin::parser(config)),
        LanguageId::Rust => Arc::new(RustPlugin::parser(config)),
        LanguageId::Go => Arc::new(GoPlugin::parser(config)),
    }
}

/// Create the JSX-dialect adapter for `language`, if it has one
pub fn create_jsx_parser(
    language: LanguageId,
    config: ParserConfig,
) -> Option<Arc<dyn LanguageParser>> {
    match language {
        LanguageId::TypeScript => Some(Arc::new(TypeScriptPlugin::tsx_parser(config))),
        LanguageId::JavaScript => Some(Arc::new(TypeScriptPlugin::jsx_parser(config))),
        _ => None,
    }
}
