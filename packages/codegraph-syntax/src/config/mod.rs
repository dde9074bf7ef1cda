//! Parser configuration
//!
//! Two-tier configuration:
//! - Level 1: Preset - one-liner defaults
//! - Level 2: Builder / YAML overrides for individual knobs
//!
//! # Examples
//!
//! ```rust,ignore
//! use codegraph_syntax::config::{ParserConfig, Preset};
//!
//! let config = ParserConfig::preset(Preset::Fast).build()?;
//!
//! let config = ParserConfig::preset(Preset::Balanced)
//!     .include_anonymous_nodes(true)
//!     .timeout_micros(50_000)
//!     .build()?;
//!
//! let config = ParserConfig::from_yaml("parser.yaml")?;
//! ```

pub mod error;
pub mod io;
pub mod parser_config;
pub mod preset;
pub mod validation;

// Re-exports
pub use error::{ConfigError, ConfigResult};
pub use io::{ConfigExportV1, ParserOverrides};
pub use parser_config::ParserConfig;
pub use preset::Preset;
pub use validation::Validatable;
