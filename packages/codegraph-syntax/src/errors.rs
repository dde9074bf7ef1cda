//! Error types for codegraph-syntax
//!
//! Provides unified error handling across the crate.

use thiserror::Error;

use crate::config::ConfigError;

/// Main error type for codegraph-syntax operations
#[derive(Debug, Error)]
pub enum CodegraphError {
    /// A required argument was missing or referenced something that does not exist
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The adapter was used after `dispose()`
    #[error("Parser for '{language}' has been disposed")]
    ObjectDisposed { language: String },

    /// Parse error (validation or engine failure)
    #[error("Parse error: {0}")]
    Parse(String),

    /// Grammar load failed; the adapter stays uninitialized
    #[error("Failed to initialize {language} grammar: {message}")]
    Initialization { language: String, message: String },

    /// The caller's cancellation token fired
    #[error("Operation cancelled")]
    Cancelled,

    /// No adapter registered for a language name or file extension
    #[error("Unsupported language: {0}")]
    UnsupportedLanguage(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl CodegraphError {
    /// Create a parse error
    pub fn parse_error(msg: impl Into<String>) -> Self {
        CodegraphError::Parse(msg.into())
    }

    /// Create an invalid argument error
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        CodegraphError::InvalidArgument(msg.into())
    }

    /// Create a disposed error for the given language
    pub fn disposed(language: impl Into<String>) -> Self {
        CodegraphError::ObjectDisposed {
            language: language.into(),
        }
    }

    /// Create an initialization error for the given language
    pub fn initialization(language: impl Into<String>, message: impl Into<String>) -> Self {
        CodegraphError::Initialization {
            language: language.into(),
            message: message.into(),
        }
    }

    /// Lifecycle misuse is a caller bug rather than a data problem
    pub fn is_lifecycle_error(&self) -> bool {
        matches!(self, CodegraphError::ObjectDisposed { .. })
    }
}

/// Result type alias for codegraph-syntax operations
pub type Result<T> = std::result::Result<T, CodegraphError>;
