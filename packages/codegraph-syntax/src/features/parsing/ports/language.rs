//! Language identifiers

use serde::{Deserialize, Serialize};

/// Languages with a bundled grammar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LanguageId {
    Python,
    Java,
    TypeScript,
    JavaScript,
    Kotlin,
    Rust,
    Go,
}

impl LanguageId {
    pub const ALL: [LanguageId; 7] = [
        LanguageId::Python,
        LanguageId::Java,
        LanguageId::TypeScript,
        LanguageId::JavaScript,
        LanguageId::Kotlin,
        LanguageId::Rust,
        LanguageId::Go,
    ];

    /// Get language name as string
    pub fn name(&self) -> &'static str {
        match self {
            LanguageId::Python => "python",
            LanguageId::Java => "java",
            LanguageId::TypeScript => "typescript",
            LanguageId::JavaScript => "javascript",
            LanguageId::Kotlin => "kotlin",
            LanguageId::Rust => "rust",
            LanguageId::Go => "go",
        }
    }

    /// Resolve a language name, case-insensitively
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|id| id.name().eq_ignore_ascii_case(name))
    }

    /// Get language from file extension
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "py" | "pyi" => Some(LanguageId::Python),
            "java" => Some(LanguageId::Java),
            "ts" | "tsx" | "mts" | "cts" => Some(LanguageId::TypeScript),
            "js" | "jsx" | "mjs" | "cjs" => Some(LanguageId::JavaScript),
            "kt" | "kts" => Some(LanguageId::Kotlin),
            "rs" => Some(LanguageId::Rust),
            "go" => Some(LanguageId::Go),
            _ => None,
        }
    }

    /// Get language from a file path's extension
    pub fn from_path(path: impl AsRef<std::path::Path>) -> Option<Self> {
        path.as_ref()
            .extension()
            .and_then(|e| e.to_str())
            .and_then(Self::from_extension)
    }

    /// Get supported file extensions
    pub fn extensions(&self) -> &'static [&'static str] {
        match self {
            LanguageId::Python => &["py", "pyi"],
            LanguageId::Java => &["java"],
            LanguageId::TypeScript => &["ts", "tsx", "mts", "cts"],
            LanguageId::JavaScript => &["js", "jsx", "mjs", "cjs"],
            LanguageId::Kotlin => &["kt", "kts"],
            LanguageId::Rust => &["rs"],
            LanguageId::Go => &["go"],
        }
    }

    /// Extensions whose files embed JSX markup
    pub fn jsx_extensions(&self) -> &'static [&'static str] {
        match self {
            LanguageId::TypeScript => &["tsx"],
            LanguageId::JavaScript => &["jsx"],
            _ => &[],
        }
    }

    /// Extensions parsed without JSX support
    pub fn plain_extensions(&self) -> &'static [&'static str] {
        match self {
            LanguageId::TypeScript => &["ts", "mts", "cts"],
            LanguageId::JavaScript => &["js", "mjs", "cjs"],
            other => other.extensions(),
        }
    }

    pub fn is_jsx_extension(&self, ext: &str) -> bool {
        self.jsx_extensions()
            .iter()
            .any(|e| e.eq_ignore_ascii_case(ext))
    }
}

impl std::fmt::Display for LanguageId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
