//! Structural diagnostics derived from error nodes

use serde::{Deserialize, Serialize};

use crate::shared::models::SourceLocation;

/// Diagnostic severity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Error => "error",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Read-only projection of an error-flagged node
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyntaxError {
    pub message: String,
    pub severity: Severity,
    pub location: Option<SourceLocation>,
    pub file_path: Option<String>,
}

impl std::fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(path) = &self.file_path {
            write!(f, "{}:", path)?;
        }
        if let Some(loc) = &self.location {
            write!(f, "{}: ", loc)?;
        } else if self.file_path.is_some() {
            f.write_str(" ")?;
        }
        write!(f, "{}: {}", self.severity, self.message)
    }
}
