//! Parse file use case

use std::path::Path;
use std::sync::Arc;

use tokio_util::sync::CancellationToken;
use tracing::debug;

use super::registry::ParserRegistry;
use crate::errors::{CodegraphError, Result};
use crate::features::parsing::domain::SyntaxTree;

/// Parse file use case
pub struct ParseFileUseCase {
    registry: Arc<ParserRegistry>,
}

impl ParseFileUseCase {
    pub fn new(registry: Arc<ParserRegistry>) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &ParserRegistry {
        &self.registry
    }

    /// Read `path` from disk and parse it with the adapter for its extension
    pub async fn execute(
        &self,
        path: impl AsRef<Path>,
        cancel: &CancellationToken,
    ) -> Result<SyntaxTree> {
        let path = path.as_ref();
        let parser = self.registry.for_path(path)?;
        let source = tokio::fs::read_to_string(path).await?;
        let file_path = path.to_string_lossy().into_owned();
        debug!(
            "Parsing {} ({} bytes) as {}",
            file_path,
            source.len(),
            parser.language()
        );
        parser.parse(&source, Some(file_path.as_str()), cancel).await
    }

    /// Parse in-memory source, resolving the adapter from `file_path`
    pub async fn execute_source(
        &self,
        source: &str,
        file_path: &str,
        cancel: &CancellationToken,
    ) -> Result<SyntaxTree> {
        let parser = self.registry.for_path(file_path)?;
        parser.parse(source, Some(file_path), cancel).await
    }

    /// Execute for multiple `(path, source)` pairs; one result per file
    pub async fn execute_batch(
        &self,
        files: &[(String, String)],
        cancel: &CancellationToken,
    ) -> Vec<Result<SyntaxTree>> {
        let mut results = Vec::with_capacity(files.len());
        for (path, source) in files {
            if cancel.is_cancelled() {
                results.push(Err(CodegraphError::Cancelled));
                continue;
            }
            results.push(self.execute_source(source, path, cancel).await);
        }
        results
    }
}
