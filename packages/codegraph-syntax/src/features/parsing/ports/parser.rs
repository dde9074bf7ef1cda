//! Parser port (interface)
//!
//! Defines the lifecycle contract every language adapter honors.

use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

use crate::errors::Result;
use crate::features::parsing::domain::SyntaxTree;
use crate::features::parsing::infrastructure::AdapterPhase;

/// Language parser adapter
///
/// Lifecycle: `Uninitialized → Initializing → Initialized → Disposed`.
/// `parse` initializes lazily; after `dispose` every call fails with
/// `ObjectDisposed`.
#[async_trait]
pub trait LanguageParser: Send + Sync {
    /// Language name
    fn language(&self) -> &str;

    /// Current lifecycle phase
    fn phase(&self) -> AdapterPhase;

    fn is_initialized(&self) -> bool {
        self.phase() == AdapterPhase::Initialized
    }

    /// Load the grammar; a no-op once initialized
    async fn initialize(&self, cancel: &CancellationToken) -> Result<()>;

    /// Parse `source` into a syntax tree
    async fn parse(
        &self,
        source: &str,
        file_path: Option<&str>,
        cancel: &CancellationToken,
    ) -> Result<SyntaxTree>;

    /// Release the engine; idempotent
    async fn dispose(&self);
}
