//! Language parser adapter
//!
//! Wraps one [`Grammar`] behind the shared lifecycle contract. Lifecycle
//! transitions and engine use are serialized by an async mutex; the current
//! phase is mirrored in a `RwLock` so it can be read without awaiting.
//!
//! Concurrent `parse` calls on one adapter are safe; they run one at a time.

use std::time::Instant;

use async_trait::async_trait;
use parking_lot::RwLock;
use tokio::sync::Mutex;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use super::lifecycle::{AdapterPhase, LifecycleEvent};
use crate::config::ParserConfig;
use crate::errors::{CodegraphError, Result};
use crate::features::parsing::domain::SyntaxTree;
use crate::features::parsing::ports::{Grammar, GrammarEngine, LanguageParser};
use crate::shared::constants::messages::EMPTY_SOURCE;

type EngineSlot = Option<Box<dyn GrammarEngine>>;

pub struct LanguageParserAdapter<G: Grammar> {
    grammar: G,
    config: ParserConfig,
    phase: RwLock<AdapterPhase>,
    engine: Mutex<EngineSlot>,
}

impl<G: Grammar> LanguageParserAdapter<G> {
    pub fn new(grammar: G) -> Self {
        Self::with_config(grammar, ParserConfig::default())
    }

    pub fn with_config(grammar: G, config: ParserConfig) -> Self {
        Self {
            grammar,
            config,
            phase: RwLock::new(AdapterPhase::Uninitialized),
            engine: Mutex::new(None),
        }
    }

    pub fn grammar(&self) -> &G {
        &self.grammar
    }

    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    fn advance(&self, event: LifecycleEvent) -> Result<AdapterPhase> {
        let mut phase = self.phase.write();
        let next = phase.transition(event).map_err(|err| {
            if err.from.is_terminal() {
                CodegraphError::disposed(self.grammar.language())
            } else {
                CodegraphError::invalid_argument(err.to_string())
            }
        })?;
        debug!(
            "{} parser: {} -> {} ({:?})",
            self.grammar.language(),
            *phase,
            next,
            event
        );
        *phase = next;
        Ok(next)
    }

    /// Initialize while the caller holds the engine lock
    fn initialize_locked(&self, slot: &mut EngineSlot, cancel: &CancellationToken) -> Result<()> {
        match self.phase() {
            AdapterPhase::Disposed => return Err(CodegraphError::disposed(self.language())),
            AdapterPhase::Initialized if slot.is_some() => return Ok(()),
            // a parse future dropped mid-call took the engine with it
            AdapterPhase::Initialized => {
                self.advance(LifecycleEvent::EngineLost)?;
            }
            // only a load that unwound can leave this phase behind the lock
            AdapterPhase::Initializing => {
                warn!("{} grammar load was interrupted; retrying", self.language());
                self.advance(LifecycleEvent::InitializeFailed)?;
            }
            AdapterPhase::Uninitialized => {}
        }
        if cancel.is_cancelled() {
            return Err(CodegraphError::Cancelled);
        }

        self.advance(LifecycleEvent::BeginInitialize)?;
        let started = Instant::now();

        match self.grammar.load(&self.config) {
            Ok(engine) => {
                if cancel.is_cancelled() {
                    drop(engine);
                    self.advance(LifecycleEvent::InitializeFailed)?;
                    debug!("{} parser initialization cancelled", self.language());
                    return Err(CodegraphError::Cancelled);
                }
                *slot = Some(engine);
                self.advance(LifecycleEvent::InitializeSucceeded)?;
                info!(
                    "{} parser initialized in {:?}",
                    self.language(),
                    started.elapsed()
                );
                Ok(())
            }
            Err(err) => {
                warn!("{} grammar failed to load: {}", self.language(), err);
                self.advance(LifecycleEvent::InitializeFailed)?;
                Err(err)
            }
        }
    }

    fn validate_source(&self, source: &str) -> Result<()> {
        if source.is_empty() {
            return Err(CodegraphError::parse_error(EMPTY_SOURCE));
        }
        let limit = self.config.max_source_bytes;
        if limit > 0 && source.len() > limit {
            return Err(CodegraphError::parse_error(format!(
                "Source is {} bytes, limit is {}",
                source.len(),
                limit
            )));
        }
        Ok(())
    }
}

#[async_trait]
impl<G: Grammar> LanguageParser for LanguageParserAdapter<G> {
    fn language(&self) -> &str {
        self.grammar.language()
    }

    fn phase(&self) -> AdapterPhase {
        *self.phase.read()
    }

    async fn initialize(&self, cancel: &CancellationToken) -> Result<()> {
        let mut slot = self.engine.lock().await;
        self.initialize_locked(&mut slot, cancel)
    }

    async fn parse(
        &self,
        source: &str,
        file_path: Option<&str>,
        cancel: &CancellationToken,
    ) -> Result<SyntaxTree> {
        if self.phase().is_terminal() {
            return Err(CodegraphError::disposed(self.language()));
        }

        let mut slot = self.engine.lock().await;
        self.initialize_locked(&mut slot, cancel)?;
        self.validate_source(source)?;
        if cancel.is_cancelled() {
            return Err(CodegraphError::Cancelled);
        }

        let Some(mut engine) = slot.take() else {
            return Err(CodegraphError::initialization(
                self.language(),
                "engine unavailable",
            ));
        };
        let owned = source.to_owned();
        let started = Instant::now();

        let joined = tokio::task::spawn_blocking(move || {
            let result = engine.parse(&owned);
            (engine, result)
        })
        .await;

        let parsed = match joined {
            Ok((engine, result)) => {
                *slot = Some(engine);
                result
            }
            Err(join_err) => {
                warn!("{} engine lost during parse: {}", self.language(), join_err);
                self.advance(LifecycleEvent::EngineLost)?;
                return Err(CodegraphError::parse_error(format!(
                    "parser engine failed: {}",
                    join_err
                )));
            }
        };

        let parsed = parsed.map_err(|err| {
            warn!(
                "{} parse failed for {}: {}",
                self.language(),
                file_path.unwrap_or("<memory>"),
                err
            );
            match err {
                CodegraphError::Parse(_) => err,
                other => CodegraphError::parse_error(other.to_string()),
            }
        })?;

        if cancel.is_cancelled() {
            debug!("{} parse cancelled after engine returned", self.language());
            return Err(CodegraphError::Cancelled);
        }

        let tree = SyntaxTree::new(
            parsed.arena,
            parsed.root,
            source,
            file_path.map(str::to_string),
            self.language(),
        )
        .map_err(|err| CodegraphError::parse_error(err.to_string()))?;

        debug!(
            "{} parsed {} in {:?}: {} errors",
            self.language(),
            file_path.unwrap_or("<memory>"),
            started.elapsed(),
            tree.errors().len()
        );
        Ok(tree)
    }

    async fn dispose(&self) {
        let mut slot = self.engine.lock().await;
        if self.phase().is_terminal() {
            return;
        }
        let released = slot.take().is_some();
        if let Err(err) = self.advance(LifecycleEvent::Dispose) {
            warn!("{} parser dispose: {}", self.language(), err);
        }
        info!(
            "{} parser disposed (engine released: {})",
            self.language(),
            released
        );
    }
}
