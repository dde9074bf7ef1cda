//! Adapter lifecycle state machine
//!
//! ```text
//! Uninitialized ──BeginInitialize──▶ Initializing ──InitializeSucceeded──▶ Initialized
//!       ▲                                 │                                     │
//!       └──────────InitializeFailed───────┘◀────────────EngineLost──────────────┘
//!
//! any ──Dispose──▶ Disposed (terminal)
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdapterPhase {
    Uninitialized,
    Initializing,
    Initialized,
    Disposed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LifecycleEvent {
    BeginInitialize,
    InitializeSucceeded,
    InitializeFailed,
    /// The engine was lost mid-call (panic inside the native parse)
    EngineLost,
    Dispose,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("illegal lifecycle transition: {event:?} in phase {from:?}")]
pub struct IllegalTransition {
    pub from: AdapterPhase,
    pub event: LifecycleEvent,
}

impl AdapterPhase {
    /// Guarded transition function
    pub fn transition(self, event: LifecycleEvent) -> Result<AdapterPhase, IllegalTransition> {
        use AdapterPhase::*;
        use LifecycleEvent::*;

        match (self, event) {
            (_, Dispose) => Ok(Disposed),
            (Uninitialized, BeginInitialize) => Ok(Initializing),
            (Initializing, InitializeSucceeded) => Ok(Initialized),
            (Initializing, InitializeFailed) => Ok(Uninitialized),
            (Initialized, EngineLost) => Ok(Uninitialized),
            (from, event) => Err(IllegalTransition { from, event }),
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, AdapterPhase::Disposed)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AdapterPhase::Uninitialized => "uninitialized",
            AdapterPhase::Initializing => "initializing",
            AdapterPhase::Initialized => "initialized",
            AdapterPhase::Disposed => "disposed",
        }
    }
}

impl Default for AdapterPhase {
    fn default() -> Self {
        AdapterPhase::Uninitialized
    }
}

impl std::fmt::Display for AdapterPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
