//! Common test utilities for codegraph-syntax
//!
//! Shared fixtures, a scripted grammar and assertions for the integration
//! tests.

#![allow(dead_code)]

mod assertions;
mod fixtures;
mod grammar;

pub use assertions::*;
pub use fixtures::*;
pub use grammar::*;

use std::sync::Once;

static TRACING: Once = Once::new();

/// Install a test-writer subscriber once; honors `RUST_LOG`
pub fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
            )
            .with_test_writer()
            .try_init();
    });
}
