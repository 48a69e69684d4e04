//! Shared helpers for integration tests

#![allow(dead_code)]

use std::sync::Once;

use netguard_console::models::{Agent, Alert};
use netguard_console::provider::{FixtureProvider, RecordProvider};

static INIT: Once = Once::new();

/// Initialize tracing once for the whole test binary
pub fn init_tracing() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "netguard_console=debug".into()),
            )
            .with_test_writer()
            .try_init();
    });
}

/// The console's agent fixture snapshot (ids 003, 004, 008)
pub fn fixture_agents() -> Vec<Agent> {
    FixtureProvider::default().agents().unwrap()
}

/// The console's alert fixture snapshot
pub fn fixture_alerts() -> Vec<Alert> {
    FixtureProvider::default().alerts().unwrap()
}
