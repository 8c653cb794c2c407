//! Shared helpers for integration tests.

use std::sync::Once;

use cribrs::Card;
use tracing_subscriber::EnvFilter;

static INIT: Once = Once::new();

/// Installs a test subscriber once per test binary.
///
/// The filter comes from `TEST_LOG`, then `RUST_LOG`, defaulting to `warn`.
pub fn init_logging() {
    INIT.call_once(|| {
        let filter = std::env::var("TEST_LOG")
            .or_else(|_| std::env::var("RUST_LOG"))
            .map_or_else(|_| EnvFilter::new("warn"), EnvFilter::new);

        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .without_time()
            .try_init()
            .ok();
    });
}

/// Parses a card such as `"5H"`, panicking on bad input.
pub fn c(s: &str) -> Card {
    s.parse().unwrap_or_else(|err| panic!("bad card {s:?}: {err}"))
}

/// Parses a space separated list of cards.
pub fn cards(s: &str) -> Vec<Card> {
    s.split_whitespace().map(c).collect()
}
