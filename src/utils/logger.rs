//! Logging setup.

use std::sync::Once;
use tracing_subscriber::EnvFilter;

static INIT: Once = Once::new();

/// Initializes the global tracing subscriber
///
/// The level comes from `LOG_LEVEL` (or `RUST_LOG`), defaulting to `info`.
/// Safe to call more than once, only the first call installs the subscriber.
pub fn setup_logger() {
    INIT.call_once(|| {
        let filter = std::env::var("LOG_LEVEL")
            .map(|level| EnvFilter::new(level.to_lowercase()))
            .unwrap_or_else(|_| EnvFilter::new("info"));

        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .init();
    });
}
