//! Structured log output for the store and the self-check binary.

use tracing_subscriber::EnvFilter;

/// Install the global subscriber: JSON lines, level filter taken from
/// `RUST_LOG` (falling back to `info`), targets suppressed since the
/// workspace is small enough that the message text identifies the source.
///
/// Calling this when a subscriber is already installed is a no-op, so tests
/// and the binary can both call it freely.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .json()
        .with_timer(tracing_subscriber::fmt::time::SystemTime)
        .with_target(false)
        .try_init();
}
