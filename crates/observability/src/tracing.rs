//! Tracing/logging initialization.

use tracing_subscriber::EnvFilter;

/// Initialize logging for the process with the standard `info` floor.
///
/// Safe to call multiple times; later calls are no-ops.
pub fn init() {
    init_with_default("info");
}

/// Initialize logging with an explicit default filter, still overridable
/// through `RUST_LOG`.
pub fn init_with_default(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    // JSON lines + timestamps, filter configurable via RUST_LOG.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .json()
        .with_timer(tracing_subscriber::fmt::time::SystemTime)
        .with_target(false)
        .try_init();
}
