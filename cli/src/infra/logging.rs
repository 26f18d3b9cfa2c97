//! Diagnostic logging via `tracing`.
//!
//! Progress notices are product output and go to stdout through
//! `crate::output`. Everything here goes to stderr, and the default filter is
//! `warn` so a normal run prints nothing extra.

use tracing_subscriber::EnvFilter;

/// Environment variable holding the filter directive, e.g. `GATE_LOG=debug`.
/// Falls back to `RUST_LOG`.
pub const LOG_ENV: &str = "GATE_LOG";

/// Default filter when neither variable is set.
const DEFAULT_FILTER: &str = "warn";

/// Build the filter from `GATE_LOG`, then `RUST_LOG`, then the default.
#[must_use]
pub fn filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Install the global subscriber. A second call is a no-op.
pub fn init() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter())
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
