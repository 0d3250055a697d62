//! Tracing subscriber setup shared by both binaries.
//!
//! Logs go to stderr; stdout belongs to the forwarded binary (launcher) or
//! to the JSON report (hook).

use tracing_subscriber::EnvFilter;

/// Environment variable holding `EnvFilter` directives.
pub const LOG_ENV_VAR: &str = "ZIGX_LOG";

/// Directive used when [`LOG_ENV_VAR`] is unset or invalid.
pub const DEFAULT_DIRECTIVE: &str = "warn";

/// Build the filter from `ZIGX_LOG`, falling back to `default_directive`.
pub fn env_filter(default_directive: &str) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new(default_directive))
}

/// Install the global subscriber. A second call is a no-op.
pub fn init() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(DEFAULT_DIRECTIVE))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
