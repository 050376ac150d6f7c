//! Diagnostic logging for the binary
//!
//! Logs go to stderr so stdout stays reserved for the confirmation message
//! and JSON output.

use tracing_subscriber::EnvFilter;

use crate::constants as C;

/// Install the global subscriber.
///
/// Filter directives come from `ORG_CAPTURE_LOG`; without it the level is
/// `warn`, or `debug` when `verbose` is set. Calling this twice is harmless.
pub fn init(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_env(C::ENV_LOG).unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
