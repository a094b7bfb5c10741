//! Tracing subscriber setup for hosts that want the store's events on stdout.

use tracing::Level;

/// Install a `fmt` subscriber at `level`.
///
/// Only the first call in a process installs anything; later calls are
/// reported at debug level and otherwise ignored.
pub fn init(level: Level) {
    let result = tracing_subscriber::fmt().with_max_level(level).with_target(false).try_init();
    if let Err(e) = result {
        tracing::debug!(error = %e, "tracing subscriber already installed");
    }
}
