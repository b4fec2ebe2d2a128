//! Diagnostic logging setup.

use tracing_subscriber::EnvFilter;

use crate::config::DEBUG_VAR;

/// Installs a stderr subscriber when `TODO_HISTORY_DEBUG` is set.
///
/// `RUST_LOG` overrides the default `todo_history=debug` filter. Call once,
/// from `main`.
pub fn init() {
    if std::env::var_os(DEBUG_VAR).is_none() {
        return;
    }
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("todo_history=debug"));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();
}
