//! Tracing subscriber setup.
//!
//! Call once from the host before building the [`AppContext`]. Level
//! defaults are debug in development and info in release; `RUST_LOG`
//! overrides both.
//!
//! [`AppContext`]: super::AppContext

use tracing_subscriber::{fmt, EnvFilter};

fn default_directives() -> &'static str {
    if cfg!(debug_assertions) {
        "debug,reqwest=info,hyper=info"
    } else {
        "info"
    }
}

/// Install the global subscriber. Safe to call more than once; later calls
/// are no-ops.
pub fn init() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives()));

    let _ = fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_ansi(cfg!(not(test)))
        .try_init();
}
