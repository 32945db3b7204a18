pub mod app;
pub mod config;
mod error;
pub mod model;
pub mod web;

// re-export
pub use app::{App, AppState};
pub use error::{Error, Result};

use tracing_subscriber::EnvFilter;

/// Compact, colored console output for local development.
pub fn init_dbg_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .compact()
        .init();
}

/// Plain, ANSI-free output suitable for log collectors.
pub fn init_production_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_ansi(false)
        .init();
}
