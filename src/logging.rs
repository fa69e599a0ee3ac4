//! Logging configuration for sqlsheet.
//!
//! Initializes process-wide tracing output once at program start; the core
//! components log through the `tracing` macros rather than holding logger
//! state themselves.

use tracing_subscriber::EnvFilter;

/// Initializes logging to stderr.
///
/// The filter defaults to `info` and can be overridden with `RUST_LOG`.
pub fn init_stderr_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();
}
