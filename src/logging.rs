//! Logging goes to stderr; stdout carries results only.

use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "warn,phish_check=info";

/// Initialize structured logging. `RUST_LOG` overrides the default filter.
pub fn init_logging() {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    // A second init (e.g. from tests) is harmless.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .try_init();
}
