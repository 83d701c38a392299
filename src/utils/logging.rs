//! Tracing initialization for the console
//!
//! Initializes a `tracing` subscriber with env-filter support so log levels
//! can be tuned per module via `RUST_LOG` without code changes.

use tracing_subscriber::EnvFilter;

/// Initialize the global tracing subscriber.
///
/// `RUST_LOG` takes precedence; `default_directive` applies when the variable
/// is absent or invalid (e.g. `"poa_console=debug,info"`). Calling this more
/// than once is a no-op.
pub fn init_tracing(default_directive: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init();
}
