//! Tracing setup for the benchmark binaries.
//!
//! Diagnostics go to stderr only; stdout carries the report. The filter
//! comes from `RUST_LOG` and is `off` when unset.

use tracing_subscriber::EnvFilter;

pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("off"));
    // Ignore the error if a subscriber is already installed (e.g. in tests).
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
