//! Subscriber setup for the crate's `tracing` events.
//!
//! The library only emits events. Binaries and tests that want to see them
//! install a subscriber once with one of these functions. `RUST_LOG`
//! overrides the default filter.

use tracing_subscriber::util::TryInitError;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn filter(verbose: bool) -> EnvFilter {
    let default = if verbose {
        "quantum_calc=debug,info"
    } else {
        "quantum_calc=info"
    };
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
}

/// Human-readable compact output. `verbose` turns on debug events from
/// this crate.
pub fn init_logger(verbose: bool) -> Result<(), TryInitError> {
    tracing_subscriber::registry()
        .with(filter(verbose))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .try_init()
}

/// One JSON object per event, for log collectors.
pub fn init_json_logger() -> Result<(), TryInitError> {
    tracing_subscriber::registry()
        .with(filter(false))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .json(),
        )
        .try_init()
}
