use std::io;
use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "warn";

/// Installs a stderr subscriber filtered by `RUST_LOG` (default `warn`).
///
/// Stdout is reserved for demo output. Calling this more than once is a
/// no-op.
pub fn init() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}
