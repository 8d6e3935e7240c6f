//! Logging initialization.

use tracing_subscriber::EnvFilter;

/// Initializes the tracing subscriber.
///
/// Defaults to `hamlog=warn`; the `RUST_LOG` environment variable overrides.
/// Output goes to stderr so it never interleaves with the interactive screen.
pub fn init_logging() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("hamlog=warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
