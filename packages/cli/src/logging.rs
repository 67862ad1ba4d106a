// ABOUTME: Tracing subscriber setup for the CLI
// ABOUTME: Logs go to stderr so report lines on stdout stay clean

use tracing_subscriber::EnvFilter;

/// Default filter when `RUST_LOG` is unset
pub const DEFAULT_LOG_FILTER: &str = "warn";

pub fn init_tracing(verbose: bool) {
    let default_filter = if verbose { "debug" } else { DEFAULT_LOG_FILTER };

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    // Ignored when a subscriber is already installed
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .try_init();
}
