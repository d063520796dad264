//! Tracing subscriber setup
//!
//! `RUST_LOG` takes precedence; otherwise the filter from settings is used,
//! and `info` if that one does not parse.

use tracing_subscriber::EnvFilter;

/// Filter used when neither `RUST_LOG` nor settings provide a usable one
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Build the filter the subscriber will use
pub fn build_filter(settings_filter: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(settings_filter))
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER))
}

/// Install the global fmt subscriber
///
/// Logs go to stderr so stdout stays clean for board output and JSON events.
/// Calling this twice is harmless; the second install is ignored.
pub fn init_logging(settings_filter: &str) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(build_filter(settings_filter))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
