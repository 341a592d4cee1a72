//! Logging setup for Folio
//!
//! All crates log through `tracing`. The shell calls [`init_logging`] once at
//! startup to install a formatted subscriber on stderr.
//!
//! # Environment Variables
//!
//! - `FOLIO_LOG=<filter>` - full `EnvFilter` directive, wins over everything
//! - `FOLIO_DEBUG=1` - shorthand for `debug` level

use std::sync::OnceLock;
use tracing_subscriber::EnvFilter;

/// Cached debug enabled state (checked once at startup)
static DEBUG_ENABLED: OnceLock<bool> = OnceLock::new();

/// Check if debug mode is enabled via `FOLIO_DEBUG`.
#[inline]
pub fn is_debug_enabled() -> bool {
    *DEBUG_ENABLED.get_or_init(|| {
        std::env::var("FOLIO_DEBUG")
            .map(|v| v == "1" || v.to_lowercase() == "true")
            .unwrap_or(false)
    })
}

/// Builds the filter used by [`init_logging`].
pub fn default_filter() -> EnvFilter {
    EnvFilter::try_from_env("FOLIO_LOG").unwrap_or_else(|_| {
        if is_debug_enabled() {
            EnvFilter::new("debug")
        } else {
            EnvFilter::new("info")
        }
    })
}

/// Installs the global tracing subscriber.
///
/// Returns an error if a subscriber is already installed; callers treat that
/// as informational.
pub fn init_logging() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(default_filter())
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow::anyhow!("logging already initialised: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_init_is_reported_not_panicked() {
        let first = init_logging();
        let second = init_logging();
        // Whichever test installed the subscriber first, the later call fails cleanly.
        assert!(first.is_ok() || second.is_err());
        assert!(second.is_err());
    }
}
