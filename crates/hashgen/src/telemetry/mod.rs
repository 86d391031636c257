//! Telemetry initialisation for the token generator.
//!
//! Structured JSON diagnostics go to stderr. Stdout is reserved for the token
//! and console log lines. Token values are never logged.

use anyhow::Result;
use tracing_subscriber::EnvFilter;

/// Initialise the tracing subscriber at the configured log level.
///
/// Events are written to stderr because stdout carries the token itself,
/// which callers capture verbatim. `RUST_LOG` takes precedence over
/// `log_level` when set.
///
/// # Errors
///
/// Returns an error if the subscriber has already been set.
pub fn init(log_level: &str) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_level));

    tracing_subscriber::fmt()
        .json()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to initialise hashgen tracing subscriber: {e}"))
}
