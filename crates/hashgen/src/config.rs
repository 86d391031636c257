//! Configuration loading and validation for the token generator.
//!
//! Every value is optional; with no `HASHGEN_*` variables set the binary
//! generates 55-byte tokens and pauses one second after each console line.

use std::time::Duration;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::token::generator::DEFAULT_BYTE_COUNT;

/// Validated token generator configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Byte count used when no argument is given.
    #[serde(default = "default_byte_count")]
    pub default_byte_count: usize,

    /// Largest byte count accepted from the command line.
    #[serde(default = "default_max_byte_count")]
    pub max_byte_count: usize,

    /// Pause after each console log line, in milliseconds.
    #[serde(default = "default_log_pause_ms")]
    pub log_pause_ms: u64,

    /// Tracing log level used when `RUST_LOG` is unset.
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_byte_count() -> usize {
    DEFAULT_BYTE_COUNT
}
fn default_max_byte_count() -> usize {
    65_536
}
fn default_log_pause_ms() -> u64 {
    1_000
}
fn default_log_level() -> String {
    "warn".into()
}

impl Config {
    /// Load and validate configuration from `HASHGEN_*` environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable cannot be parsed or the values are inconsistent.
    pub fn from_env() -> Result<Self> {
        let cfg = config::Config::builder()
            .add_source(config::Environment::with_prefix("HASHGEN"))
            .build()
            .context("failed to build hashgen configuration")?;

        let c: Config = cfg
            .try_deserialize()
            .context("failed to deserialise hashgen configuration")?;

        c.validate()?;
        Ok(c)
    }

    /// Pause applied by the console logger.
    pub fn log_pause(&self) -> Duration {
        Duration::from_millis(self.log_pause_ms)
    }

    fn validate(&self) -> Result<()> {
        if self.max_byte_count == 0 {
            anyhow::bail!("HASHGEN_MAX_BYTE_COUNT must be > 0");
        }
        if self.default_byte_count > self.max_byte_count {
            anyhow::bail!(
                "HASHGEN_DEFAULT_BYTE_COUNT ({}) exceeds HASHGEN_MAX_BYTE_COUNT ({})",
                self.default_byte_count,
                self.max_byte_count
            );
        }
        if self.log_level.trim().is_empty() {
            anyhow::bail!("HASHGEN_LOG_LEVEL must not be empty");
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_byte_count: default_byte_count(),
            max_byte_count: default_max_byte_count(),
            log_pause_ms: default_log_pause_ms(),
            log_level: default_log_level(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        assert_eq!(default_byte_count(), 55);
        assert_eq!(default_max_byte_count(), 65_536);
        assert_eq!(default_log_pause_ms(), 1_000);
        assert_eq!(default_log_level(), "warn");
        assert_eq!(Config::default().log_pause(), Duration::from_secs(1));
    }

    #[test]
    fn validate_accepts_defaults() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn validate_rejects_zero_max() {
        let cfg = Config {
            default_byte_count: 0,
            max_byte_count: 0,
            ..Config::default()
        };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn validate_rejects_default_above_max() {
        let cfg = Config {
            default_byte_count: 64,
            max_byte_count: 32,
            ..Config::default()
        };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn validate_rejects_empty_log_level() {
        let cfg = Config {
            log_level: "  ".into(),
            ..Config::default()
        };
        assert!(cfg.validate().is_err());
    }
}
