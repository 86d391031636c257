//! Configuration for the console-log front end.

use std::time::Duration;

use anyhow::{Context, Result};
use serde::Deserialize;

/// Console-log configuration, read from `HASHGEN_*` environment variables.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Pause after the line is written, in milliseconds.
    #[serde(default = "default_log_pause_ms")]
    pub log_pause_ms: u64,
}

fn default_log_pause_ms() -> u64 {
    common::console::DEFAULT_PAUSE.as_millis() as u64
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        let cfg = config::Config::builder()
            .add_source(config::Environment::with_prefix("HASHGEN"))
            .build()
            .context("failed to build console-log configuration")?;

        cfg.try_deserialize()
            .context("failed to deserialise console-log configuration")
    }

    pub fn log_pause(&self) -> Duration {
        Duration::from_millis(self.log_pause_ms)
    }
}
