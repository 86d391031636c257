//! `console-log` — print one colored console line, then pause.

mod cli;
mod config;

use anyhow::{Context, Result};
use clap::Parser;
use common::Console;

fn main() -> Result<()> {
    let cfg = config::Config::from_env().map_err(|e| {
        eprintln!("ERROR: console-log configuration invalid: {e}");
        e
    })?;

    let cli = cli::Cli::parse();
    Console::stdout(cfg.log_pause())
        .log(&cli.message, cli.severity)
        .context("failed to write log line")
}
