//! `hashgen` — print a random URL-safe token.
//!
//! Startup sequence:
//! 1. Load and validate [`Config`] from `HASHGEN_*` environment variables.
//! 2. Initialise structured JSON diagnostics on stderr.
//! 3. Parse the command line and generate the token onto stdout.

mod app;
mod cli;
mod config;
mod telemetry;
mod token;

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use common::Console;

use cli::Cli;
use config::Config;

fn main() -> Result<ExitCode> {
    // -----------------------------------------------------------------------
    // 1. Configuration
    // -----------------------------------------------------------------------
    let cfg = Config::from_env().map_err(|e| {
        // Telemetry is not yet up; write to stderr directly.
        eprintln!("ERROR: hashgen configuration invalid: {e}");
        e
    })?;

    // -----------------------------------------------------------------------
    // 2. Telemetry
    // -----------------------------------------------------------------------
    telemetry::init(&cfg.log_level)?;

    // -----------------------------------------------------------------------
    // 3. Token
    // -----------------------------------------------------------------------
    let cli = Cli::parse();
    let mut console = Console::stdout(cfg.log_pause());
    match app::run(&cli, &cfg, &mut std::io::stdout().lock(), &mut console) {
        Ok(status) => Ok(ExitCode::from(status)),
        Err(e) => {
            eprintln!("ERROR: {e:#}");
            Ok(ExitCode::from(app::exit_status(&e)))
        }
    }
}
