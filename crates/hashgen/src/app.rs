//! Command execution, separated from process setup so it can run against
//! in-memory writers.

use std::io::Write;

use anyhow::{Context, Result};
use common::{Console, Error, Severity};
use tracing::debug;

use crate::cli::Cli;
use crate::config::Config;
use crate::token;

/// Exit status for a rejected byte count.
pub const EXIT_INVALID_INPUT: u8 = 1;

/// Resolve the byte count, generate a token and write it to `out` without a
/// trailing newline. Returns the process exit status.
///
/// An invalid byte count is reported on `console` at error severity and
/// yields [`EXIT_INVALID_INPUT`]; nothing is written to `out`.
///
/// # Errors
///
/// Random source and output failures are returned as fatal errors.
pub fn run<W: Write, L: Write>(
    cli: &Cli,
    cfg: &Config,
    out: &mut W,
    console: &mut Console<L>,
) -> Result<u8> {
    let byte_count = match token::parse_byte_count(
        cli.byte_count.as_deref(),
        cfg.default_byte_count,
        cfg.max_byte_count,
    ) {
        Ok(n) => n,
        Err(Error::InvalidInput(message)) => {
            debug!(input = ?cli.byte_count, "rejected byte count");
            // Logging is best-effort; the exit status carries the failure.
            let _ = console.log(&message, Severity::Error);
            return Ok(EXIT_INVALID_INPUT);
        }
        Err(e) => return Err(e.into()),
    };
    debug!(byte_count, "byte count resolved");

    let token = token::generate(byte_count).context("failed to generate token")?;
    debug!(len = token.len(), "token generated");

    out.write_all(token.as_bytes())
        .and_then(|()| out.flush())
        .map_err(Error::Io)
        .context("failed to write token")?;
    Ok(0)
}

/// Exit status for a fatal error returned by [`run`].
///
/// Errors carrying a [`common::Error`] use its exit code; anything else
/// exits with 1.
pub fn exit_status(err: &anyhow::Error) -> u8 {
    err.downcast_ref::<Error>().map_or(1, Error::exit_code)
}
