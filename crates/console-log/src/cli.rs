use clap::Parser;
use common::Severity;

/// Print one colored log line to stdout.
#[derive(Debug, Parser)]
#[clap(version, about)]
pub struct Cli {
    /// Severity tag: info, success, warning or error. Unknown tags print as info.
    #[arg(short, long, default_value = "info")]
    pub severity: Severity,

    /// Message to print.
    pub message: String,
}
