//! Common error types shared across crates.

use thiserror::Error;

/// Top-level error type.
///
/// Variants map to process exit codes:
/// - [`Error::InvalidInput`] → 1
/// - [`Error::RandomSource`] → 70 (`EX_SOFTWARE`)
/// - [`Error::Io`] → 74 (`EX_IOERR`)
#[derive(Debug, Error)]
pub enum Error {
    /// The supplied byte count is not a non-negative integer, or exceeds the configured maximum.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The OS random source could not supply the requested bytes.
    #[error("random source failure: {0}")]
    RandomSource(String),

    /// Writing to the output stream failed.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Returns the process exit code that should be used for this error.
    pub fn exit_code(&self) -> u8 {
        match self {
            Error::InvalidInput(_) => 1,
            Error::RandomSource(_) => 70,
            Error::Io(_) => 74,
        }
    }
}
