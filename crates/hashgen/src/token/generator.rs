//! Byte-count validation, random byte generation and URL-safe encoding.

use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};
use common::Error;
use rand::{rngs::OsRng, RngCore};

/// Byte count used when the caller supplies none.
pub const DEFAULT_BYTE_COUNT: usize = 55;

/// Parse an externally supplied byte count.
///
/// `None` yields `default`. Surrounding whitespace is ignored; anything else
/// that is not a plain base-10 integer in `0..=max` is rejected.
///
/// # Errors
///
/// Returns [`Error::InvalidInput`] for non-numeric input (signs, fractions and
/// exponents included) or a value above `max`.
pub fn parse_byte_count(raw: Option<&str>, default: usize, max: usize) -> Result<usize, Error> {
    let Some(raw) = raw else {
        return Ok(default);
    };
    let digits = raw.trim();
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(Error::InvalidInput("Character count should be numeric.".into()));
    }
    let count: usize = digits
        .parse()
        .map_err(|_| Error::InvalidInput(format!("Byte count {digits} is too large.")))?;
    if count > max {
        return Err(Error::InvalidInput(format!(
            "Byte count {count} exceeds the maximum of {max}."
        )));
    }
    Ok(count)
}

/// Generate a token from `byte_count` bytes of OS randomness.
///
/// # Errors
///
/// Returns [`Error::RandomSource`] if the OS random source fails. Callers
/// treat this as fatal.
pub fn generate(byte_count: usize) -> Result<String, Error> {
    let mut bytes = vec![0u8; byte_count];
    OsRng
        .try_fill_bytes(&mut bytes)
        .map_err(|e| Error::RandomSource(e.to_string()))?;
    let token = encode(&bytes);
    debug_assert_eq!(token.len(), encoded_len(byte_count));
    Ok(token)
}

/// URL-safe, unpadded base64 of `bytes`.
pub fn encode(bytes: &[u8]) -> String {
    URL_SAFE_NO_PAD.encode(bytes)
}

/// Length of the token produced for `byte_count` bytes: `ceil(4n / 3)`.
pub fn encoded_len(byte_count: usize) -> usize {
    (byte_count * 4).div_ceil(3)
}
