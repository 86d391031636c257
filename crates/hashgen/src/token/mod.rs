//! Random URL-safe token generation.
//!
//! # Token format
//!
//! ```text
//! base64url-no-pad(<byte_count random bytes from the OS CSPRNG>)
//! ```
//!
//! The alphabet is `[A-Za-z0-9-_]`; no `+`, `/` or `=` ever appears, so a token
//! can be embedded in URLs and file names without escaping.

pub mod generator;

pub use generator::{generate, parse_byte_count};
