//! Common types shared across `hashgen` crates: the error type and the
//! colored console logger.

pub mod console;
pub mod error;

pub use console::{Console, Severity};
pub use error::Error;
