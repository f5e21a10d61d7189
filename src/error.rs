//! Error type of the crate.
//!
//! Rendering never fails: unknown identifiers and unreadable colors
//! degrade to empty swatch lists.  Errors only come out of parsing
//! color strings and loading configurations.

use thiserror::Error;

/// Errors returned when parsing colors or loading configurations.
#[derive(Error, Debug)]
pub enum Error {
    /// The string is not a CSS color this crate understands.
    #[error("invalid color “{0}”")]
    InvalidColor(String),

    /// Malformed JSON configuration.
    #[error("invalid configuration: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O error while reading a configuration.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
