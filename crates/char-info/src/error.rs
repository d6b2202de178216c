//! Error types for character lookups.

use std::result;

/// Errors that can occur when looking up a character.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("no character named '{0}'")]
    UnknownName(String),

    #[error("'{0}' is not a valid code point")]
    InvalidCodePoint(String),
}

pub type Result<T> = result::Result<T, Error>;
