//! Error types for KbHelper

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The base-key token left after tag removal is not in the lexical table.
    #[error("Unknown key in shortcut descriptor: {0:?}")]
    UnknownKey(String),

    #[error("Shortcut descriptor has no base key: {0:?}")]
    EmptyDescriptor(String),
}

pub type Result<T> = std::result::Result<T, Error>;
