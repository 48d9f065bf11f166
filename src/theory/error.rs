//! Error types for music-theory lookups.

use thiserror::Error;

/// An invalid name passed to a theory function.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TheoryError {
    #[error("unknown note: {0}")]
    UnknownNote(String),
    #[error("unknown scale type: {0}")]
    UnknownScaleType(String),
    #[error("unknown chord type: {0}")]
    UnknownChordType(String),
    #[error("bassline length {0} is more bars than can be generated")]
    TooManyBars(usize),
}
