//! Error types for plan persistence and configuration parsing.
//!
//! Classification and planning are total and never produce these.

use thiserror::Error;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised at the engine's I/O and configuration boundaries.
#[derive(Error, Debug)]
pub enum Error {
    /// Failed to read or write a plan or deck file.
    #[error("Failed to access file: {0}")]
    IoError(#[from] std::io::Error),

    /// A plan or deck could not be encoded or decoded as JSON.
    #[error("Plan serialization error: {0}")]
    SerializationError(String),

    /// A layout slot index outside 0-7.
    #[error("Invalid layout slot index: {0}")]
    InvalidSlot(u8),

    /// A placeholder-count list that is not eight non-negative integers.
    #[error("Invalid placeholder specification: {0}")]
    InvalidPlaceholderSpec(String),
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::SerializationError(e.to_string())
    }
}
