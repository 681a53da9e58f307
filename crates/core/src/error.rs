//! Error types for the memory game core.
//!
//! Game operations never fail; these cover the fallible edges around them
//! (the score store and injected board layouts).

use thiserror::Error;

/// Failure reading or writing the persistent score store.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Score file could not be read or written.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Score file is not a JSON object of keys to values.
    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// A stored value is not a decimal move count.
    #[error("Invalid value for {key}: {value:?}")]
    InvalidValue {
        /// Store key.
        key: String,
        /// Raw stored text.
        value: String,
    },
}

/// A face layout that cannot form a board.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LayoutError {
    #[error("expected {expected} cards for this difficulty, got {actual}")]
    WrongSize { expected: usize, actual: usize },

    #[error("face {face} appears {count} times (expected exactly 2)")]
    Unpaired { face: u8, count: usize },
}
