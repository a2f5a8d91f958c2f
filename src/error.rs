//! Error types for marklink operations.
//!
//! The transformer itself is total; these errors come from reading input
//! and writing output around it.

use thiserror::Error;

/// Errors that can occur while reading input or writing rendered HTML.
#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[cfg(feature = "serde")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

pub type Result<T> = std::result::Result<T, Error>;
