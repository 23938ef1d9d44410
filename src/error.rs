//! Error types for Booky
//!
//! Provides a unified error type for all operations.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias using BookyError
pub type Result<T> = std::result::Result<T, BookyError>;

/// Unified error type for Booky operations
#[derive(Debug, Error)]
pub enum BookyError {
    // -------------------------------------------------------------------------
    // Input Errors
    // -------------------------------------------------------------------------
    /// A required field was empty after trimming
    #[error("Validation error: `{field}` must not be empty")]
    Validation { field: &'static str },

    /// A 1-based position outside `1..=size`
    #[error("Position {position} is out of range (library holds {size} book(s))")]
    OutOfRange { position: usize, size: usize },

    // -------------------------------------------------------------------------
    // Persistence Errors
    // -------------------------------------------------------------------------
    /// A persisted record or document could not be decoded
    #[error("Deserialization error: {0}")]
    Deserialization(String),

    /// Reading or writing the library file failed
    #[error("Persistence error on {}: {source}", .path.display())]
    Persistence {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl BookyError {
    /// Wrap an I/O failure with the path it happened on
    pub(crate) fn persistence(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Persistence {
            path: path.into(),
            source,
        }
    }
}
