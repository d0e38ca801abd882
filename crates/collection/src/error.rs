//! Error types for the collection crate.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by collection construction and mutating operations.
///
/// Read-only lookups never produce these: a query that finds nothing
/// returns `None` (or an empty result) instead. Only construction against
/// missing or malformed storage, mutating lookups that miss, and
/// persistence I/O travel through this type.
#[derive(Error, Debug)]
pub enum CollectionError {
    /// The backing file did not exist when the collection was opened
    #[error("storage file not found: {}", path.display())]
    StorageNotFound { path: PathBuf },

    /// A remove or update matched no record by title
    #[error("no movie titled {title:?} in the collection")]
    MovieNotFound { title: String },

    /// I/O error while reading or rewriting the backing file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The backing document could not be parsed as a movie list
    #[error("malformed storage document: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, CollectionError>;
