//! Reading and rewriting the backing JSON document.
//!
//! The document is one JSON array of movie objects. It is read in full
//! when a collection is opened and rewritten in full after every mutation,
//! so the file always mirrors the in-memory state exactly. There is no
//! append path and no partial update.

use crate::error::{CollectionError, Result};
use crate::types::Movie;
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use std::fs;
use std::path::Path;
use tracing::debug;

/// Load the full record list from `path`.
///
/// Fails with [`CollectionError::StorageNotFound`] if `path` is not an
/// existing file, and with [`CollectionError::Malformed`] if the content
/// does not parse as a movie list.
pub fn read_movies(path: &Path) -> Result<Vec<Movie>> {
    if !path.is_file() {
        return Err(CollectionError::StorageNotFound {
            path: path.to_path_buf(),
        });
    }

    let raw = fs::read_to_string(path)?;
    let movies: Vec<Movie> = serde_json::from_str(&raw)?;

    debug!(count = movies.len(), path = %path.display(), "loaded collection");
    Ok(movies)
}

/// Rewrite the document at `path` with the full record list.
///
/// Output is pretty-printed with four-space indentation; non-ASCII
/// characters are written verbatim, not escaped.
pub fn write_movies(path: &Path, movies: &[Movie]) -> Result<()> {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut serializer = Serializer::with_formatter(&mut buf, formatter);
    movies.serialize(&mut serializer)?;
    buf.push(b'\n');

    fs::write(path, buf)?;

    debug!(count = movies.len(), path = %path.display(), "rewrote collection");
    Ok(())
}
