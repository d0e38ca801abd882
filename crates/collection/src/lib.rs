//! # Collection Crate
//!
//! In-memory movie collection manager backed by a single JSON document.
//!
//! ## Main Components
//!
//! - **types**: Core domain types (Movie, MovieUpdate)
//! - **storage**: Read and rewrite the backing JSON document
//! - **collection**: MovieCollection with lookups, filters, aggregates,
//!   and mutations that persist after every change
//! - **error**: Error types for construction, mutation, and persistence
//!
//! ## Example Usage
//!
//! ```ignore
//! use collection::{MovieCollection, MovieUpdate};
//!
//! // Load the whole collection into memory
//! let mut collection = MovieCollection::load("movies.json")?;
//!
//! // Query it
//! println!("{} movies on the shelf", collection.count());
//! if let Some(movie) = collection.get_movie_by_title("alien") {
//!     println!("{} ({})", movie.title, movie.year);
//! }
//!
//! // Mutate it; the backing file is rewritten before either call returns
//! collection.add_movie("Spaceballs", "Mel Brooks", 1987, vec!["Comedy".into()])?;
//! collection.update_movie("spaceballs", MovieUpdate::new().year(1987))?;
//! ```
//!
//! Single-threaded by design: no locking, no async. Concurrent use of one
//! storage path from several processes is undefined; callers needing that
//! must serialize access themselves.

// Public modules
pub mod collection;
pub mod error;
pub mod storage;
pub mod types;

// Re-export commonly used types for convenience
pub use collection::MovieCollection;
pub use error::{CollectionError, Result};
pub use types::{Movie, MovieUpdate};
