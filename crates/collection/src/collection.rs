//! The in-memory movie collection and its persistence discipline.
//!
//! A [`MovieCollection`] loads every record from its backing file at
//! construction and serves all queries from memory. Each mutating
//! operation (add, remove, update) rewrites the backing file in full
//! before returning, so storage and memory never diverge.
//!
//! Lookup semantics:
//! - Title, director, and genre comparisons are case-insensitive and all
//!   go through one normalization helper.
//! - Substring title search is case-sensitive.
//! - Insertion order is preserved and breaks ties everywhere a "first
//!   match" is defined (duplicate titles, oldest movie, longest title,
//!   most common year).

use crate::error::{CollectionError, Result};
use crate::storage;
use crate::types::{Movie, MovieUpdate};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tracing::debug;

/// The full ordered record set, backed by one JSON document.
#[derive(Debug)]
pub struct MovieCollection {
    /// Backing file, rewritten after every mutation
    path: PathBuf,
    /// Single source of truth between loads
    movies: Vec<Movie>,
}

/// Normalization policy shared by every case-insensitive comparison
/// (titles, directors, genres).
fn normalize(s: &str) -> String {
    s.to_lowercase()
}

impl MovieCollection {
    /// Open the collection stored at `path`.
    ///
    /// Fails with [`CollectionError::StorageNotFound`] if `path` is not an
    /// existing file. Construction is atomic: either the whole document
    /// loads or no collection is produced.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let movies = storage::read_movies(&path)?;
        Ok(Self { path, movies })
    }

    /// Backing file location
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// All records, in insertion order.
    ///
    /// Returns an immutable view; records can only be changed through the
    /// collection's own mutation methods.
    pub fn movies(&self) -> &[Movie] {
        &self.movies
    }

    /// All titles, in collection order (not deduplicated, not sorted)
    pub fn titles(&self) -> Vec<&str> {
        self.movies.iter().map(|m| m.title.as_str()).collect()
    }

    /// Number of records in the collection
    pub fn count(&self) -> usize {
        self.movies.len()
    }

    /// True if the collection holds no records
    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }

    // Mutators - each appends to or edits the in-memory vector, then
    // rewrites the backing file before returning.

    /// Append a new movie built from the four fields and persist.
    ///
    /// The new record lands at the end of the sequence, so it never ties
    /// for "first match" against existing entries. No duplicate-title
    /// check is performed.
    pub fn add_movie(
        &mut self,
        title: impl Into<String>,
        director: impl Into<String>,
        year: i32,
        genres: Vec<String>,
    ) -> Result<()> {
        let movie = Movie {
            title: title.into(),
            director: director.into(),
            year,
            genres,
        };
        debug!(title = %movie.title, "adding movie");
        self.movies.push(movie);
        self.persist()
    }

    /// Remove the first record whose title matches case-insensitively.
    ///
    /// Persists and returns the removed record. Fails with
    /// [`CollectionError::MovieNotFound`] if no title matches, leaving
    /// both the collection and its storage untouched.
    pub fn remove_movie(&mut self, title: &str) -> Result<Movie> {
        let idx = self
            .position_by_title(title)
            .ok_or_else(|| CollectionError::MovieNotFound {
                title: title.to_string(),
            })?;

        let removed = self.movies.remove(idx);
        debug!(title = %removed.title, "removed movie");
        self.persist()?;
        Ok(removed)
    }

    /// Apply `update` to the first record whose title matches
    /// case-insensitively.
    ///
    /// Only the fields present in the patch are overwritten. Persists and
    /// returns a copy of the updated record. Fails with
    /// [`CollectionError::MovieNotFound`] if no title matches. Even when
    /// several records share the title, exactly one is updated.
    pub fn update_movie(&mut self, title: &str, update: MovieUpdate) -> Result<Movie> {
        let idx = self
            .position_by_title(title)
            .ok_or_else(|| CollectionError::MovieNotFound {
                title: title.to_string(),
            })?;

        let movie = &mut self.movies[idx];
        if let Some(director) = update.director {
            movie.director = director;
        }
        if let Some(year) = update.year {
            movie.year = year;
        }
        if let Some(genres) = update.genres {
            movie.genres = genres;
        }

        debug!(title = %self.movies[idx].title, "updated movie");
        self.persist()?;
        Ok(self.movies[idx].clone())
    }

    // Lookups and filters - read-only, soft misses return None or an
    // empty result rather than an error.

    /// First record whose title matches case-insensitively, if any
    pub fn get_movie_by_title(&self, title: &str) -> Option<&Movie> {
        let wanted = normalize(title);
        self.movies.iter().find(|m| normalize(&m.title) == wanted)
    }

    /// Records whose title contains `substring`, case-SENSITIVELY,
    /// in collection order
    pub fn movies_by_title_substring(&self, substring: &str) -> Vec<&Movie> {
        self.movies
            .iter()
            .filter(|m| m.title.contains(substring))
            .collect()
    }

    /// Records released exactly in `year`, in collection order
    pub fn movies_by_year(&self, year: i32) -> Vec<&Movie> {
        self.movies.iter().filter(|m| m.year == year).collect()
    }

    /// Number of records directed by `director`, compared
    /// case-insensitively
    pub fn count_by_director(&self, director: &str) -> usize {
        let wanted = normalize(director);
        self.movies
            .iter()
            .filter(|m| normalize(&m.director) == wanted)
            .count()
    }

    /// Records carrying `genre` anywhere in their genre list, compared
    /// case-insensitively, in collection order
    pub fn movies_by_genre(&self, genre: &str) -> Vec<&Movie> {
        let wanted = normalize(genre);
        self.movies
            .iter()
            .filter(|m| m.genres.iter().any(|g| normalize(g) == wanted))
            .collect()
    }

    // Aggregates - all total over well-formed in-memory state; the only
    // special case is the empty collection.

    /// Title of the record with the minimum year; ties go to the first
    /// occurrence. `None` on an empty collection.
    pub fn oldest_movie_title(&self) -> Option<&str> {
        // min_by_key keeps the first of equally-minimal elements
        self.movies
            .iter()
            .min_by_key(|m| m.year)
            .map(|m| m.title.as_str())
    }

    /// Arithmetic mean of all release years.
    ///
    /// Returns `0.0` on an empty collection. This differs from the
    /// `Option` aggregates on purpose.
    pub fn average_release_year(&self) -> f64 {
        if self.movies.is_empty() {
            return 0.0;
        }
        let total: i64 = self.movies.iter().map(|m| i64::from(m.year)).sum();
        total as f64 / self.movies.len() as f64
    }

    /// Title with the greatest length in characters; ties go to the first
    /// occurrence. `None` on an empty collection.
    pub fn longest_title(&self) -> Option<&str> {
        let mut best: Option<(&str, usize)> = None;
        for movie in &self.movies {
            let len = movie.title.chars().count();
            if best.is_none_or(|(_, max)| len > max) {
                best = Some((movie.title.as_str(), len));
            }
        }
        best.map(|(title, _)| title)
    }

    /// Titles of records with `start <= year <= end`, inclusive on both
    /// ends, in collection order
    pub fn titles_between_years(&self, start: i32, end: i32) -> Vec<&str> {
        self.movies
            .iter()
            .filter(|m| start <= m.year && m.year <= end)
            .map(|m| m.title.as_str())
            .collect()
    }

    /// Year with the highest occurrence count.
    ///
    /// Ties are deterministic: the first year, in collection order, to
    /// carry the maximum frequency wins. `None` on an empty collection.
    pub fn most_common_year(&self) -> Option<i32> {
        let mut frequency: HashMap<i32, u32> = HashMap::new();
        for movie in &self.movies {
            *frequency.entry(movie.year).or_insert(0) += 1;
        }

        // Walk in collection order so the first year reaching the maximum
        // count is the one reported.
        let mut best: Option<(i32, u32)> = None;
        for movie in &self.movies {
            let count = frequency[&movie.year];
            if best.is_none_or(|(_, max)| count > max) {
                best = Some((movie.year, count));
            }
        }
        best.map(|(year, _)| year)
    }

    /// Index of the first record whose title matches case-insensitively
    fn position_by_title(&self, title: &str) -> Option<usize> {
        let wanted = normalize(title);
        self.movies
            .iter()
            .position(|m| normalize(&m.title) == wanted)
    }

    /// Rewrite the backing file with the current record set
    fn persist(&self) -> Result<()> {
        storage::write_movies(&self.path, &self.movies)
    }
}
