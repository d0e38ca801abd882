//! Core domain types for the movie collection.

use serde::{Deserialize, Serialize};

/// A single movie record.
///
/// Serde derives define the storage schema: the four keys appear on disk
/// in field order. Titles act as the de-facto lookup key for remove and
/// update, compared case-insensitively, but no uniqueness is enforced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    pub title: String,
    pub director: String,
    pub year: i32,
    /// Ordered list of free-form genre labels
    pub genres: Vec<String>,
}

/// Field patch consumed by `MovieCollection::update_movie`.
///
/// Only the fields set to `Some` are written to the matched record; the
/// rest are left untouched.
#[derive(Debug, Clone, Default)]
pub struct MovieUpdate {
    pub director: Option<String>,
    pub year: Option<i32>,
    pub genres: Option<Vec<String>>,
}

impl MovieUpdate {
    /// A patch that changes nothing
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the director field
    pub fn director(mut self, director: impl Into<String>) -> Self {
        self.director = Some(director.into());
        self
    }

    /// Set the release year
    pub fn year(mut self, year: i32) -> Self {
        self.year = Some(year);
        self
    }

    /// Replace the genre list
    pub fn genres(mut self, genres: Vec<String>) -> Self {
        self.genres = Some(genres);
        self
    }
}
