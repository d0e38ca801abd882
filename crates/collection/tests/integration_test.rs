//! Integration tests for the movie collection.
//!
//! These tests exercise the public contract end to end: load from a
//! backing file, mutate, and verify that storage always mirrors the
//! in-memory state.

use collection::{CollectionError, Movie, MovieCollection, MovieUpdate};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

fn create_test_store(records: &str) -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("movies.json");
    fs::write(&path, records).unwrap();
    (dir, path)
}

fn scenario_store() -> (TempDir, PathBuf) {
    create_test_store(
        r#"[
        {
            "title": "Alien",
            "director": "Ridley Scott",
            "year": 1979,
            "genres": ["Horror", "Sci-Fi"]
        },
        {
            "title": "Dune",
            "director": "Denis Villeneuve",
            "year": 2021,
            "genres": ["Sci-Fi", "Adventure"]
        },
        {
            "title": "Dune",
            "director": "David Lynch",
            "year": 1984,
            "genres": ["Sci-Fi"]
        }
    ]"#,
    )
}

#[test]
fn test_add_then_reload_round_trip() {
    let (_dir, path) = create_test_store("[]");

    let mut collection = MovieCollection::load(&path).unwrap();
    collection
        .add_movie(
            "Le Fabuleux Destin d'Amélie Poulain",
            "Jean-Pierre Jeunet",
            2001,
            vec!["Comedy".to_string(), "Romance".to_string()],
        )
        .unwrap();
    collection
        .add_movie("Heat", "Michael Mann", 1995, vec!["Crime".to_string()])
        .unwrap();

    // A fresh load sees the same ordered records, genre order included
    let reloaded = MovieCollection::load(&path).unwrap();
    assert_eq!(reloaded.movies(), collection.movies());
    assert_eq!(reloaded.movies()[0].genres, vec!["Comedy", "Romance"]);
    assert_eq!(
        reloaded.titles(),
        vec!["Le Fabuleux Destin d'Amélie Poulain", "Heat"]
    );
}

#[test]
fn test_add_increases_count_and_is_findable() {
    let (_dir, path) = scenario_store();
    let mut collection = MovieCollection::load(&path).unwrap();

    let before = collection.count();
    collection
        .add_movie("Stalker", "Andrei Tarkovsky", 1979, vec!["Sci-Fi".to_string()])
        .unwrap();

    assert_eq!(collection.count(), before + 1);
    let found = collection.get_movie_by_title("STALKER").unwrap();
    assert_eq!(
        found,
        &Movie {
            title: "Stalker".to_string(),
            director: "Andrei Tarkovsky".to_string(),
            year: 1979,
            genres: vec!["Sci-Fi".to_string()],
        }
    );
}

#[test]
fn test_remove_then_get_is_absent() {
    let (_dir, path) = scenario_store();
    let mut collection = MovieCollection::load(&path).unwrap();

    collection.remove_movie("Alien").unwrap();
    assert!(collection.get_movie_by_title("Alien").is_none());
}

#[test]
fn test_remove_miss_leaves_memory_and_storage_unchanged() {
    let (_dir, path) = scenario_store();
    let before_on_disk = fs::read_to_string(&path).unwrap();

    let mut collection = MovieCollection::load(&path).unwrap();
    let err = collection.remove_movie("The Thing").unwrap_err();

    assert!(matches!(err, CollectionError::MovieNotFound { .. }));
    assert_eq!(collection.count(), 3);
    assert_eq!(fs::read_to_string(&path).unwrap(), before_on_disk);
}

#[test]
fn test_scenario_queries_and_duplicate_title_remove() {
    let (_dir, path) = scenario_store();
    let mut collection = MovieCollection::load(&path).unwrap();

    assert_eq!(collection.oldest_movie_title(), Some("Alien"));
    assert_eq!(
        collection.titles_between_years(1980, 2021),
        vec!["Dune", "Dune"]
    );

    // Case-insensitive remove hits only the first "Dune" (2021)
    let removed = collection.remove_movie("dune").unwrap();
    assert_eq!(removed.year, 2021);
    assert_eq!(removed.director, "Denis Villeneuve");

    let survivor = collection.get_movie_by_title("dune").unwrap();
    assert_eq!(survivor.year, 1984);

    // The surviving order is persisted
    let reloaded = MovieCollection::load(&path).unwrap();
    assert_eq!(reloaded.titles(), vec!["Alien", "Dune"]);
}

#[test]
fn test_partial_update_persists() {
    let (_dir, path) = scenario_store();
    let mut collection = MovieCollection::load(&path).unwrap();

    collection
        .update_movie("alien", MovieUpdate::new().director("James Cameron"))
        .unwrap();

    let reloaded = MovieCollection::load(&path).unwrap();
    let movie = reloaded.get_movie_by_title("Alien").unwrap();
    assert_eq!(movie.director, "James Cameron");
    assert_eq!(movie.year, 1979);
    assert_eq!(movie.genres, vec!["Horror", "Sci-Fi"]);
}

#[test]
fn test_empty_collection_asymmetry() {
    let (_dir, path) = create_test_store("[]");
    let collection = MovieCollection::load(&path).unwrap();

    // Mean defaults to zero while the title aggregates are absent
    assert_eq!(collection.average_release_year(), 0.0);
    assert_eq!(collection.oldest_movie_title(), None);
    assert_eq!(collection.longest_title(), None);
    assert_eq!(collection.most_common_year(), None);
}

#[test]
fn test_malformed_store_fails_construction() {
    let (_dir, path) = create_test_store(r#"{"title": "not a list"}"#);

    let err = MovieCollection::load(&path).unwrap_err();
    assert!(matches!(err, CollectionError::Malformed(_)));
}
