use collection::{CollectionError, MovieCollection, MovieUpdate};
use std::env;

fn main() {
    let path = env::args().nth(1).unwrap_or_else(|| "movies.json".to_string());

    let mut library = match MovieCollection::load(&path) {
        Ok(library) => library,
        Err(e) => {
            eprintln!("{e}");
            return;
        }
    };

    println!("Movies: {:?}", library.movies());
    println!("Titles: {:?}", library.titles());
    println!("Count: {}", library.count());

    // Add a movie
    library
        .add_movie("Spaceballs", "Mel Brooks", 1987, vec!["science fiction".to_string()])
        .expect("Failed to persist after add");

    // Removing an unknown title is a hard miss
    match library.remove_movie("New title") {
        Ok(removed) => println!("Removed: {removed:?}"),
        Err(CollectionError::MovieNotFound { .. }) => println!("Nothing to remove"),
        Err(e) => eprintln!("{e}"),
    }

    // So is updating one
    match library.update_movie("Old title", MovieUpdate::new().director("Updated director")) {
        Ok(updated) => println!("Updated: {updated:?}"),
        Err(CollectionError::MovieNotFound { .. }) => println!("Nothing to update"),
        Err(e) => eprintln!("{e}"),
    }

    println!("\n=== Shelf Stats ===");
    println!("Count: {}", library.count());
    println!("Average release year: {:.1}", library.average_release_year());
    if let Some(title) = library.oldest_movie_title() {
        println!("Oldest: {title}");
    }
    if let Some(title) = library.longest_title() {
        println!("Longest title: {title}");
    }
    if let Some(year) = library.most_common_year() {
        println!("Most common year: {year}");
    }
}
