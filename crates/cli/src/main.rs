use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use collection::{Movie, MovieCollection, MovieUpdate};
use colored::Colorize;
use std::path::PathBuf;

/// ReelShelf - JSON-backed movie collection manager
#[derive(Parser)]
#[command(name = "reel-shelf")]
#[command(about = "Manage a movie collection stored in a JSON file", long_about = None)]
struct Cli {
    /// Path to the backing JSON document
    #[arg(short, long, default_value = "movies.json")]
    file: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List every movie in the collection
    List,

    /// List all titles in collection order
    Titles,

    /// Add a movie to the end of the collection
    Add {
        /// Movie title
        #[arg(long)]
        title: String,

        /// Director name
        #[arg(long)]
        director: String,

        /// Release year
        #[arg(long)]
        year: i32,

        /// Comma-separated genre labels
        #[arg(long, value_delimiter = ',')]
        genres: Vec<String>,
    },

    /// Remove the first movie matching a title (case-insensitive)
    Remove {
        /// Title to remove
        #[arg(long)]
        title: String,
    },

    /// Update fields of the first movie matching a title (case-insensitive)
    Update {
        /// Title to look up
        #[arg(long)]
        title: String,

        /// New director
        #[arg(long)]
        director: Option<String>,

        /// New release year
        #[arg(long)]
        year: Option<i32>,

        /// New comma-separated genre list
        #[arg(long, value_delimiter = ',')]
        genres: Option<Vec<String>>,
    },

    /// Look up a single movie by title (case-insensitive)
    Get {
        /// Title to look up
        #[arg(long)]
        title: String,
    },

    /// Search titles by substring (case-sensitive)
    Search {
        /// Substring to search for
        #[arg(long)]
        substring: String,
    },

    /// Filter the collection by year, genre, or director
    Filter {
        /// Exact release year
        #[arg(long)]
        year: Option<i32>,

        /// Genre label (case-insensitive)
        #[arg(long)]
        genre: Option<String>,

        /// Director name (case-insensitive); prints a count
        #[arg(long)]
        director: Option<String>,
    },

    /// Titles released between two years, inclusive
    Between {
        /// First year of the range
        #[arg(long)]
        start: i32,

        /// Last year of the range
        #[arg(long)]
        end: i32,
    },

    /// Show collection statistics
    Stats,
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let mut library = MovieCollection::load(&cli.file)
        .with_context(|| format!("Failed to open movie collection at {}", cli.file.display()))?;

    // Dispatch to appropriate command handler
    match cli.command {
        Commands::List => handle_list(&library),
        Commands::Titles => handle_titles(&library),
        Commands::Add {
            title,
            director,
            year,
            genres,
        } => handle_add(&mut library, title, director, year, genres)?,
        Commands::Remove { title } => handle_remove(&mut library, &title)?,
        Commands::Update {
            title,
            director,
            year,
            genres,
        } => handle_update(&mut library, &title, director, year, genres)?,
        Commands::Get { title } => handle_get(&library, &title),
        Commands::Search { substring } => handle_search(&library, &substring),
        Commands::Filter {
            year,
            genre,
            director,
        } => handle_filter(&library, year, genre, director),
        Commands::Between { start, end } => handle_between(&library, start, end),
        Commands::Stats => handle_stats(&library),
    }

    Ok(())
}

fn print_movie(movie: &Movie) {
    println!(
        "{} {} ({}) - {} [{}]",
        "•".green(),
        movie.title.as_str().bold(),
        movie.year,
        movie.director,
        movie.genres.join(", ")
    );
}

/// Handle the 'list' command
fn handle_list(library: &MovieCollection) {
    for movie in library.movies() {
        print_movie(movie);
    }
    println!("{} movies total", library.count());
}

/// Handle the 'titles' command
fn handle_titles(library: &MovieCollection) {
    for title in library.titles() {
        println!("{title}");
    }
}

/// Handle the 'add' command
fn handle_add(
    library: &mut MovieCollection,
    title: String,
    director: String,
    year: i32,
    genres: Vec<String>,
) -> Result<()> {
    library
        .add_movie(title.as_str(), director.as_str(), year, genres)
        .context("Failed to add movie")?;
    println!("{} Added {}", "✓".green(), title.bold());
    Ok(())
}

/// Handle the 'remove' command
fn handle_remove(library: &mut MovieCollection, title: &str) -> Result<()> {
    let removed = library.remove_movie(title)?;
    println!(
        "{} Removed {} ({})",
        "✓".green(),
        removed.title.as_str().bold(),
        removed.year
    );
    Ok(())
}

/// Handle the 'update' command
fn handle_update(
    library: &mut MovieCollection,
    title: &str,
    director: Option<String>,
    year: Option<i32>,
    genres: Option<Vec<String>>,
) -> Result<()> {
    let update = MovieUpdate {
        director,
        year,
        genres,
    };
    let updated = library.update_movie(title, update)?;
    println!("{} Updated:", "✓".green());
    print_movie(&updated);
    Ok(())
}

/// Handle the 'get' command
fn handle_get(library: &MovieCollection, title: &str) {
    match library.get_movie_by_title(title) {
        Some(movie) => print_movie(movie),
        None => println!("{} No movie titled {:?}", "✗".red(), title),
    }
}

/// Handle the 'search' command
fn handle_search(library: &MovieCollection, substring: &str) {
    let matches = library.movies_by_title_substring(substring);
    if matches.is_empty() {
        println!("No titles contain {substring:?}");
        return;
    }
    for movie in matches {
        print_movie(movie);
    }
}

/// Handle the 'filter' command
fn handle_filter(
    library: &MovieCollection,
    year: Option<i32>,
    genre: Option<String>,
    director: Option<String>,
) {
    if let Some(year) = year {
        println!("{}", format!("Released in {year}:").bold());
        for movie in library.movies_by_year(year) {
            print_movie(movie);
        }
    }

    if let Some(genre) = genre {
        println!("{}", format!("Genre {genre:?}:").bold());
        for movie in library.movies_by_genre(&genre) {
            print_movie(movie);
        }
    }

    if let Some(director) = director {
        let count = library.count_by_director(&director);
        println!("{count} movies directed by {director}");
    }
}

/// Handle the 'between' command
fn handle_between(library: &MovieCollection, start: i32, end: i32) {
    for title in library.titles_between_years(start, end) {
        println!("{title}");
    }
}

/// Handle the 'stats' command
fn handle_stats(library: &MovieCollection) {
    println!("{}", "Collection stats".bold().blue());
    println!("{}Movies: {}", "• ".green(), library.count());
    println!(
        "{}Average release year: {:.1}",
        "• ".green(),
        library.average_release_year()
    );
    if let Some(title) = library.oldest_movie_title() {
        println!("{}Oldest movie: {}", "• ".cyan(), title);
    }
    if let Some(title) = library.longest_title() {
        println!("{}Longest title: {}", "• ".cyan(), title);
    }
    if let Some(year) = library.most_common_year() {
        println!("{}Most common year: {}", "• ".cyan(), year);
    }
}
