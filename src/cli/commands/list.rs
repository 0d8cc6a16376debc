//! List movies command handler

use crate::models::movie::{CATEGORIES, Movie, MovieFilter};
use crate::services::MovieService;

pub(super) fn print_movie_line(movie: &Movie) {
    let marker = if movie.is_trending { "🔥" } else { "•" };
    let year = movie
        .release_year
        .map_or_else(|| "????".to_string(), |y| y.to_string());

    println!("{} [{}] {} ({})", marker, movie.id, movie.title, year);
    println!(
        "  {} | {} | {} | {}",
        movie.category.as_deref().unwrap_or("-"),
        movie.quality.as_deref().unwrap_or("-"),
        movie.language.as_deref().unwrap_or("-"),
        movie.size.as_deref().unwrap_or("-"),
    );
}

pub async fn cmd_list_movies(
    service: &dyn MovieService,
    category: Option<String>,
    trending: bool,
) -> anyhow::Result<()> {
    let filter = if trending {
        MovieFilter::Trending
    } else {
        MovieFilter::from_params(category.as_deref(), None)
    };

    let movies = service.list(filter.clone()).await?;

    if movies.is_empty() {
        match filter {
            MovieFilter::Category(c) => {
                println!("No movies in category '{c}'.");
                if !CATEGORIES.contains(&c.as_str()) {
                    println!("Known categories: {}", CATEGORIES.join(", "));
                }
            }
            MovieFilter::Trending => println!("No trending movies."),
            MovieFilter::All => {
                println!("The catalogue is empty.");
                println!();
                println!("Add one with: moviehub add --title \"Movie name\"");
            }
        }
        return Ok(());
    }

    println!("Movies ({} total)", movies.len());
    println!("{:-<70}", "");

    for movie in &movies {
        print_movie_line(movie);
    }

    println!();
    println!("Legend: 🔥 Trending");

    Ok(())
}
