use super::list::print_movie_line;
use crate::services::MovieService;

pub async fn cmd_search_movies(service: &dyn MovieService, query: &str) -> anyhow::Result<()> {
    let movies = service.search(query).await?;

    if movies.is_empty() {
        println!("No movies found matching '{query}'");
        return Ok(());
    }

    println!("Search Results for '{}' ({})", query, movies.len());
    println!("{:-<70}", "");

    for movie in &movies {
        print_movie_line(movie);
    }

    Ok(())
}
