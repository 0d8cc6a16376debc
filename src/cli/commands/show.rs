use crate::services::{MovieError, MovieService};

pub async fn cmd_show_movie(service: &dyn MovieService, id_str: &str) -> anyhow::Result<()> {
    let id: i32 = if let Ok(id) = id_str.trim().parse() {
        id
    } else {
        println!("Invalid movie ID: {id_str}");
        return Ok(());
    };

    let movie = match service.get(id).await {
        Ok(movie) => movie,
        Err(MovieError::NotFound(_)) => {
            println!("Movie with ID {id} not found.");
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };

    let field = |value: &Option<String>| value.clone().unwrap_or_else(|| "-".to_string());

    println!("{}", movie.title);
    println!("{:-<60}", "");
    println!(
        "Year:      {}",
        movie
            .release_year
            .map_or_else(|| "-".to_string(), |y| y.to_string())
    );
    println!("Category:  {}", field(&movie.category));
    println!("Quality:   {}", field(&movie.quality));
    println!("Size:      {}", field(&movie.size));
    println!("Language:  {}", field(&movie.language));
    println!("Trending:  {}", if movie.is_trending { "yes" } else { "no" });
    println!("Poster:    {}", field(&movie.poster_url));
    println!("Added:     {}", movie.created_at);

    if let Some(description) = &movie.description {
        println!();
        println!("{description}");
    }

    let links = movie.links();
    println!();
    if links.is_empty() {
        println!("No download links.");
    } else {
        println!("Downloads:");
        for link in links {
            let label = if link.label.is_empty() {
                format!("Download {}", movie.quality.as_deref().unwrap_or(""))
            } else {
                link.label
            };
            println!("  • {} -> {}", label.trim_end(), link.url);
        }
    }

    Ok(())
}
