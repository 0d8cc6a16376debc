use super::{ApiError, CreateMovieRequest};
use crate::models::movie::NewMovie;

/// Ids arrive as raw path segments; anything that is not a positive integer
/// cannot name a row, so it is reported the same way as an unknown id.
pub fn parse_movie_id(raw: &str) -> Result<i32, ApiError> {
    match raw.trim().parse::<i32>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(ApiError::movie_not_found()),
    }
}

/// `title` is the only NOT NULL column without a default. Any string,
/// empty included, is stored as given.
pub fn require_title(title: Option<String>) -> Result<String, ApiError> {
    title.ok_or_else(|| ApiError::write_failed("NOT NULL constraint failed: movies.title"))
}

pub fn validate_create_request(req: CreateMovieRequest) -> Result<NewMovie, ApiError> {
    let title = require_title(req.title)?;

    Ok(NewMovie {
        title,
        description: req.description,
        poster_url: req.poster_url,
        release_year: req.release_year,
        quality: req.quality,
        category: req.category,
        size: req.size,
        language: req.language,
        download_links: req.download_links,
        is_trending: req.is_trending,
    })
}
