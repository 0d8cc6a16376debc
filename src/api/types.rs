use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::models::movie::{DownloadLink, Movie};

/// Body of every error response.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

impl ErrorBody {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}

/// A movie as it goes over the wire: the stored row, with `download_links`
/// left as JSON text and `is_trending` as 0/1.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovieDto {
    pub id: i32,
    pub title: String,
    pub description: Option<String>,
    pub poster_url: Option<String>,
    pub release_year: Option<i32>,
    pub quality: Option<String>,
    pub category: Option<String>,
    pub size: Option<String>,
    pub language: Option<String>,
    pub download_links: Option<String>,
    pub is_trending: i32,
    pub created_at: String,
}

impl From<Movie> for MovieDto {
    fn from(movie: Movie) -> Self {
        Self {
            id: movie.id,
            title: movie.title,
            description: movie.description,
            poster_url: movie.poster_url,
            release_year: movie.release_year,
            quality: movie.quality,
            category: movie.category,
            size: movie.size,
            language: movie.language,
            download_links: movie.download_links,
            is_trending: i32::from(movie.is_trending),
            created_at: movie.created_at,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CreatedDto {
    pub id: i32,
}

#[derive(Debug, Serialize)]
pub struct HealthDto {
    pub status: &'static str,
    pub database: &'static str,
    pub movies: Option<u64>,
    pub environment: String,
    pub version: &'static str,
    pub uptime_seconds: u64,
}

/// Raw `POST /api/movies` body, checked by `validate_create_request` before insert.
#[derive(Debug, Default, Deserialize)]
pub struct CreateMovieRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub poster_url: Option<String>,
    pub release_year: Option<i32>,
    pub quality: Option<String>,
    pub category: Option<String>,
    pub size: Option<String>,
    pub language: Option<String>,
    #[serde(default, deserialize_with = "deserialize_links")]
    pub download_links: Vec<DownloadLink>,
    #[serde(default, deserialize_with = "deserialize_truthy")]
    pub is_trending: bool,
}

fn deserialize_links<'de, D>(deserializer: D) -> Result<Vec<DownloadLink>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<DownloadLink>>::deserialize(deserializer)?.unwrap_or_default())
}

fn deserialize_truthy<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(is_truthy(&value))
}

/// Loose boolean coercion for form-ish payloads.
#[must_use]
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !(s.is_empty() || s == "false" || s == "0"),
        Value::Array(_) | Value::Object(_) => true,
    }
}
