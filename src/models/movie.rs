use serde::{Deserialize, Serialize};
use tracing::warn;

/// Labels the UI groups movies under. Storage accepts any string.
pub const CATEGORIES: [&str; 4] = ["Bollywood", "Hollywood", "South", "Web-Series"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DownloadLink {
    pub label: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Movie {
    pub id: i32,
    pub title: String,
    pub description: Option<String>,
    pub poster_url: Option<String>,
    pub release_year: Option<i32>,
    pub quality: Option<String>,
    pub category: Option<String>,
    pub size: Option<String>,
    pub language: Option<String>,
    /// Stored JSON text, kept verbatim. Use [`Movie::links`] to read it.
    pub download_links: Option<String>,
    pub is_trending: bool,
    pub created_at: String,
}

impl Movie {
    /// Decodes `download_links`. Missing or malformed text yields no links.
    #[must_use]
    pub fn links(&self) -> Vec<DownloadLink> {
        let Some(raw) = self.download_links.as_deref() else {
            return Vec::new();
        };

        if raw.trim().is_empty() {
            return Vec::new();
        }

        match serde_json::from_str::<Vec<DownloadLink>>(raw) {
            Ok(links) => links,
            Err(e) => {
                warn!(movie_id = self.id, error = %e, "Malformed download_links");
                Vec::new()
            }
        }
    }
}

/// Validated insert payload.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewMovie {
    pub title: String,
    pub description: Option<String>,
    pub poster_url: Option<String>,
    pub release_year: Option<i32>,
    pub quality: Option<String>,
    pub category: Option<String>,
    pub size: Option<String>,
    pub language: Option<String>,
    pub download_links: Vec<DownloadLink>,
    pub is_trending: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MovieFilter {
    All,
    Category(String),
    Trending,
}

impl MovieFilter {
    /// `trending=true` wins over `category`; an empty category means no filter.
    #[must_use]
    pub fn from_params(category: Option<&str>, trending: Option<&str>) -> Self {
        if trending == Some("true") {
            return Self::Trending;
        }

        match category {
            Some(c) if !c.is_empty() => Self::Category(c.to_string()),
            _ => Self::All,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn movie_with_links(raw: Option<&str>) -> Movie {
        Movie {
            id: 1,
            title: "Test".to_string(),
            description: None,
            poster_url: None,
            release_year: None,
            quality: None,
            category: None,
            size: None,
            language: None,
            download_links: raw.map(str::to_string),
            is_trending: false,
            created_at: "2024-01-01 00:00:00".to_string(),
        }
    }

    #[test]
    fn test_filter_trending_takes_precedence() {
        assert_eq!(
            MovieFilter::from_params(Some("South"), Some("true")),
            MovieFilter::Trending
        );
    }

    #[test]
    fn test_filter_category() {
        assert_eq!(
            MovieFilter::from_params(Some("Hollywood"), None),
            MovieFilter::Category("Hollywood".to_string())
        );
        assert_eq!(
            MovieFilter::from_params(Some("Hollywood"), Some("false")),
            MovieFilter::Category("Hollywood".to_string())
        );
    }

    #[test]
    fn test_filter_defaults_to_all() {
        assert_eq!(MovieFilter::from_params(None, None), MovieFilter::All);
        assert_eq!(MovieFilter::from_params(Some(""), None), MovieFilter::All);
        assert_eq!(MovieFilter::from_params(None, Some("1")), MovieFilter::All);
        assert_eq!(MovieFilter::from_params(None, Some("TRUE")), MovieFilter::All);
    }

    #[test]
    fn test_links_parses_stored_json() {
        let movie = movie_with_links(Some(
            r##"[{"label":"A","url":"#"},{"label":"B","url":"http://b"}]"##,
        ));
        let links = movie.links();
        assert_eq!(links.len(), 2);
        assert_eq!(links[0].label, "A");
        assert_eq!(links[1].url, "http://b");
    }

    #[test]
    fn test_links_tolerates_bad_values() {
        assert!(movie_with_links(None).links().is_empty());
        assert!(movie_with_links(Some("")).links().is_empty());
        assert!(movie_with_links(Some("not json")).links().is_empty());
        assert!(movie_with_links(Some(r#"{"label":"A"}"#)).links().is_empty());
        assert!(movie_with_links(Some("null")).links().is_empty());
    }
}
