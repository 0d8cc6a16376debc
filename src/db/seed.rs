use anyhow::Result;
use tracing::info;

use super::Store;
use crate::models::movie::{DownloadLink, NewMovie};

struct SeedMovie {
    title: &'static str,
    description: &'static str,
    poster_url: &'static str,
    release_year: i32,
    quality: &'static str,
    category: &'static str,
    size: &'static str,
    language: &'static str,
    links: &'static [(&'static str, &'static str)],
    is_trending: bool,
}

/// Rows inserted into an empty catalogue, in insertion order.
const SEED_MOVIES: &[SeedMovie] = &[
    SeedMovie {
        title: "Pathaan",
        description: "An Indian RAW agent Pathaan is assigned to take down a private terror organization that has a plan to spread a deadly virus in India.",
        poster_url: "https://picsum.photos/seed/pathaan/600/900",
        release_year: 2023,
        quality: "4K",
        category: "Bollywood",
        size: "2.4GB",
        language: "Hindi",
        links: &[("Direct Download 4K", "#"), ("G-Drive 1080p", "#")],
        is_trending: true,
    },
    SeedMovie {
        title: "Oppenheimer",
        description: "The story of American scientist J. Robert Oppenheimer and his role in the development of the atomic bomb.",
        poster_url: "https://picsum.photos/seed/oppenheimer/600/900",
        release_year: 2023,
        quality: "HD",
        category: "Hollywood",
        size: "1.8GB",
        language: "English",
        links: &[("Direct Download HD", "#")],
        is_trending: true,
    },
    SeedMovie {
        title: "Pushpa: The Rise",
        description: "Violence erupts between red sandalwood smugglers and the police who are tasked with taking down their organization.",
        poster_url: "https://picsum.photos/seed/pushpa/600/900",
        release_year: 2021,
        quality: "720p",
        category: "South",
        size: "1.4GB",
        language: "Telugu",
        links: &[("Download 720p", "#")],
        is_trending: true,
    },
    SeedMovie {
        title: "Stranger Things",
        description: "When a young boy disappears, his mother, a police chief and his friends must confront terrifying supernatural forces in order to get him back.",
        poster_url: "https://picsum.photos/seed/stranger/600/900",
        release_year: 2022,
        quality: "HD",
        category: "Web-Series",
        size: "800MB/Ep",
        language: "English",
        links: &[("Season 4 All Episodes", "#")],
        is_trending: false,
    },
];

impl SeedMovie {
    fn to_new_movie(&self) -> NewMovie {
        NewMovie {
            title: self.title.to_string(),
            description: Some(self.description.to_string()),
            poster_url: Some(self.poster_url.to_string()),
            release_year: Some(self.release_year),
            quality: Some(self.quality.to_string()),
            category: Some(self.category.to_string()),
            size: Some(self.size.to_string()),
            language: Some(self.language.to_string()),
            download_links: self
                .links
                .iter()
                .map(|(label, url)| DownloadLink {
                    label: (*label).to_string(),
                    url: (*url).to_string(),
                })
                .collect(),
            is_trending: self.is_trending,
        }
    }
}

/// Inserts the example catalogue when the table is empty. Returns the
/// number of rows inserted; a non-empty table is left untouched.
pub async fn seed_if_empty(store: &Store) -> Result<usize> {
    if store.count_movies().await? > 0 {
        return Ok(0);
    }

    for movie in SEED_MOVIES {
        store.add_movie(&movie.to_new_movie()).await?;
    }

    info!("Seeded {} example movies", SEED_MOVIES.len());
    Ok(SEED_MOVIES.len())
}
