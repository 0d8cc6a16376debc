//! `SeaORM` implementation of the `MovieService` trait.

use crate::db::Store;
use crate::models::movie::{Movie, MovieFilter, NewMovie};
use crate::services::movie_service::{MovieError, MovieService};
use async_trait::async_trait;
use tracing::info;

pub struct SeaOrmMovieService {
    store: Store,
    literal_wildcards: bool,
}

impl SeaOrmMovieService {
    #[must_use]
    pub const fn new(store: Store, literal_wildcards: bool) -> Self {
        Self {
            store,
            literal_wildcards,
        }
    }
}

#[async_trait]
impl MovieService for SeaOrmMovieService {
    async fn list(&self, filter: MovieFilter) -> Result<Vec<Movie>, MovieError> {
        Ok(self.store.list_movies(&filter).await?)
    }

    async fn search(&self, query: &str) -> Result<Vec<Movie>, MovieError> {
        Ok(self
            .store
            .search_movies(query, self.literal_wildcards)
            .await?)
    }

    async fn get(&self, id: i32) -> Result<Movie, MovieError> {
        self.store
            .get_movie(id)
            .await?
            .ok_or(MovieError::NotFound(id))
    }

    async fn create(&self, movie: NewMovie) -> Result<i32, MovieError> {
        let id = self.store.add_movie(&movie).await?;
        info!(movie_id = id, title = %movie.title, "Movie added");
        Ok(id)
    }

    async fn count(&self) -> Result<u64, MovieError> {
        Ok(self.store.count_movies().await?)
    }
}
