//! Domain service for the movie catalogue.
//!
//! Handlers and CLI commands go through this trait instead of touching the
//! store directly.

use crate::models::movie::{Movie, MovieFilter, NewMovie};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MovieError {
    #[error("Movie not found: {0}")]
    NotFound(i32),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<sea_orm::DbErr> for MovieError {
    fn from(err: sea_orm::DbErr) -> Self {
        Self::Database(err.to_string())
    }
}

impl From<anyhow::Error> for MovieError {
    fn from(err: anyhow::Error) -> Self {
        match err.downcast::<sea_orm::DbErr>() {
            Ok(db_err) => Self::from(db_err),
            Err(other) => Self::Internal(other.to_string()),
        }
    }
}

#[async_trait::async_trait]
pub trait MovieService: Send + Sync {
    /// Lists movies newest first, narrowed by `filter`.
    async fn list(&self, filter: MovieFilter) -> Result<Vec<Movie>, MovieError>;

    /// Title substring search, newest first. An empty query matches everything.
    async fn search(&self, query: &str) -> Result<Vec<Movie>, MovieError>;

    /// # Errors
    ///
    /// Returns [`MovieError::NotFound`] when no row has this id.
    async fn get(&self, id: i32) -> Result<Movie, MovieError>;

    /// Inserts a movie and returns its generated id.
    async fn create(&self, movie: NewMovie) -> Result<i32, MovieError>;

    async fn count(&self) -> Result<u64, MovieError>;
}
