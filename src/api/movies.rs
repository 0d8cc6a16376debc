use axum::{
    Json,
    extract::{Path, Query, State, rejection::JsonRejection},
    http::StatusCode,
};
use serde::Deserialize;
use std::sync::Arc;

use super::{ApiError, AppState, CreateMovieRequest, CreatedDto, MovieDto};
use crate::api::validation::{parse_movie_id, validate_create_request};
use crate::models::movie::MovieFilter;

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub category: Option<String>,
    pub trending: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub q: String,
}

pub async fn list_movies(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ListQuery>,
) -> Result<Json<Vec<MovieDto>>, ApiError> {
    let filter = MovieFilter::from_params(params.category.as_deref(), params.trending.as_deref());
    let movies = state.movies().list(filter).await?;

    Ok(Json(movies.into_iter().map(MovieDto::from).collect()))
}

pub async fn search_movies(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SearchQuery>,
) -> Result<Json<Vec<MovieDto>>, ApiError> {
    let movies = state.movies().search(&params.q).await?;

    Ok(Json(movies.into_iter().map(MovieDto::from).collect()))
}

pub async fn get_movie(
    State(state): State<Arc<AppState>>,
    Path(raw_id): Path<String>,
) -> Result<Json<MovieDto>, ApiError> {
    let id = parse_movie_id(&raw_id)?;
    let movie = state.movies().get(id).await?;

    Ok(Json(MovieDto::from(movie)))
}

pub async fn create_movie(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<CreateMovieRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<CreatedDto>), ApiError> {
    let Json(request) = payload.map_err(ApiError::from_json_rejection)?;
    let movie = validate_create_request(request)?;

    let id = state
        .movies()
        .create(movie)
        .await
        .map_err(ApiError::from_create_error)?;

    Ok((StatusCode::CREATED, Json(CreatedDto { id })))
}
