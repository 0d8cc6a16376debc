use axum::{Json, http::StatusCode, response::IntoResponse};
use std::path::Path;
use tower_http::services::{ServeDir, ServeFile};

use super::ErrorBody;

/// Serves the built frontend, answering unknown paths with `index.html` so
/// client-side routes resolve.
pub fn frontend_service(static_dir: impl AsRef<Path>) -> ServeDir<ServeFile> {
    let dir = static_dir.as_ref();
    ServeDir::new(dir).fallback(ServeFile::new(dir.join("index.html")))
}

/// Development mode serves only the API; the frontend dev server owns the rest.
pub async fn api_only_fallback() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorBody::new(
            "Not found. Frontend assets are only served in production mode",
        )),
    )
}
