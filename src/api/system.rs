use axum::{Json, extract::State, http::StatusCode};
use std::sync::Arc;
use tracing::warn;

use super::{AppState, HealthDto};

/// Liveness plus a database round trip. Answers 503 when the store is unreachable.
pub async fn get_health(State(state): State<Arc<AppState>>) -> (StatusCode, Json<HealthDto>) {
    let (status_code, database, movies) = match state.store().ping().await {
        Ok(()) => (StatusCode::OK, "ok", state.movies().count().await.ok()),
        Err(e) => {
            warn!(error = %e, "Health check database ping failed");
            (StatusCode::SERVICE_UNAVAILABLE, "error", None)
        }
    };

    let body = HealthDto {
        status: if status_code.is_success() {
            "ok"
        } else {
            "degraded"
        },
        database,
        movies,
        environment: state.config().server.environment.to_string(),
        version: env!("CARGO_PKG_VERSION"),
        uptime_seconds: state.start_time.elapsed().as_secs(),
    };

    (status_code, Json(body))
}
