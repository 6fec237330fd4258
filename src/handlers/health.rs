use axum::{extract::State, response::Json};
use chrono::Utc;

use crate::api::HealthResponse;
use crate::AppState;

/// GET /health - liveness plus a store connectivity probe.
///
/// Always 200: a dead database is reported as `db: "error"` in the payload,
/// never as a failed health check.
pub async fn health_get(State(state): State<AppState>) -> Json<HealthResponse> {
    let db = match state.store.ping().await {
        Ok(()) => "ok",
        Err(e) => {
            tracing::warn!("Health check: store unreachable: {}", e);
            "error"
        }
    };

    Json(HealthResponse {
        status: "ok",
        service: env!("CARGO_PKG_NAME"),
        timestamp: Utc::now(),
        db,
    })
}
