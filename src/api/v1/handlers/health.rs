/*
 * Responsibility
 * - GET /health (liveness probe)
 * - Unauthenticated on purpose; the bearer middleware passes it through
 */
use axum::{Json, http::StatusCode, response::IntoResponse};
use serde_json::json;

pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, Json(json!({"status": "ok"})))
}
