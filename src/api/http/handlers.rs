// src/api/http/handlers.rs

use axum::{response::IntoResponse, Json};
use serde_json::json;

/// Health check handler
pub async fn health_handler() -> impl IntoResponse {
    Json(json!({ "status": "ok" }))
}
