use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::json;

use crate::services::fallback_bank;

#[axum::debug_handler]
pub async fn health() -> impl IntoResponse {
    let body = json!({
        "status": "ok",
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "fallback_skills": fallback_bank::supported_skills().len(),
    });
    (StatusCode::OK, Json(body))
}
