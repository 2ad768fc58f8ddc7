//! Application status endpoint.

use axum::Json;
use serde::Serialize;

/// Fixed body returned by `GET /api/test`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub message: &'static str,
}

impl HealthResponse {
    pub fn running() -> Self {
        Self {
            status: "success",
            message: "Application is running",
        }
    }
}

/// GET /api/test — reports that the application is up.
///
/// Takes no extractors, so query strings and request bodies are ignored.
pub async fn check() -> Json<HealthResponse> {
    Json(HealthResponse::running())
}
