use actix_web::{HttpRequest, HttpResponse, ResponseError};
use flint_shared::types::HealthResponse;

use crate::handlers::{ApiError, ApiFailure};

pub const SERVICE_NAME: &str = "flint-api";

/// GET /health
pub async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(HealthResponse::healthy(SERVICE_NAME, env!("CARGO_PKG_VERSION")))
}

/// GET /api/v1/
pub async fn api_index() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "message": "Flint API v1",
        "endpoints": {
            "health": "/health",
        },
        "conventions": {
            "errors": "application/problem+json",
            "offset_paging": "?page=1&size=20 -> meta.type OFFSET",
            "cursor_paging": "?cursor=...&size=20 -> meta.type CURSOR",
        }
    }))
}

/// Fallback for unmatched routes
pub async fn not_found(req: HttpRequest) -> HttpResponse {
    ApiError::new(ApiFailure::NotFound, &req).error_response()
}
