use axum::Json;
use shared_http::api::HealthResponse;

/// GET /health
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        message: "OK".into(),
    })
}
