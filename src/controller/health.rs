use axum::Json;
use chrono::Utc;

use crate::model::api::HealthDto;

/// GET /health - Liveness probe, no authentication
pub async fn health() -> Json<HealthDto> {
    Json(HealthDto {
        status: "ok".to_string(),
        timestamp: Utc::now(),
    })
}
