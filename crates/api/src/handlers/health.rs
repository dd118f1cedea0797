use axum::Json;

use crate::dto::response::HealthResponse;

// =============================================================================
// Version Information
// =============================================================================

const VERSION: &str = env!("CARGO_PKG_VERSION");

// =============================================================================
// Health Check Handler
// =============================================================================

/// `GET /health`
///
/// The service has no external components to probe; if the process answers,
/// it is healthy.
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse::healthy(VERSION))
}

// =============================================================================
// Tests
// =============================================================================
