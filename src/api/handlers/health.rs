//! Handler for health check endpoint.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::health::{CheckStatus, HealthChecks, HealthResponse};
use crate::state::AppState;

/// Returns service health status with component checks.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response Codes
///
/// - **200 OK**: Database reachable
/// - **503 Service Unavailable**: Database check failed
///
/// A missing API key is reported but does not degrade the status: the admin
/// page is where it gets configured.
///
/// # Response
///
/// ```json
/// {
///   "status": "healthy",
///   "version": "0.1.0",
///   "checks": {
///     "database": { "status": "ok", "message": "Connected" },
///     "api_key": { "status": "ok", "message": "Configured" }
///   }
/// }
/// ```
pub async fn health_handler(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, (StatusCode, Json<HealthResponse>)> {
    let (database, api_key) = match state.settings_service.api_key().await {
        Ok(key) if key.is_empty() => (
            CheckStatus::new("ok", "Connected"),
            CheckStatus::new("missing", "PageRank API key is not configured"),
        ),
        Ok(_) => (
            CheckStatus::new("ok", "Connected"),
            CheckStatus::new("ok", "Configured"),
        ),
        Err(e) => (
            CheckStatus::new("error", format!("Database error: {}", e)),
            CheckStatus::new("unknown", "Database unavailable"),
        ),
    };

    let healthy = database.status == "ok";

    let response = HealthResponse {
        status: if healthy { "healthy" } else { "degraded" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: HealthChecks { database, api_key },
    };

    if healthy {
        Ok(Json(response))
    } else {
        Err((StatusCode::SERVICE_UNAVAILABLE, Json(response)))
    }
}
