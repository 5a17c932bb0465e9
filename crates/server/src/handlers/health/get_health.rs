use axum::{Json, extract::State, http::StatusCode};
use serde::Serialize;

use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uptime: Option<u64>,
}

/// Handler for GET /health
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    summary = "Health check",
    responses(
        (status = 200, description = "Service is up", body = Object)
    )
)]
pub async fn get_health(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    let response = HealthResponse {
        status: "ok".to_string(),
        uptime: Some(state.started_at.elapsed().as_secs()),
    };

    (StatusCode::OK, Json(response))
}

#[cfg(test)]
mod tests {
    use super::*;
    use version_rest_api_config::ServiceConfig;

    #[tokio::test]
    async fn test_get_health_reports_ok() {
        let state = AppState::with_config(ServiceConfig::default());
        let (status, Json(response)) = get_health(State(state)).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(response.status, "ok");
        assert!(response.uptime.is_some());
    }
}
