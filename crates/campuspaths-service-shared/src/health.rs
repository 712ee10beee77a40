//! Health check handlers for liveness and readiness probes.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::AppState;

/// Body returned by the health endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthStatus {
    /// `ok`, or `not_ready: <reason>`.
    pub status: String,

    pub service: String,

    pub version: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub buildings_loaded: Option<usize>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub walkway_points: Option<usize>,
}

impl HealthStatus {
    pub fn alive(service: &str, version: &str) -> Self {
        Self {
            status: "ok".to_string(),
            service: service.to_string(),
            version: version.to_string(),
            buildings_loaded: None,
            walkway_points: None,
        }
    }

    pub fn ready(service: &str, version: &str, buildings: usize, points: usize) -> Self {
        Self {
            status: "ok".to_string(),
            service: service.to_string(),
            version: version.to_string(),
            buildings_loaded: Some(buildings),
            walkway_points: Some(points),
        }
    }

    pub fn not_ready(service: &str, version: &str, reason: &str) -> Self {
        Self {
            status: format!("not_ready: {}", reason),
            service: service.to_string(),
            version: version.to_string(),
            buildings_loaded: None,
            walkway_points: None,
        }
    }
}

/// Liveness: the process is up and serving requests.
pub async fn health_live() -> impl IntoResponse {
    let status = HealthStatus::alive(env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
    (StatusCode::OK, Json(status))
}

/// Readiness: the campus map holds at least one building.
pub async fn health_ready(State(state): State<AppState>) -> Response {
    let service = env!("CARGO_PKG_NAME");
    let version = env!("CARGO_PKG_VERSION");

    let campus = state.campus();
    if campus.is_empty() {
        let status = HealthStatus::not_ready(service, version, "no buildings loaded");
        return (StatusCode::SERVICE_UNAVAILABLE, Json(status)).into_response();
    }

    let status = HealthStatus::ready(service, version, campus.len(), campus.graph().node_count());
    (StatusCode::OK, Json(status)).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use campuspaths_lib::CampusMap;

    #[test]
    fn test_health_status_alive() {
        let status = HealthStatus::alive("campuspaths-service", "1.0.0");
        assert_eq!(status.status, "ok");
        assert!(status.buildings_loaded.is_none());
    }

    #[test]
    fn test_health_status_not_ready() {
        let status = HealthStatus::not_ready("svc", "1.0.0", "no data");
        assert!(status.status.starts_with("not_ready:"));
        assert!(status.status.contains("no data"));
    }

    #[test]
    fn test_health_status_serialization_skips_counts() {
        let json = serde_json::to_string(&HealthStatus::alive("svc", "0.1.0")).unwrap();
        assert!(json.contains("\"status\":\"ok\""));
        assert!(!json.contains("buildings_loaded"));
    }

    #[tokio::test]
    async fn test_ready_with_empty_campus_is_unavailable() {
        let state = AppState::from_campus(CampusMap::default());
        let response = health_ready(State(state)).await;
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    }
}
