//! Campus Paths HTTP service.
//!
//! # Endpoints
//!
//! - `GET /findPath?start=SHORT&end=SHORT` - walkway segments of the shortest route
//! - `GET /directions?start=SHORT&end=SHORT` - one compass label per segment
//! - `GET /api/v1/route?start=SHORT&end=SHORT` - full route summary
//! - `GET /buildings` - short name to long name map
//! - `GET /metrics` - Prometheus metrics, unless disabled
//! - `GET /health/live` and `GET /health/ready` - probes
//!
//! Failures are answered with RFC 9457 problem documents: 400 for a missing
//! parameter or unknown building, 404 when no walkway route exists.

use axum::{middleware::from_fn, routing::get, Router};

use campuspaths_service_shared::{
    cors_layer, health_live, health_ready, metrics_handler, track_requests, AppState, CorsConfig,
};

pub mod config;
mod handlers;

pub use config::ServiceConfig;
pub use handlers::{buildings, directions, find_path, route_summary, ApiResponse};

/// Assemble every route with request tracking and CORS applied.
///
/// `metrics_path` mounts the Prometheus endpoint; `None` leaves it out.
pub fn build_router(state: AppState, cors: &CorsConfig, metrics_path: Option<&str>) -> Router {
    let mut router = Router::new()
        .route("/findPath", get(find_path))
        .route("/directions", get(directions))
        .route("/buildings", get(buildings))
        .route("/api/v1/route", get(route_summary))
        .route("/health/live", get(health_live))
        .route("/health/ready", get(health_ready));

    if let Some(path) = metrics_path {
        router = router.route(path, get(metrics_handler));
    }

    router
        .layer(from_fn(track_requests))
        .layer(cors_layer(cors))
        .with_state(state)
}
