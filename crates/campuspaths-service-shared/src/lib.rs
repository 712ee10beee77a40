//! Shared infrastructure for the Campus Paths HTTP service.
//!
//! - [`AppState`]: campus map loaded once at startup and shared by handlers
//! - [`health_live`] and [`health_ready`]: probe handlers
//! - [`ProblemDetails`]: RFC 9457 Problem Details for error responses
//! - [`ServiceResponse`]: wrapper for successful JSON responses
//! - [`metrics`]: Prometheus recorder and route metrics helpers
//! - [`logging`]: structured JSON or text logging setup
//! - [`middleware`]: request ID propagation and HTTP metrics
//! - [`cors`]: CORS policy built from configuration
//!
//! Handlers stay thin: they validate the query, call into `campuspaths-lib`
//! and shape the result. No routing logic lives here.
//!
//! Enable the `test-utils` feature to use [`test_utils`] from other crates.

#![deny(warnings)]

pub mod cors;
mod health;
pub mod logging;
pub mod metrics;
pub mod middleware;
mod problem;
mod request;
mod response;
mod state;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use cors::{cors_layer, CorsConfig};
pub use health::{health_live, health_ready, HealthStatus};
pub use logging::{init_logging, LogFormat, LoggingConfig};
pub use metrics::{
    init_metrics, metrics_handler, record_route_calculated, record_route_failed,
    record_route_segments, MetricsConfig, MetricsError,
};
pub use middleware::{
    extract_or_generate_request_id, track_requests, RequestId, REQUEST_ID_HEADER,
};
pub use problem::{
    from_lib_error, ProblemDetails, PROBLEM_INTERNAL_ERROR, PROBLEM_INVALID_REQUEST,
    PROBLEM_ROUTE_NOT_FOUND, PROBLEM_SERVICE_UNAVAILABLE, PROBLEM_UNKNOWN_LOCATION,
};
pub use request::{RouteQuery, Validate};
pub use response::ServiceResponse;
pub use state::{AppState, AppStateError};
