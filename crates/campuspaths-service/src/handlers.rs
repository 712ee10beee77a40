use std::collections::BTreeMap;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use tracing::{info, warn};

use campuspaths_lib::{RouteSummary, SegmentView};
use campuspaths_service_shared::{
    from_lib_error, record_route_calculated, record_route_failed, record_route_segments,
    AppState, ProblemDetails, RequestId, RouteQuery, ServiceResponse,
};

/// Either a JSON body or an RFC 9457 error.
#[derive(Debug)]
pub enum ApiResponse<T> {
    Success(T),
    Error(ProblemDetails),
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        match self {
            ApiResponse::Success(body) => (StatusCode::OK, Json(body)).into_response(),
            ApiResponse::Error(problem) => problem.into_response(),
        }
    }
}

impl<T> From<Result<T, ProblemDetails>> for ApiResponse<T> {
    fn from(result: Result<T, ProblemDetails>) -> Self {
        match result {
            Ok(body) => ApiResponse::Success(body),
            Err(problem) => ApiResponse::Error(problem),
        }
    }
}

/// `GET /findPath`
pub async fn find_path(
    State(state): State<AppState>,
    request_id: RequestId,
    Query(query): Query<RouteQuery>,
) -> ApiResponse<Vec<SegmentView>> {
    plan(&state, &query, &request_id, "/findPath")
        .map(|summary| summary.segments)
        .into()
}

/// `GET /directions`
pub async fn directions(
    State(state): State<AppState>,
    request_id: RequestId,
    Query(query): Query<RouteQuery>,
) -> ApiResponse<Vec<String>> {
    plan(&state, &query, &request_id, "/directions")
        .map(|summary| summary.directions)
        .into()
}

/// `GET /api/v1/route`
pub async fn route_summary(
    State(state): State<AppState>,
    request_id: RequestId,
    Query(query): Query<RouteQuery>,
) -> ApiResponse<ServiceResponse<RouteSummary>> {
    plan(&state, &query, &request_id, "/api/v1/route")
        .map(|summary| ServiceResponse::new(summary).with_request_id(request_id.as_str()))
        .into()
}

/// `GET /buildings`
pub async fn buildings(State(state): State<AppState>) -> Json<BTreeMap<String, String>> {
    Json(state.campus().building_names())
}

fn plan(
    state: &AppState,
    query: &RouteQuery,
    request_id: &RequestId,
    endpoint: &'static str,
) -> Result<RouteSummary, ProblemDetails> {
    let (start, end) = query.endpoints(request_id.as_str()).map_err(|problem| {
        record_route_failed(problem.reason(), endpoint);
        *problem
    })?;

    info!(start = %start, end = %end, "finding route");

    let campus = state.campus();
    let summary = campus
        .find_route(start, end)
        .and_then(|path| RouteSummary::from_path(campus, start, end, &path))
        .map_err(|e| {
            let problem = from_lib_error(&e, request_id.as_str());
            warn!(error = %e, "route lookup failed");
            record_route_failed(problem.reason(), endpoint);
            problem
        })?;

    record_route_calculated(endpoint);
    record_route_segments(summary.hops(), endpoint);

    info!(
        segments = summary.hops(),
        total_distance = summary.total_distance,
        "route found"
    );

    Ok(summary)
}
