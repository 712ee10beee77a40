//! HTTP middleware for the campus service.
//!
//! [`track_requests`] runs around every handler (mounted with
//! `axum::middleware::from_fn`). It resolves the correlation ID, opens a
//! request span and records:
//! - `http_requests_total`: counter by method, path, status bucket
//! - `http_request_duration_seconds`: histogram by method, path
//! - `http_request_size_bytes`: histogram by method, path
//! - `http_response_size_bytes`: histogram by method, path
//!
//! The `path` label is the matched route template (`/findPath`), or
//! `unmatched` for requests no route accepted, so label values stay bounded.
//!
//! The `X-Request-ID` header is reused when the client sends one, otherwise a
//! UUID v7 is generated. Either way it is echoed on the response and stored in
//! the request extensions, where handlers pick it up through the
//! [`RequestId`] extractor.

use std::convert::Infallible;
use std::time::Instant;

use axum::extract::{FromRequestParts, MatchedPath, Request};
use axum::http::{header, request::Parts, Extensions, HeaderMap, HeaderName, HeaderValue};
use axum::middleware::Next;
use axum::response::Response;
use tracing::{info_span, Instrument};
use uuid::Uuid;

pub const REQUEST_ID_HEADER: &str = "x-request-id";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestId(pub String);

impl RequestId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Time-sortable UUID v7.
    pub fn generate() -> Self {
        Self(Uuid::now_v7().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for RequestId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for RequestId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for RequestId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl<S> FromRequestParts<S> for RequestId
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        if let Some(id) = parts.extensions.get::<RequestId>() {
            return Ok(id.clone());
        }
        Ok(extract_or_generate_request_id(&parts.headers))
    }
}

/// The `X-Request-ID` header value, or a fresh UUID v7 when it is missing,
/// empty or not valid UTF-8.
pub fn extract_or_generate_request_id(headers: &HeaderMap) -> RequestId {
    headers
        .get(REQUEST_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(RequestId::from)
        .unwrap_or_else(RequestId::generate)
}

/// Route template used as the `path` metric label.
pub fn metric_path(extensions: &Extensions) -> &str {
    extensions
        .get::<MatchedPath>()
        .map(MatchedPath::as_str)
        .unwrap_or("unmatched")
}

fn status_bucket(status: u16) -> &'static str {
    match status {
        200..=299 => "2xx",
        300..=399 => "3xx",
        400..=499 => "4xx",
        500..=599 => "5xx",
        _ => "other",
    }
}

fn content_length(headers: &HeaderMap) -> Option<f64> {
    headers
        .get(header::CONTENT_LENGTH)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse::<f64>().ok())
}

pub async fn track_requests(mut req: Request, next: Next) -> Response {
    let start = Instant::now();
    let method = req.method().to_string();
    let path = metric_path(req.extensions()).to_string();

    if let Some(size) = content_length(req.headers()) {
        metrics::histogram!(
            "http_request_size_bytes",
            "method" => method.clone(),
            "path" => path.clone()
        )
        .record(size);
    }

    let request_id = extract_or_generate_request_id(req.headers());
    req.extensions_mut().insert(request_id.clone());

    let span = info_span!(
        "request",
        request_id = %request_id,
        method = %method,
        path = %req.uri().path(),
    );

    let mut response = async {
        tracing::info!("handling request");
        next.run(req).await
    }
    .instrument(span.clone())
    .await;

    let elapsed = start.elapsed().as_secs_f64();
    let status = response.status().as_u16();

    metrics::counter!(
        "http_requests_total",
        "method" => method.clone(),
        "path" => path.clone(),
        "status" => status_bucket(status)
    )
    .increment(1);

    metrics::histogram!(
        "http_request_duration_seconds",
        "method" => method.clone(),
        "path" => path.clone()
    )
    .record(elapsed);

    if let Some(size) = content_length(response.headers()) {
        metrics::histogram!(
            "http_response_size_bytes",
            "method" => method,
            "path" => path
        )
        .record(size);
    }

    span.in_scope(|| {
        tracing::info!(status, latency_ms = elapsed * 1000.0, "request completed");
    });

    if let Ok(value) = HeaderValue::from_str(request_id.as_str()) {
        response
            .headers_mut()
            .insert(HeaderName::from_static(REQUEST_ID_HEADER), value);
    }

    response
}
