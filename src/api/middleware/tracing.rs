//! HTTP request/response tracing middleware.

use axum::{body::Body, http::Request};
use tower_http::LatencyUnit;
use tower_http::classify::{ServerErrorsAsFailures, SharedClassifier};
use tower_http::trace::{DefaultOnResponse, TraceLayer};
use tracing::{Level, Span};

use crate::api::versioning::VERSION_HEADER;

type MakeSpanFn = fn(&Request<Body>) -> Span;

/// Opens the per-request span.
///
/// Records the requested API version alongside method and URI, `default`
/// when the client did not send `X-Version` (a `ver` query parameter is
/// visible in the URI).
fn make_span(request: &Request<Body>) -> Span {
    let api_version = request
        .headers()
        .get(&VERSION_HEADER)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("default");

    tracing::info_span!(
        "request",
        method = %request.method(),
        uri = %request.uri(),
        version = ?request.version(),
        api_version = %api_version,
    )
}

/// Creates a tracing middleware for HTTP requests.
///
/// # Logging Behavior
///
/// **On Request:**
/// - Creates a span at `INFO` level with:
///   - HTTP method
///   - URI path
///   - HTTP version
///   - requested API version
///
/// **On Response:**
/// - Logs at `INFO` level with:
///   - Status code
///   - Latency in milliseconds
///
/// # Example Logs
///
/// ```text
/// INFO request{method=GET uri=/api/camps?ver=2.0 version=HTTP/1.1 api_version=default}: finished processing request latency=3 ms status=200
/// ```
pub fn layer() -> TraceLayer<SharedClassifier<ServerErrorsAsFailures>, MakeSpanFn> {
    TraceLayer::new_for_http()
        .make_span_with(make_span as MakeSpanFn)
        .on_response(
            DefaultOnResponse::new()
                .level(Level::INFO)
                .latency_unit(LatencyUnit::Millis),
        )
}
