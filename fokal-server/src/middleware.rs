//! HTTP middleware for logging requests and responses.

use std::time::Duration;

use axum::{Router, extract::Request, response::Response};
use tower::ServiceBuilder;
use tower_http::classify::ServerErrorsFailureClass;
use tower_http::trace::TraceLayer;
use tracing::{Span, error, info, warn};

/// Wrap `router` in a request-tracing layer.
///
/// Every request gets an `http_request` span carrying method and URI; the
/// response status and latency are recorded on it when the response is sent.
pub fn trace_requests(router: Router) -> Router {
    router.layer(ServiceBuilder::new().layer(
        TraceLayer::new_for_http()
            .make_span_with(|request: &Request| {
                tracing::info_span!(
                    "http_request",
                    method = %request.method(),
                    uri = %request.uri(),
                    status = tracing::field::Empty,
                    latency_ms = tracing::field::Empty,
                )
            })
            .on_request(|request: &Request, _span: &Span| {
                info!("Started {} request to {}", request.method(), request.uri());
            })
            .on_response(|response: &Response, latency: Duration, span: &Span| {
                let status = response.status().as_u16();
                span.record("status", status);
                span.record("latency_ms", latency.as_millis() as u64);

                if status < 400 {
                    info!("Completed request with status {} in {:?}", status, latency);
                } else if status < 500 {
                    warn!("Request error (client): status {} in {:?}", status, latency);
                } else {
                    error!("Request error (server): status {} in {:?}", status, latency);
                }
            })
            .on_failure(
                |failure: ServerErrorsFailureClass, latency: Duration, _span: &Span| {
                    error!(%failure, ?latency, "Request processing failed");
                },
            ),
    ))
}
