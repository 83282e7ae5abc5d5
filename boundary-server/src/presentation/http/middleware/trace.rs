use axum::{Router, body::Body, http::Request};
use tower_http::trace::TraceLayer;
use tracing::info_span;

pub(crate) fn apply_trace(router: Router) -> Router {
    router.layer(TraceLayer::new_for_http().make_span_with(|request: &Request<Body>| {
        info_span!(
            "http_request",
            method = %request.method(),
            path = %request.uri().path(),
            boundary = boundary_for_path(request.uri().path()),
        )
    }))
}

/// Name of the translation boundary that answers requests under `path`.
fn boundary_for_path(path: &str) -> &'static str {
    if path.starts_with("/api/courses") {
        "courses"
    } else if path.starts_with("/api/items") || path.starts_with("/api/payments") {
        "payments"
    } else {
        "none"
    }
}
