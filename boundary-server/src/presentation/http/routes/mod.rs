use axum::{Json, Router, routing::get};
use serde::Serialize;

use crate::presentation::AppState;

pub(crate) mod courses;
pub(crate) mod payments;

pub(crate) fn router(state: AppState) -> Router {
    Router::new()
        .route("/healthz", get(health_handler))
        .nest("/api/courses", courses::router())
        .merge(payments::router())
        .with_state(state)
}

#[derive(Debug, Serialize)]
struct HealthzResponse {
    status: &'static str,
}

async fn health_handler() -> Json<HealthzResponse> {
    Json(HealthzResponse { status: "ok" })
}
