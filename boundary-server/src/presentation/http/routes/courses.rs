use axum::{Router, routing::get};

use crate::presentation::AppState;
use crate::presentation::http::handlers::courses::{create_course, get_course, list_courses};

pub(crate) fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_courses).post(create_course))
        .route("/{id}", get(get_course))
}
