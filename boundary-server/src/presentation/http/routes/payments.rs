use axum::{
    Router,
    routing::{get, post},
};

use crate::presentation::AppState;
use crate::presentation::http::handlers::payments::{list_items, purchase_item};

pub(crate) fn router() -> Router<AppState> {
    Router::new()
        .route("/api/items", get(list_items))
        .route("/api/payments", post(purchase_item))
}
