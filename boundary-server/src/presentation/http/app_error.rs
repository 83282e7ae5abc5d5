use std::sync::Arc;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use tracing::{debug, error};

use crate::domain::failure::Failure;
use crate::presentation::http::translation::{TranslationTable, WireBody, WireResponse};

#[derive(Debug, Error)]
pub(crate) enum ApiError {
    #[error("failure translated to a wire response")]
    Translated(WireResponse),

    #[error("unhandled failure: {0}")]
    Unhandled(Failure),
}

pub(crate) type ApiResult<T> = Result<T, ApiError>;

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Translated(response) => response.into_response(),
            ApiError::Unhandled(failure) => {
                error!(kind = %failure.kind(), error = %failure, "unhandled failure");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(WireBody::Message("internal error".to_string())),
                )
                    .into_response()
            }
        }
    }
}

/// Interception point between services and one endpoint group.
#[derive(Clone)]
pub(crate) struct Boundary {
    name: &'static str,
    table: Arc<TranslationTable>,
}

impl Boundary {
    pub(crate) fn new(name: &'static str, table: TranslationTable) -> Self {
        Self {
            name,
            table: Arc::new(table),
        }
    }

    pub(crate) fn name(&self) -> &'static str {
        self.name
    }

    pub(crate) fn table(&self) -> &TranslationTable {
        &self.table
    }

    pub(crate) fn reject(&self, failure: Failure) -> ApiError {
        match self.table.translate(failure) {
            Ok(response) => {
                debug!(boundary = self.name, status = %response.status, "failure translated");
                ApiError::Translated(response)
            }
            Err(failure) => ApiError::Unhandled(failure),
        }
    }

    pub(crate) fn intercept<T>(&self, result: Result<T, Failure>) -> ApiResult<T> {
        result.map_err(|failure| self.reject(failure))
    }
}
