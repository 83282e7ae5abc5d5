use axum::http::StatusCode;

use crate::domain::failure::FailureKind;
use crate::presentation::http::app_error::Boundary;
use crate::presentation::http::translation::{
    KindMatching, TableError, TranslationTable, render_with_detail,
};

// Timeout and Unexpected stay unmapped on purpose: they surface as 500.

pub(crate) fn courses_boundary(matching: KindMatching) -> Result<Boundary, TableError> {
    let table = TranslationTable::builder()
        .matching(matching)
        .map(FailureKind::Validation, StatusCode::BAD_REQUEST)
        .map(FailureKind::Value, StatusCode::BAD_REQUEST)
        .map(FailureKind::NotFound, StatusCode::NOT_FOUND)
        .map(FailureKind::Conflict, StatusCode::CONFLICT)
        .map(FailureKind::Permission, StatusCode::FORBIDDEN)
        .build()?;
    Ok(Boundary::new("courses", table))
}

pub(crate) fn payments_boundary(matching: KindMatching) -> Result<Boundary, TableError> {
    let table = TranslationTable::builder()
        .matching(matching)
        .map_with(
            FailureKind::Validation,
            StatusCode::BAD_REQUEST,
            render_with_detail,
        )
        .map(FailureKind::Value, StatusCode::BAD_REQUEST)
        .map(FailureKind::Permission, StatusCode::FORBIDDEN)
        .map(FailureKind::NotFound, StatusCode::NOT_FOUND)
        .map_with(FailureKind::Conflict, StatusCode::CONFLICT, render_with_detail)
        .build()?;
    Ok(Boundary::new("payments", table))
}
