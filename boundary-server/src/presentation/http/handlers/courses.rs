use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::domain::course::{Course, CreateCourseRequest};
use crate::domain::failure::Failure;
use crate::presentation::AppState;
use crate::presentation::http::app_error::ApiResult;
use crate::presentation::http::translation::WireBody;

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub(crate) struct CreateCourseDto {
    #[validate(length(min = 1, max = 255))]
    pub(crate) name: String,
    pub(crate) start_date: NaiveDate,
    pub(crate) end_date: NaiveDate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub(crate) enum CourseStatus {
    Scheduled,
    Running,
    Finished,
}

#[derive(Debug, Serialize, ToSchema)]
pub(crate) struct CourseDto {
    pub(crate) id: i64,
    pub(crate) name: String,
    pub(crate) start_date: NaiveDate,
    pub(crate) end_date: NaiveDate,
    pub(crate) status: CourseStatus,
    pub(crate) created_at: DateTime<Utc>,
}

impl CourseDto {
    fn from_course(course: Course, today: NaiveDate) -> Self {
        let status = if course.is_finished(today) {
            CourseStatus::Finished
        } else if course.is_started(today) {
            CourseStatus::Running
        } else {
            CourseStatus::Scheduled
        };

        Self {
            id: course.id,
            name: course.name,
            start_date: course.start_date,
            end_date: course.end_date,
            status,
            created_at: course.created_at,
        }
    }
}

impl From<Course> for CourseDto {
    fn from(course: Course) -> Self {
        Self::from_course(course, Utc::now().date_naive())
    }
}

#[utoipa::path(
    get,
    path = "/api/courses",
    tag = "courses",
    responses(
        (status = 200, description = "Courses listed", body = [CourseDto]),
        (status = 500, description = "Internal error", body = WireBody)
    )
)]
pub(crate) async fn list_courses(
    State(state): State<AppState>,
) -> ApiResult<(StatusCode, Json<Vec<CourseDto>>)> {
    let courses = state
        .courses
        .intercept(state.course_service.list_courses().await)?;

    Ok((
        StatusCode::OK,
        Json(courses.into_iter().map(CourseDto::from).collect()),
    ))
}

#[utoipa::path(
    get,
    path = "/api/courses/{id}",
    tag = "courses",
    params(
        ("id" = i64, Path, description = "Course id")
    ),
    responses(
        (status = 200, description = "Course found", body = CourseDto),
        (status = 404, description = "Course not found", body = WireBody),
        (status = 500, description = "Internal error", body = WireBody)
    )
)]
pub(crate) async fn get_course(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<(StatusCode, Json<CourseDto>)> {
    let course = state
        .courses
        .intercept(state.course_service.get_course(id).await)?;

    Ok((StatusCode::OK, Json(CourseDto::from(course))))
}

#[utoipa::path(
    post,
    path = "/api/courses",
    tag = "courses",
    request_body = CreateCourseDto,
    responses(
        (status = 201, description = "Course created", body = CourseDto),
        (status = 400, description = "Validation error", body = WireBody),
        (status = 409, description = "Course already exists", body = WireBody),
        (status = 500, description = "Internal error", body = WireBody)
    )
)]
pub(crate) async fn create_course(
    State(state): State<AppState>,
    Json(dto): Json<CreateCourseDto>,
) -> ApiResult<(StatusCode, Json<CourseDto>)> {
    state.courses.intercept(dto.validate().map_err(Failure::from))?;
    let req = CreateCourseRequest {
        name: dto.name,
        start_date: dto.start_date,
        end_date: dto.end_date,
    };

    let course = state
        .courses
        .intercept(state.course_service.create_course(req).await)?;
    Ok((StatusCode::CREATED, Json(CourseDto::from(course))))
}
