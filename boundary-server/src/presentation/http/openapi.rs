use utoipa::OpenApi;

use crate::presentation::http::handlers::courses::{CourseDto, CourseStatus, CreateCourseDto};
use crate::presentation::http::handlers::payments::{ItemDto, PaymentDto, PurchaseDto};
use crate::presentation::http::translation::WireBody;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::presentation::http::handlers::courses::list_courses,
        crate::presentation::http::handlers::courses::get_course,
        crate::presentation::http::handlers::courses::create_course,
        crate::presentation::http::handlers::payments::list_items,
        crate::presentation::http::handlers::payments::purchase_item
    ),
    components(
        schemas(
            CreateCourseDto,
            CourseDto,
            CourseStatus,
            PurchaseDto,
            ItemDto,
            PaymentDto,
            WireBody
        )
    ),
    tags(
        (name = "courses", description = "Course endpoints"),
        (name = "payments", description = "Item purchase endpoints")
    )
)]
pub(crate) struct ApiDoc;
