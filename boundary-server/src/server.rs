use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;
use tracing::info;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::application::course_service::CourseService;
use crate::application::payment_service::PaymentService;
use crate::data::repositories::memory::course_repository::MemoryCourseRepository;
use crate::data::repositories::memory::payment_repository::MemoryPaymentRepository;
use crate::domain::failure::FailureKind;
use crate::infrastructure::payment_gateway::DynPaymentGateway;
use crate::infrastructure::settings::Settings;
use crate::presentation::AppState;
use crate::presentation::http::boundaries::{courses_boundary, payments_boundary};
use crate::presentation::http::middleware::cors::apply_cors;
use crate::presentation::http::middleware::limits::apply_limits;
use crate::presentation::http::middleware::trace::apply_trace;
use crate::presentation::http::openapi::ApiDoc;
use crate::presentation::http::routes;
use crate::presentation::http::translation::KindMatching;

pub(crate) fn build_state(
    matching: KindMatching,
    gateway: DynPaymentGateway,
) -> anyhow::Result<AppState> {
    let courses = courses_boundary(matching)?;
    let payments = payments_boundary(matching)?;
    for boundary in [&courses, &payments] {
        let table = boundary.table();
        let mapped = FailureKind::ALL
            .iter()
            .filter_map(|kind| {
                table
                    .status_for(*kind)
                    .map(|status| format!("{kind}={}", status.as_u16()))
            })
            .collect::<Vec<_>>()
            .join(",");
        info!(
            boundary = boundary.name(),
            matching = ?table.matching(),
            %mapped,
            "translation table ready"
        );
    }

    let course_service = Arc::new(CourseService::new(MemoryCourseRepository::new()));
    let payment_service = Arc::new(PaymentService::new(
        MemoryPaymentRepository::seeded(),
        gateway,
    ));

    Ok(AppState::new(
        course_service,
        payment_service,
        courses,
        payments,
    ))
}

pub(crate) async fn run_http(settings: &Settings, state: AppState) -> anyhow::Result<()> {
    let app = build_router(state);
    let app = apply_limits(app, settings);
    let app = apply_trace(app);
    let app = apply_cors(app, settings)?;

    let listener = TcpListener::bind(&settings.http_addr).await?;

    info!("HTTP server listening on {}", settings.http_addr);
    axum::serve(listener, app).await?;
    Ok(())
}

pub(crate) fn build_router(state: AppState) -> Router {
    routes::router(state)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;
    use axum::{
        Router,
        body::{Body, to_bytes},
        http::{Method, Request, StatusCode, header},
    };
    use tower::ServiceExt;

    use super::{build_router, build_state};
    use crate::domain::failure::Failure;
    use crate::infrastructure::payment_gateway::{ChargeReceipt, PaymentGateway, SandboxGateway};
    use crate::presentation::http::translation::KindMatching;

    struct TimingOutGateway;

    #[async_trait]
    impl PaymentGateway for TimingOutGateway {
        async fn charge(
            &self,
            _customer_id: i64,
            _amount_cents: i64,
        ) -> Result<ChargeReceipt, Failure> {
            Err(Failure::timeout("provider did not answer in 30s"))
        }
    }

    fn app() -> Router {
        let state = build_state(KindMatching::Exact, Box::new(SandboxGateway))
            .expect("state must build");
        build_router(state)
    }

    async fn send(
        app: Router,
        method: Method,
        uri: &str,
        body: Option<serde_json::Value>,
    ) -> (StatusCode, serde_json::Value) {
        let mut request = Request::builder().method(method).uri(uri);
        let body = match body {
            Some(json) => {
                request = request.header(header::CONTENT_TYPE, "application/json");
                Body::from(json.to_string())
            }
            None => Body::empty(),
        };

        let response = app
            .oneshot(request.body(body).expect("request must build"))
            .await
            .expect("router is infallible");
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body must be readable");
        let json = serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null);
        (status, json)
    }

    #[tokio::test]
    async fn healthz_is_ok() {
        let (status, body) = send(app(), Method::GET, "/healthz", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, serde_json::json!({ "status": "ok" }));
    }

    #[tokio::test]
    async fn create_course_with_bad_dates_returns_field_mapping() {
        let payload = serde_json::json!({
            "name": "Rust",
            "start_date": "2026-05-01",
            "end_date": "2026-04-01"
        });

        let (status, body) = send(app(), Method::POST, "/api/courses", Some(payload)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            body,
            serde_json::json!({ "start_date": ["must be before end_date"] })
        );
    }

    #[tokio::test]
    async fn create_course_with_empty_name_is_rejected_by_dto_validation() {
        let payload = serde_json::json!({
            "name": "",
            "start_date": "2026-04-01",
            "end_date": "2026-05-01"
        });

        let (status, body) = send(app(), Method::POST, "/api/courses", Some(payload)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body.get("name").is_some(), "unexpected body {body}");
    }

    #[tokio::test]
    async fn create_then_fetch_course() {
        let app = app();
        let payload = serde_json::json!({
            "name": "Rust",
            "start_date": "2026-04-01",
            "end_date": "2026-05-01"
        });

        let (status, created) =
            send(app.clone(), Method::POST, "/api/courses", Some(payload.clone())).await;
        assert_eq!(status, StatusCode::CREATED);
        let id = created["id"].as_i64().expect("id must be numeric");

        let uri = format!("/api/courses/{id}");
        let (status, fetched) = send(app.clone(), Method::GET, &uri, None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(fetched["name"], "Rust");

        let (status, body) = send(app, Method::POST, "/api/courses", Some(payload)).await;
        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(body, serde_json::json!("course 'Rust' already exists"));
    }

    #[tokio::test]
    async fn missing_course_is_not_found() {
        let (status, body) = send(app(), Method::GET, "/api/courses/404", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, serde_json::json!("course id: 404"));
    }

    #[tokio::test]
    async fn inactive_customer_purchase_is_forbidden() {
        let payload = serde_json::json!({ "customer_id": 3, "item_id": 1 });

        let (status, body) = send(app(), Method::POST, "/api/payments", Some(payload)).await;
        assert_eq!(status, StatusCode::FORBIDDEN);
        assert_eq!(
            body,
            serde_json::json!("inactive customers cannot purchase items")
        );
    }

    #[tokio::test]
    async fn unpurchasable_item_uses_detailed_body() {
        let payload = serde_json::json!({ "customer_id": 1, "item_id": 3 });

        let (status, body) = send(app(), Method::POST, "/api/payments", Some(payload)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            body,
            serde_json::json!({
                "message": "validation failed",
                "extra": { "fields": { "item_id": ["item is not available for purchase"] } }
            })
        );
    }

    #[tokio::test]
    async fn repeated_purchase_is_conflict_with_payment_detail() {
        let app = app();
        let payload = serde_json::json!({ "customer_id": 1, "item_id": 1 });

        let (status, payment) =
            send(app.clone(), Method::POST, "/api/payments", Some(payload.clone())).await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(payment["amount_cents"], 4900);

        let (status, body) = send(app, Method::POST, "/api/payments", Some(payload)).await;
        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(body["message"], "item already purchased");
        assert_eq!(body["extra"]["detail"]["payment_id"], payment["id"]);
    }

    #[tokio::test]
    async fn gateway_timeout_surfaces_as_opaque_server_error() {
        let state = build_state(KindMatching::Exact, Box::new(TimingOutGateway))
            .expect("state must build");
        let payload = serde_json::json!({ "customer_id": 1, "item_id": 2 });

        let (status, body) = send(
            build_router(state),
            Method::POST,
            "/api/payments",
            Some(payload),
        )
        .await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, serde_json::json!("internal error"));
    }

    #[tokio::test]
    async fn items_are_listed() {
        let (status, body) = send(app(), Method::GET, "/api/items", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.as_array().map(Vec::len), Some(3));
    }
}
