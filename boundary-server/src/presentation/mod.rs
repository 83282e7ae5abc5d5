use std::sync::Arc;

use crate::application::course_service::CourseService;
use crate::application::payment_service::PaymentService;
use crate::data::repositories::memory::course_repository::MemoryCourseRepository;
use crate::data::repositories::memory::payment_repository::MemoryPaymentRepository;
use crate::infrastructure::payment_gateway::DynPaymentGateway;
use crate::presentation::http::app_error::Boundary;

pub(crate) mod http;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) course_service: Arc<CourseService<MemoryCourseRepository>>,
    pub(crate) payment_service: Arc<PaymentService<MemoryPaymentRepository, DynPaymentGateway>>,
    pub(crate) courses: Boundary,
    pub(crate) payments: Boundary,
}

impl AppState {
    pub(crate) fn new(
        course_service: Arc<CourseService<MemoryCourseRepository>>,
        payment_service: Arc<PaymentService<MemoryPaymentRepository, DynPaymentGateway>>,
        courses: Boundary,
        payments: Boundary,
    ) -> Self {
        Self {
            course_service,
            payment_service,
            courses,
            payments,
        }
    }
}
