pub(crate) mod course_service;
pub(crate) mod payment_service;
