pub(crate) mod course_repository;
pub(crate) mod payment_repository;
pub(crate) mod repositories;
