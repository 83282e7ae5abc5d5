pub(crate) mod course;
pub(crate) mod failure;
pub(crate) mod payment;
