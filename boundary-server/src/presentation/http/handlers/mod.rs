pub(crate) mod courses;
pub(crate) mod payments;
