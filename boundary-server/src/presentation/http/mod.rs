pub(crate) mod app_error;
pub(crate) mod boundaries;
pub(crate) mod handlers;
pub(crate) mod middleware;
pub(crate) mod openapi;
pub(crate) mod routes;
pub(crate) mod translation;
