pub(crate) mod logging;
pub(crate) mod payment_gateway;
pub(crate) mod settings;
