//! Клиентская библиотека для REST API `boundary-server`.
//!
//! Ошибки сервера приходят в одном из трёх форматов (ошибки по полям,
//! одиночное сообщение или `{message, extra}`) и разбираются в [`ErrorBody`].
#![warn(missing_docs)]

mod error;
mod http_client;
mod models;

pub use error::{ClientError, ClientResult, ErrorBody};
pub use http_client::BoundaryClient;
pub use models::{Course, CourseStatus, Item, Payment};
