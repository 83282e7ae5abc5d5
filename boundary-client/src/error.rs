use std::collections::BTreeMap;
use std::fmt;

use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
/// Тело ответа с ошибкой, как его отдаёт `boundary-server`.
pub enum ErrorBody {
    /// `{"message": "...", "extra": {...}}`.
    Detailed {
        /// Текст ошибки.
        message: String,
        /// Ошибки полей (`extra.fields`) и детали (`extra.detail`).
        extra: serde_json::Value,
    },
    /// Ошибки валидации по полям: `{"field": ["message", ...]}`.
    Fields(BTreeMap<String, Vec<String>>),
    /// Одиночное сообщение.
    Message(String),
}

impl ErrorBody {
    /// Ошибки полей, если сервер их вернул (в том числе внутри `extra.fields`).
    pub fn field_errors(&self) -> Option<BTreeMap<String, Vec<String>>> {
        match self {
            ErrorBody::Fields(fields) => Some(fields.clone()),
            ErrorBody::Detailed { extra, .. } => extra
                .get("fields")
                .and_then(|fields| serde_json::from_value(fields.clone()).ok()),
            ErrorBody::Message(_) => None,
        }
    }

    /// Детали ошибки из `extra.detail`.
    pub fn detail(&self) -> Option<&serde_json::Value> {
        match self {
            ErrorBody::Detailed { extra, .. } => extra.get("detail"),
            _ => None,
        }
    }

    fn from_raw(status: reqwest::StatusCode, raw: &[u8]) -> Self {
        serde_json::from_slice(raw).unwrap_or_else(|_| Self::Message(format!("http status {status}")))
    }
}

impl fmt::Display for ErrorBody {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorBody::Detailed { message, .. } | ErrorBody::Message(message) => {
                f.write_str(message)
            }
            ErrorBody::Fields(fields) => {
                let rendered = fields
                    .iter()
                    .map(|(field, messages)| format!("{field}: {}", messages.join(", ")))
                    .collect::<Vec<_>>()
                    .join("; ");
                f.write_str(&rendered)
            }
        }
    }
}

#[derive(Debug, Error)]
/// Ошибки клиентской библиотеки `boundary-client`.
pub enum ClientError {
    /// Ошибка HTTP-транспорта (`reqwest`).
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// Некорректный запрос или ошибка валидации (400).
    #[error("invalid request: {0}")]
    Invalid(ErrorBody),

    /// Операция запрещена (403).
    #[error("forbidden: {0}")]
    Forbidden(ErrorBody),

    /// Запрошенный ресурс не найден (404).
    #[error("not found: {0}")]
    NotFound(ErrorBody),

    /// Конфликт с текущим состоянием (409).
    #[error("conflict: {0}")]
    Conflict(ErrorBody),

    /// Любой другой неуспешный статус, в том числе непереведённые ошибки (500).
    #[error("server error {status}: {body}")]
    Server {
        /// HTTP-статус ответа.
        status: u16,
        /// Тело ответа.
        body: ErrorBody,
    },
}

/// Результат операций `boundary-client`.
pub type ClientResult<T> = Result<T, ClientError>;

impl ClientError {
    pub(crate) fn from_http_status(status: reqwest::StatusCode, raw_body: &[u8]) -> Self {
        let body = ErrorBody::from_raw(status, raw_body);
        match status {
            reqwest::StatusCode::BAD_REQUEST => Self::Invalid(body),
            reqwest::StatusCode::FORBIDDEN => Self::Forbidden(body),
            reqwest::StatusCode::NOT_FOUND => Self::NotFound(body),
            reqwest::StatusCode::CONFLICT => Self::Conflict(body),
            _ => Self::Server {
                status: status.as_u16(),
                body,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use reqwest::StatusCode;

    use super::{ClientError, ErrorBody};

    #[test]
    fn field_mapping_body_decodes_as_fields() {
        let err = ClientError::from_http_status(
            StatusCode::BAD_REQUEST,
            br#"{"start_date":["must be before end_date"]}"#,
        );

        match err {
            ClientError::Invalid(body) => {
                let fields = body.field_errors().expect("fields must be present");
                assert_eq!(fields["start_date"], vec!["must be before end_date".to_string()]);
            }
            other => panic!("expected Invalid, got {other:?}"),
        }
    }

    #[test]
    fn string_body_decodes_as_message() {
        let err = ClientError::from_http_status(StatusCode::FORBIDDEN, br#""denied""#);

        match err {
            ClientError::Forbidden(body) => {
                assert_eq!(body, ErrorBody::Message("denied".to_string()));
                assert!(body.field_errors().is_none());
            }
            other => panic!("expected Forbidden, got {other:?}"),
        }
    }

    #[test]
    fn detailed_body_exposes_fields_and_detail() {
        let err = ClientError::from_http_status(
            StatusCode::CONFLICT,
            br#"{"message":"item already purchased","extra":{"detail":{"payment_id":4}}}"#,
        );

        match err {
            ClientError::Conflict(body) => {
                assert_eq!(body.to_string(), "item already purchased");
                assert_eq!(
                    body.detail(),
                    Some(&serde_json::json!({ "payment_id": 4 }))
                );
                assert!(body.field_errors().is_none());
            }
            other => panic!("expected Conflict, got {other:?}"),
        }
    }

    #[test]
    fn not_found_keeps_the_server_message() {
        let err = ClientError::from_http_status(StatusCode::NOT_FOUND, br#""course id: 404""#);

        match err {
            ClientError::NotFound(body) => {
                assert_eq!(body, ErrorBody::Message("course id: 404".to_string()));
            }
            other => panic!("expected NotFound, got {other:?}"),
        }
    }

    #[test]
    fn unknown_status_with_garbage_body_is_server_error() {
        let err = ClientError::from_http_status(StatusCode::BAD_GATEWAY, b"<html>");

        match err {
            ClientError::Server { status, body } => {
                assert_eq!(status, 502);
                assert_eq!(
                    body,
                    ErrorBody::Message("http status 502 Bad Gateway".to_string())
                );
            }
            other => panic!("expected Server, got {other:?}"),
        }
    }

    #[test]
    fn opaque_internal_error_is_server_error() {
        let err = ClientError::from_http_status(
            StatusCode::INTERNAL_SERVER_ERROR,
            br#""internal error""#,
        );
        assert_eq!(err.to_string(), "server error 500: internal error");
    }
}
