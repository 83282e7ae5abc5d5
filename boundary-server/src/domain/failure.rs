use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;
use validator::ValidationErrors;

/// Discriminator of a business failure.
///
/// Kinds form an explicit shallow hierarchy via [`FailureKind::parent`];
/// translation tables decide whether they look at it (see `KindMatching`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub(crate) enum FailureKind {
    Value,
    Validation,
    Permission,
    NotFound,
    Conflict,
    Timeout,
    Unexpected,
}

impl FailureKind {
    pub(crate) const ALL: [FailureKind; 7] = [
        FailureKind::Value,
        FailureKind::Validation,
        FailureKind::Permission,
        FailureKind::NotFound,
        FailureKind::Conflict,
        FailureKind::Timeout,
        FailureKind::Unexpected,
    ];

    pub(crate) fn parent(self) -> Option<FailureKind> {
        match self {
            FailureKind::Validation | FailureKind::Conflict => Some(FailureKind::Value),
            FailureKind::Value
            | FailureKind::Permission
            | FailureKind::NotFound
            | FailureKind::Timeout
            | FailureKind::Unexpected => None,
        }
    }

    /// The kind itself, then its ancestors, most specific first.
    pub(crate) fn lineage(self) -> impl Iterator<Item = FailureKind> {
        std::iter::successors(Some(self), |kind| kind.parent())
    }

    pub(crate) fn as_str(self) -> &'static str {
        match self {
            FailureKind::Value => "value",
            FailureKind::Validation => "validation",
            FailureKind::Permission => "permission",
            FailureKind::NotFound => "not_found",
            FailureKind::Conflict => "conflict",
            FailureKind::Timeout => "timeout",
            FailureKind::Unexpected => "unexpected",
        }
    }

    fn default_text(self) -> &'static str {
        match self {
            FailureKind::Value => "invalid value",
            FailureKind::Validation => "validation failed",
            FailureKind::Permission => "permission denied",
            FailureKind::NotFound => "resource not found",
            FailureKind::Conflict => "resource already exists",
            FailureKind::Timeout => "operation timed out",
            FailureKind::Unexpected => "unexpected failure",
        }
    }
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub(crate) type FieldMessages = BTreeMap<String, Vec<String>>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum FailureMessage {
    Fields(FieldMessages),
    Messages(Vec<String>),
    Default,
}

/// What a consumer of the failure is allowed to see.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum RenderedMessage {
    Fields(FieldMessages),
    Text(String),
}

/// A typed condition raised by business logic.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Failure {
    kind: FailureKind,
    message: FailureMessage,
    detail: Option<serde_json::Value>,
}

impl Failure {
    pub(crate) fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self::messages(kind, vec![message.into()])
    }

    /// Failure without an explicit message; renders the kind's default text.
    pub(crate) fn bare(kind: FailureKind) -> Self {
        Self {
            kind,
            message: FailureMessage::Default,
            detail: None,
        }
    }

    pub(crate) fn messages(kind: FailureKind, messages: Vec<String>) -> Self {
        if messages.is_empty() {
            return Self::bare(kind);
        }
        Self {
            kind,
            message: FailureMessage::Messages(messages),
            detail: None,
        }
    }

    pub(crate) fn fields(kind: FailureKind, fields: FieldMessages) -> Self {
        if fields.is_empty() {
            return Self::bare(kind);
        }
        Self {
            kind,
            message: FailureMessage::Fields(fields),
            detail: None,
        }
    }

    pub(crate) fn field(
        kind: FailureKind,
        field: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        let mut fields = FieldMessages::new();
        fields.insert(field.into(), vec![message.into()]);
        Self::fields(kind, fields)
    }

    pub(crate) fn validation_field(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::field(FailureKind::Validation, field, message)
    }

    pub(crate) fn permission(message: impl Into<String>) -> Self {
        Self::new(FailureKind::Permission, message)
    }

    pub(crate) fn not_found(message: impl Into<String>) -> Self {
        Self::new(FailureKind::NotFound, message)
    }

    pub(crate) fn conflict(message: impl Into<String>) -> Self {
        Self::new(FailureKind::Conflict, message)
    }

    pub(crate) fn timeout(message: impl Into<String>) -> Self {
        Self::new(FailureKind::Timeout, message)
    }

    pub(crate) fn unexpected(message: impl Into<String>) -> Self {
        Self::new(FailureKind::Unexpected, message)
    }

    pub(crate) fn with_detail(mut self, detail: serde_json::Value) -> Self {
        self.detail = Some(detail);
        self
    }

    pub(crate) fn kind(&self) -> FailureKind {
        self.kind
    }

    pub(crate) fn detail(&self) -> Option<&serde_json::Value> {
        self.detail.as_ref()
    }

    /// Field mapping if present, else the joined message list, else the
    /// default string form.
    pub(crate) fn render_message(&self) -> RenderedMessage {
        match &self.message {
            FailureMessage::Fields(fields) => RenderedMessage::Fields(fields.clone()),
            FailureMessage::Messages(messages) => RenderedMessage::Text(messages.join(", ")),
            FailureMessage::Default => RenderedMessage::Text(self.to_string()),
        }
    }
}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.message {
            FailureMessage::Fields(fields) => {
                let rendered = fields
                    .iter()
                    .map(|(field, messages)| format!("{field}: {}", messages.join(", ")))
                    .collect::<Vec<_>>()
                    .join("; ");
                f.write_str(&rendered)
            }
            FailureMessage::Messages(messages) => f.write_str(&messages.join(", ")),
            FailureMessage::Default => f.write_str(self.kind.default_text()),
        }
    }
}

impl std::error::Error for Failure {}

impl From<ValidationErrors> for Failure {
    fn from(errors: ValidationErrors) -> Self {
        let fields = errors
            .field_errors()
            .into_iter()
            .map(|(field, errors)| {
                let messages = errors
                    .iter()
                    .map(|err| match &err.message {
                        Some(message) => message.to_string(),
                        None => err.code.to_string(),
                    })
                    .collect();
                (field.to_string(), messages)
            })
            .collect();
        Failure::fields(FailureKind::Validation, fields)
    }
}
