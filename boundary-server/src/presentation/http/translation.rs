use std::collections::{BTreeMap, HashMap};

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;

use crate::domain::failure::{Failure, FailureKind, RenderedMessage};

/// Body of an error response.
///
/// Serialized untagged: a field mapping is sent verbatim, a message is sent as
/// a bare JSON string.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(untagged)]
pub(crate) enum WireBody {
    Fields(BTreeMap<String, Vec<String>>),
    Message(String),
    Detailed {
        message: String,
        #[schema(value_type = Object)]
        extra: serde_json::Value,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct WireResponse {
    pub(crate) status: StatusCode,
    pub(crate) body: WireBody,
}

impl IntoResponse for WireResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.body)).into_response()
    }
}

pub(crate) type WireConstructor = fn(&Failure) -> WireBody;

/// Default constructor: field mapping, else joined messages, else default text.
pub(crate) fn render_body(failure: &Failure) -> WireBody {
    match failure.render_message() {
        RenderedMessage::Fields(fields) => WireBody::Fields(fields),
        RenderedMessage::Text(text) => WireBody::Message(text),
    }
}

/// `{"message": ..., "extra": {...}}` where `extra` carries field errors and
/// the failure detail, if any.
pub(crate) fn render_with_detail(failure: &Failure) -> WireBody {
    let mut extra = serde_json::Map::new();
    let message = match failure.render_message() {
        RenderedMessage::Fields(fields) => {
            extra.insert("fields".to_string(), serde_json::json!(fields));
            "validation failed".to_string()
        }
        RenderedMessage::Text(text) => text,
    };
    if let Some(detail) = failure.detail() {
        extra.insert("detail".to_string(), detail.clone());
    }

    WireBody::Detailed {
        message,
        extra: serde_json::Value::Object(extra),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) enum KindMatching {
    /// Only the failure's own kind is looked up.
    #[default]
    Exact,
    /// The failure's lineage is walked; the most specific registered kind wins.
    Hierarchy,
}

impl std::str::FromStr for KindMatching {
    type Err = TableError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "exact" => Ok(KindMatching::Exact),
            "hierarchy" => Ok(KindMatching::Hierarchy),
            _ => Err(TableError::UnknownMatching(raw.to_string())),
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub(crate) enum TableError {
    #[error("failure kind '{0}' is mapped more than once")]
    DuplicateKind(FailureKind),

    #[error("unknown failure matching mode '{0}', expecting 'exact' or 'hierarchy'")]
    UnknownMatching(String),
}

#[derive(Clone, Copy)]
struct TableEntry {
    status: StatusCode,
    construct: WireConstructor,
}

/// Failure kind to wire status/constructor mapping. Immutable once built.
pub(crate) struct TranslationTable {
    matching: KindMatching,
    entries: HashMap<FailureKind, TableEntry>,
}

impl TranslationTable {
    pub(crate) fn builder() -> TranslationTableBuilder {
        TranslationTableBuilder::default()
    }

    pub(crate) fn matching(&self) -> KindMatching {
        self.matching
    }

    pub(crate) fn status_for(&self, kind: FailureKind) -> Option<StatusCode> {
        self.entries.get(&kind).map(|entry| entry.status)
    }

    /// Converts a mapped failure into a response. An unmapped failure comes
    /// back unchanged in `Err`.
    pub(crate) fn translate(&self, failure: Failure) -> Result<WireResponse, Failure> {
        match self.lookup(failure.kind()) {
            Some(entry) => Ok(WireResponse {
                status: entry.status,
                body: (entry.construct)(&failure),
            }),
            None => Err(failure),
        }
    }

    fn lookup(&self, kind: FailureKind) -> Option<&TableEntry> {
        match self.matching {
            KindMatching::Exact => self.entries.get(&kind),
            KindMatching::Hierarchy => kind.lineage().find_map(|k| self.entries.get(&k)),
        }
    }
}

#[derive(Default)]
pub(crate) struct TranslationTableBuilder {
    matching: KindMatching,
    entries: Vec<(FailureKind, TableEntry)>,
}

impl TranslationTableBuilder {
    pub(crate) fn matching(mut self, matching: KindMatching) -> Self {
        self.matching = matching;
        self
    }

    pub(crate) fn map(self, kind: FailureKind, status: StatusCode) -> Self {
        self.map_with(kind, status, render_body)
    }

    pub(crate) fn map_with(
        mut self,
        kind: FailureKind,
        status: StatusCode,
        construct: WireConstructor,
    ) -> Self {
        self.entries.push((kind, TableEntry { status, construct }));
        self
    }

    pub(crate) fn build(self) -> Result<TranslationTable, TableError> {
        let mut entries = HashMap::with_capacity(self.entries.len());
        for (kind, entry) in self.entries {
            if entries.insert(kind, entry).is_some() {
                return Err(TableError::DuplicateKind(kind));
            }
        }

        Ok(TranslationTable {
            matching: self.matching,
            entries,
        })
    }
}
