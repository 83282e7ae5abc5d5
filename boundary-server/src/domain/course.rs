use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::failure::{Failure, FailureKind, FieldMessages};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct Course {
    pub(crate) id: i64,
    pub(crate) name: String,
    pub(crate) start_date: NaiveDate,
    pub(crate) end_date: NaiveDate,
    pub(crate) created_at: DateTime<Utc>,
}

impl Course {
    pub(crate) fn is_started(&self, today: NaiveDate) -> bool {
        self.start_date <= today
    }

    pub(crate) fn is_finished(&self, today: NaiveDate) -> bool {
        self.end_date < today
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct CreateCourseRequest {
    pub(crate) name: String,
    pub(crate) start_date: NaiveDate,
    pub(crate) end_date: NaiveDate,
}

impl CreateCourseRequest {
    /// Normalizes the name and reports every invalid field at once.
    pub(crate) fn validate(self) -> Result<Self, Failure> {
        let mut errors = FieldMessages::new();

        let name = self.name.trim().to_string();
        if name.is_empty() {
            push(&mut errors, "name", "must not be blank");
        } else if name.chars().count() > 255 {
            push(&mut errors, "name", "must be at most 255 chars");
        }

        if self.start_date >= self.end_date {
            push(&mut errors, "start_date", "must be before end_date");
        }

        if !errors.is_empty() {
            return Err(Failure::fields(FailureKind::Validation, errors));
        }

        Ok(Self { name, ..self })
    }
}

fn push(errors: &mut FieldMessages, field: &str, message: &str) {
    errors
        .entry(field.to_string())
        .or_default()
        .push(message.to_string());
}
