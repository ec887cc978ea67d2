use crate::domain::record::FieldGroup;
use crate::domain::schema::{FieldKind, FieldSpec, FieldValue};
use crate::domain::status::Status;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Bare publication status, defaulting to `DRAFT`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusField {
    pub status: Status,
}

impl FieldGroup for StatusField {
    fn field_specs() -> Vec<FieldSpec> {
        vec![
            FieldSpec::new("status", "Status", FieldKind::Choice(Status::choices()))
                .max_length(Status::MAX_LENGTH)
                .indexed(),
        ]
    }

    fn field_value(&self, name: &str) -> Option<FieldValue> {
        (name == "status").then(|| FieldValue::text(self.status.as_str()))
    }
}

/// Status plus the moment a record becomes visible.
///
/// Public listings should filter on both `status == PUBLIC` and
/// `date_available <= now`; see [`Publishing::is_available`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Publishing {
    pub status: Status,
    pub date_available: Option<DateTime<Utc>>,
}

impl Publishing {
    pub fn new(status: Status) -> Self {
        Self {
            status,
            date_available: None,
        }
    }

    /// A public record without an availability date becomes available `now`.
    /// Returns whether the date was filled in.
    pub fn fill_availability(&mut self, now: DateTime<Utc>) -> bool {
        if self.status == Status::Public && self.date_available.is_none() {
            self.date_available = Some(now);
            true
        } else {
            false
        }
    }

    pub fn is_available(&self, now: DateTime<Utc>) -> bool {
        self.status == Status::Public && self.date_available.is_some_and(|at| at <= now)
    }
}

impl FieldGroup for Publishing {
    fn field_specs() -> Vec<FieldSpec> {
        let mut specs = StatusField::field_specs();
        specs.push(
            FieldSpec::new("date_available", "Date available", FieldKind::DateTime)
                .optional()
                .indexed(),
        );
        specs
    }

    fn field_value(&self, name: &str) -> Option<FieldValue> {
        match name {
            "status" => Some(FieldValue::text(self.status.as_str())),
            "date_available" => Some(FieldValue::optional_datetime(self.date_available)),
            _ => None,
        }
    }
}
