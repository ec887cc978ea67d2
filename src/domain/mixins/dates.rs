use crate::domain::record::FieldGroup;
use crate::domain::schema::{FieldKind, FieldSpec, FieldValue};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Creation and last-change timestamps, maintained on save.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateStamps {
    pub date_created: Option<DateTime<Utc>>,
    pub date_updated: Option<DateTime<Utc>>,
}

impl DateStamps {
    /// `date_created` is only written on the first save.
    pub fn stamp(&mut self, now: DateTime<Utc>, is_new: bool) {
        if is_new || self.date_created.is_none() {
            self.date_created = Some(now);
        }
        self.date_updated = Some(now);
    }
}

impl FieldGroup for DateStamps {
    fn field_specs() -> Vec<FieldSpec> {
        vec![
            FieldSpec::new("date_created", "Date created", FieldKind::DateTime).auto(),
            FieldSpec::new("date_updated", "Date updated", FieldKind::DateTime).auto(),
        ]
    }

    fn field_value(&self, name: &str) -> Option<FieldValue> {
        match name {
            "date_created" => Some(FieldValue::optional_datetime(self.date_created)),
            "date_updated" => Some(FieldValue::optional_datetime(self.date_updated)),
            _ => None,
        }
    }
}
