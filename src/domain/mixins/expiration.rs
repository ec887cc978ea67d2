use crate::domain::record::FieldGroup;
use crate::domain::schema::{FieldKind, FieldSpec, FieldValue};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Optional moment after which a record should no longer be listed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expiration {
    pub date_expire: Option<DateTime<Utc>>,
}

impl Expiration {
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.date_expire.is_some_and(|at| at <= now)
    }
}

impl FieldGroup for Expiration {
    fn field_specs() -> Vec<FieldSpec> {
        vec![
            FieldSpec::new("date_expire", "Expiration Date", FieldKind::DateTime)
                .optional()
                .indexed(),
        ]
    }

    fn field_value(&self, name: &str) -> Option<FieldValue> {
        (name == "date_expire").then(|| FieldValue::optional_datetime(self.date_expire))
    }
}
