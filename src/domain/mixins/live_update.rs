use crate::domain::record::FieldGroup;
use crate::domain::schema::{FieldKind, FieldSpec, FieldValue};
use serde::{Deserialize, Serialize};

/// Marks a record that keeps being updated after publication.
/// Usually paired with `Expiration`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LiveUpdate {
    pub is_live_updating: bool,
}

impl FieldGroup for LiveUpdate {
    fn field_specs() -> Vec<FieldSpec> {
        vec![FieldSpec::new(
            "is_live_updating",
            "Live Updating Status",
            FieldKind::Boolean,
        )]
    }

    fn field_value(&self, name: &str) -> Option<FieldValue> {
        (name == "is_live_updating").then_some(FieldValue::Bool(self.is_live_updating))
    }
}
