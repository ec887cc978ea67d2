use crate::domain::record::FieldGroup;
use crate::domain::schema::{FieldKind, FieldSpec, FieldValue};
use serde::{Deserialize, Serialize};

/// Name, description and ordering of a flat taxonomy entry
/// (category, section, ...).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChannelFields {
    pub name: String,
    pub description: Option<String>,
    pub order: Option<u16>,
}

impl FieldGroup for ChannelFields {
    fn field_specs() -> Vec<FieldSpec> {
        vec![
            FieldSpec::text("name", "Channel Name", 60),
            FieldSpec::new("description", "Description", FieldKind::LongText).optional(),
            FieldSpec::new("order", "Order", FieldKind::SmallUnsigned).optional(),
        ]
    }

    fn field_value(&self, name: &str) -> Option<FieldValue> {
        match name {
            "name" => Some(FieldValue::text(self.name.as_str())),
            "description" => Some(FieldValue::optional_text(self.description.as_ref())),
            "order" => Some(
                self.order
                    .map_or(FieldValue::Null, |order| FieldValue::Integer(order.into())),
            ),
            _ => None,
        }
    }
}
