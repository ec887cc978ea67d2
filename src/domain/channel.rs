use crate::domain::mixins::ChannelFields;
use crate::domain::record::{Composed, FieldGroup, Record, RecordId, Sluggable};
use crate::domain::schema::{FieldSpec, FieldValue};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Flat categorisation entry; channels have no hierarchy and no publishing
/// state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Channel {
    pub id: Option<RecordId>,
    #[serde(flatten)]
    pub fields: ChannelFields,
}

impl Channel {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: None,
            fields: ChannelFields {
                name: name.into(),
                ..ChannelFields::default()
            },
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.fields.description = Some(description.into());
        self
    }

    pub fn with_order(mut self, order: u16) -> Self {
        self.fields.order = Some(order);
        self
    }

    pub fn name(&self) -> &str {
        &self.fields.name
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.fields.name)
    }
}

impl Record for Channel {
    const COLLECTION: &'static str = "channels";

    fn id(&self) -> Option<RecordId> {
        self.id
    }

    fn set_id(&mut self, id: RecordId) {
        self.id = Some(id);
    }

    fn field_specs() -> Vec<FieldSpec> {
        ChannelFields::field_specs()
    }

    fn field_value(&self, name: &str) -> Option<FieldValue> {
        self.fields.field_value(name)
    }
}

impl Sluggable for Channel {}

impl Composed for Channel {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::DomainError;
    use crate::domain::schema::validate_fields;

    #[test]
    fn displays_as_its_name() {
        let channel = Channel::new("Politics").with_order(2);
        assert_eq!(channel.to_string(), "Politics");
        assert_eq!(channel.field_value("order"), Some(FieldValue::Integer(2)));
        assert_eq!(channel.field_value("description"), Some(FieldValue::Null));
    }

    #[test]
    fn name_is_required_and_bounded() {
        assert!(validate_fields(&Channel::new("Sports")).is_ok());
        assert_eq!(
            validate_fields(&Channel::new("")).unwrap_err(),
            DomainError::Validation("name: this field cannot be blank".into())
        );
        assert!(validate_fields(&Channel::new("x".repeat(61))).is_err());
    }
}
