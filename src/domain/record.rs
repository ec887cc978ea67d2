// src/domain/record.rs
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::mixins::{DateStamps, Publishing, SlugField, SlugSettings};
use crate::domain::schema::{FieldSpec, FieldValue};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RecordId(pub i64);

impl RecordId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::Validation("record id must be positive".into()))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<RecordId> for i64 {
    fn from(value: RecordId) -> Self {
        value.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A concrete record type assembled from field groups.
pub trait Record {
    /// Name of the collection (table) holding records of this type.
    const COLLECTION: &'static str;

    /// Identity assigned by storage; `None` until the record is first saved.
    fn id(&self) -> Option<RecordId>;

    fn set_id(&mut self, id: RecordId);

    fn field_specs() -> Vec<FieldSpec>;

    /// Current value of the named field, `None` when the record has no such field.
    fn field_value(&self, name: &str) -> Option<FieldValue>;

    fn field_spec(name: &str) -> Option<FieldSpec>
    where
        Self: Sized,
    {
        Self::field_specs().into_iter().find(|spec| spec.name == name)
    }
}

/// Per-type slug declarations. A type that declares them has them used
/// instead of the options passed to the resolver.
pub trait Sluggable: Record {
    fn slug_settings() -> Option<SlugSettings> {
        None
    }
}

/// Access to the mixins whose hooks run before a record is persisted.
/// A record returns `Some` for each group it composes.
pub trait Composed: Sluggable {
    fn dates_mut(&mut self) -> Option<&mut DateStamps> {
        None
    }

    fn publishing_mut(&mut self) -> Option<&mut Publishing> {
        None
    }

    fn slug_field_mut(&mut self) -> Option<&mut SlugField> {
        None
    }

    fn has_slug(&self) -> bool {
        false
    }
}

/// Field lookup shared by every mixin struct; a record chains its groups.
pub trait FieldGroup {
    fn field_specs() -> Vec<FieldSpec>;

    fn field_value(&self, name: &str) -> Option<FieldValue>;
}
