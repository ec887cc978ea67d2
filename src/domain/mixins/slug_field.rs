use crate::domain::record::FieldGroup;
use crate::domain::schema::{FieldKind, FieldSpec, FieldValue};
use crate::domain::slug::{ScopeField, Uniqueness};
use serde::{Deserialize, Serialize};

/// Which fields feed an empty slug and where it has to be unique.
/// Defaults to no source fields and no uniqueness check.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SlugSettings {
    pub source_fields: Vec<&'static str>,
    pub uniqueness: Uniqueness,
}

impl SlugSettings {
    pub fn from_fields(source_fields: impl IntoIterator<Item = &'static str>) -> Self {
        Self {
            source_fields: source_fields.into_iter().collect(),
            uniqueness: Uniqueness::None,
        }
    }

    pub fn unique_globally(mut self) -> Self {
        self.uniqueness = Uniqueness::Global;
        self
    }

    pub fn unique_within<I, F>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = F>,
        F: Into<ScopeField>,
    {
        self.uniqueness = Uniqueness::Within(fields.into_iter().map(Into::into).collect());
        self
    }
}

/// Slug rules of a record type that composes a generic slug-bearing group,
/// chosen through a type parameter so every value of the type shares them.
pub trait SlugDeclaration: Send + Sync + 'static {
    fn slug_settings() -> SlugSettings;
}

/// Slug typed by hand: normalised on clean, never derived or deduplicated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct FreeTextSlug;

impl SlugDeclaration for FreeTextSlug {
    fn slug_settings() -> SlugSettings {
        SlugSettings::default()
    }
}

/// Slug that accepts free text and is normalised, and optionally made
/// unique, every time the record is cleaned.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SlugField {
    pub value: String,
}

impl SlugField {
    pub const NAME: &'static str = "slug";
    pub const MAX_LENGTH: usize = 140;

    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }
}

impl FieldGroup for SlugField {
    fn field_specs() -> Vec<FieldSpec> {
        vec![
            FieldSpec::new(Self::NAME, "Slug", FieldKind::Text)
                .max_length(Self::MAX_LENGTH)
                .blank()
                .indexed(),
        ]
    }

    fn field_value(&self, name: &str) -> Option<FieldValue> {
        (name == Self::NAME).then(|| FieldValue::text(self.value.as_str()))
    }
}
