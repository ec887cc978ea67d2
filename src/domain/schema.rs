// src/domain/schema.rs
use crate::domain::choices::{Choices, Label};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::record::Record;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    LongText,
    Boolean,
    DateTime,
    SmallUnsigned,
    /// Reference to a record in the named collection.
    ForeignKey(&'static str),
    Choice(&'static Choices),
}

/// Declaration of one persisted field contributed by a mixin or record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub label: Label,
    pub kind: FieldKind,
    pub max_length: Option<usize>,
    pub nullable: bool,
    pub blank: bool,
    pub editable: bool,
    pub db_index: bool,
    pub help_text: Option<Label>,
}

impl FieldSpec {
    pub fn new(name: &'static str, label: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            label: Label::new(label),
            kind,
            max_length: None,
            nullable: false,
            blank: false,
            editable: true,
            db_index: false,
            help_text: None,
        }
    }

    pub fn text(name: &'static str, label: &'static str, max_length: usize) -> Self {
        Self::new(name, label, FieldKind::Text).max_length(max_length)
    }

    pub fn max_length(mut self, max_length: usize) -> Self {
        self.max_length = Some(max_length);
        self
    }

    /// Nullable and allowed to be left empty.
    pub fn optional(mut self) -> Self {
        self.nullable = true;
        self.blank = true;
        self
    }

    pub fn blank(mut self) -> Self {
        self.blank = true;
        self
    }

    pub fn auto(mut self) -> Self {
        self.editable = false;
        self.blank = true;
        self
    }

    pub fn indexed(mut self) -> Self {
        self.db_index = true;
        self
    }

    pub fn help_text(mut self, text: &'static str) -> Self {
        self.help_text = Some(Label::new(text));
        self
    }
}

/// Value of a field as seen by validation and the slug resolver.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum FieldValue {
    Null,
    Text(String),
    Integer(i64),
    Bool(bool),
    DateTime(DateTime<Utc>),
    Date(NaiveDate),
}

impl FieldValue {
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    pub fn optional_text(value: Option<&String>) -> Self {
        value.map_or(Self::Null, |v| Self::Text(v.clone()))
    }

    pub fn optional_datetime(value: Option<DateTime<Utc>>) -> Self {
        value.map_or(Self::Null, Self::DateTime)
    }

    pub fn is_blank(&self) -> bool {
        match self {
            FieldValue::Null => true,
            FieldValue::Text(s) => s.is_empty(),
            _ => false,
        }
    }

    /// Narrows a timestamp to its calendar date; other values pass through.
    pub fn date_part(&self) -> FieldValue {
        match self {
            FieldValue::DateTime(at) => FieldValue::Date(at.date_naive()),
            other => other.clone(),
        }
    }

    /// Plain text rendering fed to the slugifier.
    pub fn to_text(&self) -> String {
        match self {
            FieldValue::Null => String::new(),
            FieldValue::Text(s) => s.clone(),
            FieldValue::Integer(n) => n.to_string(),
            FieldValue::Bool(b) => b.to_string(),
            FieldValue::DateTime(at) => at.format("%Y-%m-%d %H:%M:%S").to_string(),
            FieldValue::Date(date) => date.format("%Y-%m-%d").to_string(),
        }
    }
}

/// Runs the per-field checks on every editable field of `record`: required
/// fields must not be blank, text must fit `max_length` (counted in
/// characters), and choice fields must hold a declared token.
pub fn validate_fields<R: Record>(record: &R) -> DomainResult<()> {
    for spec in R::field_specs().iter().filter(|spec| spec.editable) {
        let value = record
            .field_value(spec.name)
            .ok_or_else(|| DomainError::UnknownField(spec.name.to_string()))?;
        validate_value(spec, &value)?;
    }
    Ok(())
}

fn validate_value(spec: &FieldSpec, value: &FieldValue) -> DomainResult<()> {
    if value.is_blank() {
        return if spec.blank {
            Ok(())
        } else {
            Err(DomainError::field(spec.name, "this field cannot be blank"))
        };
    }

    if let (Some(max), FieldValue::Text(text)) = (spec.max_length, value) {
        let length = text.chars().count();
        if length > max {
            return Err(DomainError::field(
                spec.name,
                format!("ensure this value has at most {max} characters (it has {length})"),
            ));
        }
    }

    if let (FieldKind::Choice(choices), FieldValue::Text(token)) = (spec.kind, value) {
        if let Err(err) = choices.validate(token) {
            return Err(DomainError::field(spec.name, err.to_string()));
        }
    }

    Ok(())
}
