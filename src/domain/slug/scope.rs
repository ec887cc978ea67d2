// src/domain/slug/scope.rs
use crate::domain::schema::FieldValue;

/// How a scope field is compared against other records.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Lookup {
    #[default]
    Exact,
    /// Compare only the calendar date of a timestamp field.
    Date,
}

impl Lookup {
    pub fn apply(&self, value: &FieldValue) -> FieldValue {
        match self {
            Lookup::Exact => value.clone(),
            Lookup::Date => value.date_part(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScopeField {
    pub field: &'static str,
    pub lookup: Lookup,
}

impl ScopeField {
    pub const fn exact(field: &'static str) -> Self {
        Self {
            field,
            lookup: Lookup::Exact,
        }
    }

    pub const fn date(field: &'static str) -> Self {
        Self {
            field,
            lookup: Lookup::Date,
        }
    }
}

impl From<&'static str> for ScopeField {
    fn from(field: &'static str) -> Self {
        Self::exact(field)
    }
}

impl From<(&'static str, Lookup)> for ScopeField {
    fn from((field, lookup): (&'static str, Lookup)) -> Self {
        Self { field, lookup }
    }
}

/// Where a slug has to be unique.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Uniqueness {
    /// No collision check; the slug is only normalised.
    #[default]
    None,
    /// Unique across every record of the same type.
    Global,
    /// Unique among records sharing these field values.
    Within(Vec<ScopeField>),
}

impl Uniqueness {
    pub fn scope_fields(&self) -> &[ScopeField] {
        match self {
            Uniqueness::Within(fields) => fields,
            Uniqueness::None | Uniqueness::Global => &[],
        }
    }
}

/// A scope field bound to the value taken from the record being slugged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScopeFilter {
    pub field: &'static str,
    pub lookup: Lookup,
    pub value: FieldValue,
}

impl ScopeFilter {
    /// Binds `scope` to the record's raw field value, applying the lookup.
    pub fn bind(scope: ScopeField, raw: &FieldValue) -> Self {
        Self {
            field: scope.field,
            lookup: scope.lookup,
            value: scope.lookup.apply(raw),
        }
    }

    pub fn matches(&self, candidate: &FieldValue) -> bool {
        self.lookup.apply(candidate) == self.value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    #[test]
    fn date_lookup_ignores_time_of_day() {
        let morning = Utc.with_ymd_and_hms(2024, 5, 1, 8, 0, 0).unwrap();
        let evening = Utc.with_ymd_and_hms(2024, 5, 1, 20, 0, 0).unwrap();
        let next_day = Utc.with_ymd_and_hms(2024, 5, 2, 8, 0, 0).unwrap();

        let filter = ScopeFilter::bind(
            ScopeField::date("date_available"),
            &FieldValue::DateTime(morning),
        );
        assert!(filter.matches(&FieldValue::DateTime(evening)));
        assert!(!filter.matches(&FieldValue::DateTime(next_day)));
    }

    #[test]
    fn exact_lookup_matches_nulls() {
        let filter = ScopeFilter::bind(ScopeField::exact("hat"), &FieldValue::Null);
        assert!(filter.matches(&FieldValue::Null));
        assert!(!filter.matches(&FieldValue::text("news")));
    }
}
