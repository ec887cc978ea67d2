// tests/support/records.rs
// A downstream record composed from mixins the article does not use.
use chrono::{DateTime, Utc};

use core_cms::domain::mixins::{DateStamps, Expiration, LiveUpdate, SlugField, SlugSettings};
use core_cms::domain::record::{Composed, FieldGroup, Record, RecordId, Sluggable};
use core_cms::domain::schema::{FieldKind, FieldSpec, FieldValue};
use core_cms::domain::slug::ScopeField;

#[derive(Debug, Clone)]
pub struct LiveStory {
    pub id: Option<RecordId>,
    pub dates: DateStamps,
    pub expiration: Expiration,
    pub live: LiveUpdate,
    pub slug: SlugField,
    pub headline: String,
    pub happened_at: DateTime<Utc>,
}

impl LiveStory {
    pub fn new(headline: &str, happened_at: DateTime<Utc>) -> Self {
        Self {
            id: None,
            dates: DateStamps::default(),
            expiration: Expiration::default(),
            live: LiveUpdate::default(),
            slug: SlugField::default(),
            headline: headline.to_string(),
            happened_at,
        }
    }
}

impl Record for LiveStory {
    const COLLECTION: &'static str = "live_stories";

    fn id(&self) -> Option<RecordId> {
        self.id
    }

    fn set_id(&mut self, id: RecordId) {
        self.id = Some(id);
    }

    fn field_specs() -> Vec<FieldSpec> {
        let mut specs = DateStamps::field_specs();
        specs.extend(Expiration::field_specs());
        specs.extend(LiveUpdate::field_specs());
        specs.extend(SlugField::field_specs());
        specs.push(FieldSpec::text("headline", "Headline", 200));
        specs.push(FieldSpec::new("happened_at", "Happened at", FieldKind::DateTime));
        specs
    }

    fn field_value(&self, name: &str) -> Option<FieldValue> {
        match name {
            "headline" => Some(FieldValue::text(self.headline.as_str())),
            "happened_at" => Some(FieldValue::DateTime(self.happened_at)),
            _ => self
                .dates
                .field_value(name)
                .or_else(|| self.expiration.field_value(name))
                .or_else(|| self.live.field_value(name))
                .or_else(|| self.slug.field_value(name)),
        }
    }
}

/// Slugged from the headline, unique per calendar day of `happened_at`.
impl Sluggable for LiveStory {
    fn slug_settings() -> Option<SlugSettings> {
        Some(
            SlugSettings::from_fields(["headline"])
                .unique_within([ScopeField::date("happened_at")]),
        )
    }
}

impl Composed for LiveStory {
    fn dates_mut(&mut self) -> Option<&mut DateStamps> {
        Some(&mut self.dates)
    }

    fn slug_field_mut(&mut self) -> Option<&mut SlugField> {
        Some(&mut self.slug)
    }

    fn has_slug(&self) -> bool {
        true
    }
}
