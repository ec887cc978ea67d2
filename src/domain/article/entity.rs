// src/domain/article/entity.rs
use crate::domain::mixins::{
    Authorship, DateStamps, FreeTextSlug, Publishing, SlugDeclaration, SlugField, SlugSettings,
};
use crate::domain::record::{Composed, FieldGroup, Record, RecordId, Sluggable};
use crate::domain::schema::{FieldKind, FieldSpec, FieldValue};
use crate::domain::status::Status;
use crate::domain::user::UserId;
use serde::{Deserialize, Serialize};
use std::{fmt, marker::PhantomData};

/// Basic article or post: dates, publishing, author and slug plus the usual
/// editorial text fields.
///
/// - `seo_title` replaces `title` when sharing.
/// - `hat` is a short attention line shown above the title.
/// - `body` holds the text to present; keep source markup (e.g. Markdown)
///   in a field of its own if it has to be rendered first.
/// - `notes` are internal and never meant to be public.
/// - `featured` flags homepage material.
///
/// `D` fixes how the slug is derived and where it must be unique for every
/// article of the type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct BasicArticle<D: SlugDeclaration = FreeTextSlug> {
    pub id: Option<RecordId>,
    #[serde(flatten)]
    pub dates: DateStamps,
    #[serde(flatten)]
    pub publishing: Publishing,
    #[serde(flatten)]
    pub authorship: Authorship,
    pub slug: SlugField,
    pub title: String,
    pub seo_title: Option<String>,
    pub hat: Option<String>,
    pub short_description: Option<String>,
    pub body: String,
    pub notes: Option<String>,
    pub featured: bool,
    pub source: Option<String>,
    #[serde(skip)]
    declaration: PhantomData<D>,
}

impl<D: SlugDeclaration> BasicArticle<D> {
    pub fn new(author: UserId, title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            id: None,
            dates: DateStamps::default(),
            publishing: Publishing::default(),
            authorship: Authorship::new(author),
            slug: SlugField::default(),
            title: title.into(),
            seo_title: None,
            hat: None,
            short_description: None,
            body: body.into(),
            notes: None,
            featured: false,
            source: None,
            declaration: PhantomData,
        }
    }

    pub fn with_status(mut self, status: Status) -> Self {
        self.publishing.status = status;
        self
    }

    pub fn with_slug(mut self, slug: impl Into<String>) -> Self {
        self.slug.value = slug.into();
        self
    }

    pub fn status(&self) -> Status {
        self.publishing.status
    }

    fn own_field_specs() -> Vec<FieldSpec> {
        vec![
            FieldSpec::text("title", "Title", 140).indexed(),
            FieldSpec::text("seo_title", "SEO Title", 140)
                .optional()
                .help_text("SEO friendly title, will replace original title when sharing."),
            FieldSpec::text("hat", "Hat", 60).optional(),
            FieldSpec::text("short_description", "Short Description", 240).optional(),
            FieldSpec::new("body", "Body Text", FieldKind::LongText),
            FieldSpec::new("notes", "Internal notes", FieldKind::LongText)
                .optional()
                .help_text("Internal notes only, shouldn't be public."),
            FieldSpec::new("featured", "Featured", FieldKind::Boolean),
            FieldSpec::text("source", "Source", 140).optional(),
        ]
    }

    fn own_field_value(&self, name: &str) -> Option<FieldValue> {
        let value = match name {
            "title" => FieldValue::text(self.title.as_str()),
            "seo_title" => FieldValue::optional_text(self.seo_title.as_ref()),
            "hat" => FieldValue::optional_text(self.hat.as_ref()),
            "short_description" => FieldValue::optional_text(self.short_description.as_ref()),
            "body" => FieldValue::text(self.body.as_str()),
            "notes" => FieldValue::optional_text(self.notes.as_ref()),
            "featured" => FieldValue::Bool(self.featured),
            "source" => FieldValue::optional_text(self.source.as_ref()),
            _ => return None,
        };
        Some(value)
    }
}

impl<D: SlugDeclaration> fmt::Display for BasicArticle<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.title)
    }
}

impl<D: SlugDeclaration> Record for BasicArticle<D> {
    const COLLECTION: &'static str = "articles";

    fn id(&self) -> Option<RecordId> {
        self.id
    }

    fn set_id(&mut self, id: RecordId) {
        self.id = Some(id);
    }

    fn field_specs() -> Vec<FieldSpec> {
        let mut specs = DateStamps::field_specs();
        specs.extend(Publishing::field_specs());
        specs.extend(Authorship::field_specs());
        specs.extend(SlugField::field_specs());
        specs.extend(Self::own_field_specs());
        specs
    }

    fn field_value(&self, name: &str) -> Option<FieldValue> {
        if name == "id" {
            return Some(self.id.map_or(FieldValue::Null, |id| FieldValue::Integer(id.0)));
        }
        self.dates
            .field_value(name)
            .or_else(|| self.publishing.field_value(name))
            .or_else(|| self.authorship.field_value(name))
            .or_else(|| self.slug.field_value(name))
            .or_else(|| self.own_field_value(name))
    }
}

impl<D: SlugDeclaration> Sluggable for BasicArticle<D> {
    fn slug_settings() -> Option<SlugSettings> {
        Some(D::slug_settings())
    }
}

impl<D: SlugDeclaration> Composed for BasicArticle<D> {
    fn dates_mut(&mut self) -> Option<&mut DateStamps> {
        Some(&mut self.dates)
    }

    fn publishing_mut(&mut self) -> Option<&mut Publishing> {
        Some(&mut self.publishing)
    }

    fn slug_field_mut(&mut self) -> Option<&mut SlugField> {
        Some(&mut self.slug)
    }

    fn has_slug(&self) -> bool {
        true
    }
}
