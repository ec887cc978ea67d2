// src/domain/slug/services.rs
use std::sync::Arc;

use crate::application::ports::util::SlugGenerator;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::mixins::SlugField;
use crate::domain::record::{Record, Sluggable};
use crate::domain::schema::FieldValue;
use crate::domain::slug::counter::{DEFAULT_COUNTER_SEPARATOR, add_counter_with_separator};
use crate::domain::slug::repository::{SlugQuery, SlugRepository};
use crate::domain::slug::scope::{ScopeFilter, Uniqueness};

/// Fallback declarations for records that do not declare their own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlugOptions {
    pub source_fields: Vec<&'static str>,
    pub uniqueness: Uniqueness,
    pub slug_field: &'static str,
}

impl Default for SlugOptions {
    fn default() -> Self {
        Self {
            source_fields: Vec::new(),
            uniqueness: Uniqueness::None,
            slug_field: SlugField::NAME,
        }
    }
}

impl SlugOptions {
    pub fn source_fields(mut self, fields: impl IntoIterator<Item = &'static str>) -> Self {
        self.source_fields = fields.into_iter().collect();
        self
    }

    pub fn uniqueness(mut self, uniqueness: Uniqueness) -> Self {
        self.uniqueness = uniqueness;
        self
    }

    pub fn slug_field(mut self, name: &'static str) -> Self {
        self.slug_field = name;
        self
    }
}

/// Domain service producing slugs that are free within their scope.
pub struct SlugResolver {
    repo: Arc<dyn SlugRepository>,
    generator: Arc<dyn SlugGenerator>,
    counter_separator: String,
}

impl SlugResolver {
    pub fn new(repo: Arc<dyn SlugRepository>, generator: Arc<dyn SlugGenerator>) -> Self {
        Self {
            repo,
            generator,
            counter_separator: DEFAULT_COUNTER_SEPARATOR.to_string(),
        }
    }

    pub fn with_counter_separator(mut self, separator: impl Into<String>) -> Self {
        self.counter_separator = separator.into();
        self
    }

    pub fn counter_separator(&self) -> &str {
        &self.counter_separator
    }

    /// Slugifies the text around each counter separator and keeps the
    /// separators, so `1_hello-world` comes back unchanged.
    pub fn slugify(&self, input: &str) -> String {
        input
            .split(self.counter_separator.as_str())
            .map(|part| self.generator.slugify(part))
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(self.counter_separator.as_str())
    }

    /// Resolves with default options, i.e. only what the record declares.
    pub async fn resolve<R>(&self, instance: &R) -> DomainResult<String>
    where
        R: Sluggable + Sync,
    {
        self.available_slug(instance, &SlugOptions::default()).await
    }

    /// Normalised slug for `instance`, made free within its uniqueness scope
    /// and cut to the slug field's max length.
    ///
    /// The cut happens after the collision checks, so a truncated slug is
    /// not checked again.
    pub async fn available_slug<R>(&self, instance: &R, options: &SlugOptions) -> DomainResult<String>
    where
        R: Sluggable + Sync,
    {
        let declared = R::slug_settings();
        let (sources, uniqueness) = match &declared {
            Some(settings) => (settings.source_fields.as_slice(), &settings.uniqueness),
            None => (options.source_fields.as_slice(), &options.uniqueness),
        };
        let candidate = self.candidate(instance, options.slug_field, sources)?;
        let max_length = R::field_spec(options.slug_field).and_then(|spec| spec.max_length);

        let slug = match uniqueness {
            Uniqueness::None => candidate,
            Uniqueness::Global | Uniqueness::Within(_) => {
                let query = scope_query(instance, options.slug_field, uniqueness, candidate)?;
                self.first_free(query).await?
            }
        };

        Ok(truncate_chars(slug, max_length))
    }

    /// The slug before any collision handling: joined source fields when
    /// the slug is empty, otherwise the current slug text normalised.
    fn candidate<R: Record>(
        &self,
        instance: &R,
        slug_field: &str,
        sources: &[&'static str],
    ) -> DomainResult<String> {
        let current = match instance.field_value(slug_field) {
            Some(FieldValue::Null) => String::new(),
            Some(FieldValue::Text(text)) => text,
            Some(_) | None => return Err(DomainError::UnknownField(slug_field.into())),
        };

        if !current.is_empty() || sources.is_empty() {
            return Ok(self.slugify(&current));
        }

        let mut parts = Vec::with_capacity(sources.len());
        for name in sources {
            let value = instance
                .field_value(name)
                .ok_or_else(|| DomainError::UnknownField((*name).to_string()))?;
            // Null or blank sources add nothing, not a "none" or an empty segment.
            let part = self.slugify(&value.to_text());
            if !part.is_empty() {
                parts.push(part);
            }
        }
        Ok(parts.join("-"))
    }

    /// Walks the counter sequence starting at `query.slug` until storage
    /// reports no match.
    pub async fn first_free(&self, mut query: SlugQuery) -> DomainResult<String> {
        while self.repo.slug_exists(&query).await? {
            let next = add_counter_with_separator(&query.slug, &self.counter_separator);
            tracing::debug!(
                collection = %query.collection,
                taken = %query.slug,
                next = %next,
                "slug taken"
            );
            query.slug = next;
        }
        Ok(query.slug)
    }
}

fn scope_query<R: Record>(
    instance: &R,
    slug_field: &str,
    uniqueness: &Uniqueness,
    candidate: String,
) -> DomainResult<SlugQuery> {
    let mut query = SlugQuery::new(R::COLLECTION, slug_field, candidate).excluding(instance.id());
    for scope in uniqueness.scope_fields() {
        let raw = instance
            .field_value(scope.field)
            .ok_or_else(|| DomainError::UnknownField(scope.field.to_string()))?;
        query = query.filter(ScopeFilter::bind(*scope, &raw));
    }
    Ok(query)
}

/// Cuts `slug` to at most `max_length` characters.
pub fn truncate_chars(slug: String, max_length: Option<usize>) -> String {
    match max_length {
        Some(max) if slug.chars().count() > max => slug.chars().take(max).collect(),
        _ => slug,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncation_counts_characters() {
        assert_eq!(truncate_chars("abcdef".into(), Some(3)), "abc");
        assert_eq!(truncate_chars("äöüß".into(), Some(2)), "äö");
        assert_eq!(truncate_chars("abc".into(), Some(3)), "abc");
        assert_eq!(truncate_chars("abc".into(), None), "abc");
    }

    #[test]
    fn default_options_target_the_slug_field() {
        let options = SlugOptions::default();
        assert_eq!(options.slug_field, "slug");
        assert_eq!(options.uniqueness, Uniqueness::None);
        assert!(options.source_fields.is_empty());
    }
}
