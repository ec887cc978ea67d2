use crate::domain::errors::DomainResult;
use crate::domain::record::RecordId;
use crate::domain::slug::scope::ScopeFilter;
use async_trait::async_trait;

/// Existence check for one slug candidate inside a scope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlugQuery {
    pub collection: String,
    pub slug_field: String,
    pub slug: String,
    pub exclude: Option<RecordId>,
    pub filters: Vec<ScopeFilter>,
}

impl SlugQuery {
    pub fn new(
        collection: impl Into<String>,
        slug_field: impl Into<String>,
        slug: impl Into<String>,
    ) -> Self {
        Self {
            collection: collection.into(),
            slug_field: slug_field.into(),
            slug: slug.into(),
            exclude: None,
            filters: Vec::new(),
        }
    }

    pub fn excluding(mut self, id: Option<RecordId>) -> Self {
        self.exclude = id;
        self
    }

    pub fn filter(mut self, filter: ScopeFilter) -> Self {
        self.filters.push(filter);
        self
    }
}

/// Storage side of slug uniqueness.
///
/// Check-then-write is not atomic: two writers can both see a slug as free.
/// Storage that must never hold duplicates needs its own unique constraint on
/// the slug and scope columns.
#[async_trait]
pub trait SlugRepository: Send + Sync {
    /// Whether another record (not `query.exclude`) in `query.collection`
    /// holds `query.slug` and matches every scope filter.
    async fn slug_exists(&self, query: &SlugQuery) -> DomainResult<bool>;
}
