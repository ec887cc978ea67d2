// src/infrastructure/repositories/memory.rs
use std::sync::Mutex;

use async_trait::async_trait;

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::record::{Record, RecordId};
use crate::domain::repository::{AuthoredRepository, RecordWriteRepository};
use crate::domain::schema::FieldValue;
use crate::domain::slug::{SlugQuery, SlugRepository};
use crate::domain::user::UserId;

/// Process-local store for one record type. Serves as the reference
/// implementation of the storage ports and backs the test suite.
pub struct InMemoryRecordStore<R> {
    inner: Mutex<Inner<R>>,
}

struct Inner<R> {
    records: Vec<R>,
    next_id: i64,
}

impl<R> Default for InMemoryRecordStore<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R> InMemoryRecordStore<R> {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Inner {
                records: Vec::new(),
                next_id: 1,
            }),
        }
    }

    fn lock(&self) -> DomainResult<std::sync::MutexGuard<'_, Inner<R>>> {
        self.inner
            .lock()
            .map_err(|_| DomainError::Persistence("record store lock poisoned".into()))
    }
}

impl<R: Record + Clone> InMemoryRecordStore<R> {
    pub fn all(&self) -> DomainResult<Vec<R>> {
        Ok(self.lock()?.records.clone())
    }

    pub fn get(&self, id: RecordId) -> DomainResult<Option<R>> {
        Ok(self
            .lock()?
            .records
            .iter()
            .find(|record| record.id() == Some(id))
            .cloned())
    }

    pub fn len(&self) -> usize {
        self.lock().map(|inner| inner.records.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn matches_query<R: Record>(record: &R, query: &SlugQuery) -> bool {
    if query.exclude.is_some() && record.id() == query.exclude {
        return false;
    }
    if record.field_value(&query.slug_field) != Some(FieldValue::text(query.slug.as_str())) {
        return false;
    }
    query.filters.iter().all(|filter| {
        record
            .field_value(filter.field)
            .is_some_and(|value| filter.matches(&value))
    })
}

#[async_trait]
impl<R> SlugRepository for InMemoryRecordStore<R>
where
    R: Record + Send + 'static,
{
    async fn slug_exists(&self, query: &SlugQuery) -> DomainResult<bool> {
        if query.collection != R::COLLECTION {
            return Err(DomainError::NotFound(format!(
                "collection {} is not stored here",
                query.collection
            )));
        }
        let inner = self.lock()?;
        Ok(inner.records.iter().any(|record| matches_query(record, query)))
    }
}

#[async_trait]
impl<R> RecordWriteRepository<R> for InMemoryRecordStore<R>
where
    R: Record + Clone + Send + 'static,
{
    async fn insert(&self, mut record: R) -> DomainResult<R> {
        let mut inner = self.lock()?;
        let id = RecordId::new(inner.next_id)?;
        inner.next_id += 1;
        record.set_id(id);
        inner.records.push(record.clone());
        Ok(record)
    }

    async fn update(&self, record: R) -> DomainResult<R> {
        let id = record
            .id()
            .ok_or_else(|| DomainError::Validation("cannot update a record without id".into()))?;
        let mut inner = self.lock()?;
        let slot = inner
            .records
            .iter_mut()
            .find(|existing| existing.id() == Some(id))
            .ok_or_else(|| DomainError::NotFound(format!("{} {id}", R::COLLECTION)))?;
        *slot = record.clone();
        Ok(record)
    }
}

#[async_trait]
impl<R> AuthoredRepository for InMemoryRecordStore<R>
where
    R: Record + Send + 'static,
{
    async fn count_owned_by(&self, author: UserId) -> DomainResult<u64> {
        let owner = FieldValue::Integer(author.into());
        let inner = self.lock()?;
        let count = inner
            .records
            .iter()
            .filter(|record| record.field_value("author").as_ref() == Some(&owner))
            .count();
        u64::try_from(count)
            .map_err(|_| DomainError::Persistence("owned record count does not fit in u64".into()))
    }
}
