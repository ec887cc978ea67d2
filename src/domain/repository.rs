use crate::domain::errors::DomainResult;
use crate::domain::record::Record;
use crate::domain::user::UserId;
use async_trait::async_trait;

#[async_trait]
pub trait RecordWriteRepository<R>: Send + Sync
where
    R: Record + Send + 'static,
{
    /// Stores a new record and returns it with its assigned id.
    async fn insert(&self, record: R) -> DomainResult<R>;
    async fn update(&self, record: R) -> DomainResult<R>;
}

/// Ownership counts backing the author deletion guard.
#[async_trait]
pub trait AuthoredRepository: Send + Sync {
    async fn count_owned_by(&self, author: UserId) -> DomainResult<u64>;
}
