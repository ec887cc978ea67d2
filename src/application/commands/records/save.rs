// src/application/commands/records/save.rs
use super::RecordCleaner;
use crate::{
    application::error::ApplicationResult,
    domain::{record::Composed, repository::RecordWriteRepository},
};

impl RecordCleaner {
    /// Cleans, stamps and persists `record`, inserting it when it has no id
    /// yet and updating it otherwise.
    pub async fn save<R>(&self, mut record: R, repo: &dyn RecordWriteRepository<R>) -> ApplicationResult<R>
    where
        R: Composed + Send + Sync + 'static,
    {
        let now = self.clock.now();
        self.clean_at(&mut record, now).await?;

        let is_new = record.id().is_none();
        if let Some(dates) = record.dates_mut() {
            dates.stamp(now, is_new);
        }

        let saved = if is_new {
            repo.insert(record).await?
        } else {
            repo.update(record).await?
        };

        tracing::info!(
            collection = R::COLLECTION,
            id = ?saved.id(),
            created = is_new,
            "record saved"
        );
        Ok(saved)
    }
}
