// src/application/commands/records/clean.rs
use chrono::{DateTime, Utc};

use super::RecordCleaner;
use crate::{
    application::error::ApplicationResult,
    domain::{record::Composed, schema::validate_fields},
};

impl RecordCleaner {
    pub async fn clean<R>(&self, record: &mut R) -> ApplicationResult<()>
    where
        R: Composed + Send + Sync,
    {
        let now = self.clock.now();
        self.clean_at(record, now).await
    }

    pub(super) async fn clean_at<R>(&self, record: &mut R, now: DateTime<Utc>) -> ApplicationResult<()>
    where
        R: Composed + Send + Sync,
    {
        validate_fields(&*record)?;

        if record.has_slug() {
            let slug = self.slug_resolver.resolve(&*record).await?;
            if let Some(field) = record.slug_field_mut() {
                field.value = slug;
            }
        }

        if let Some(publishing) = record.publishing_mut() {
            if publishing.fill_availability(now) {
                tracing::debug!(collection = R::COLLECTION, at = %now, "availability defaulted");
            }
        }

        Ok(())
    }
}
