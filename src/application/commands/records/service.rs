// src/application/commands/records/service.rs
use std::sync::Arc;

use crate::{application::ports::time::Clock, domain::slug::SlugResolver};

/// Runs the pre-persist hooks of composed records, in this order:
///
/// 1. field validation (lengths, required fields, choices)
/// 2. slug resolution, for records with a slug field
/// 3. availability default, for publishable records
///
/// `save` then stamps creation/update dates and hands the record to storage.
pub struct RecordCleaner {
    pub(super) slug_resolver: Arc<SlugResolver>,
    pub(super) clock: Arc<dyn Clock>,
}

impl RecordCleaner {
    pub fn new(slug_resolver: Arc<SlugResolver>, clock: Arc<dyn Clock>) -> Self {
        Self {
            slug_resolver,
            clock,
        }
    }

    pub fn slug_resolver(&self) -> &SlugResolver {
        &self.slug_resolver
    }
}
