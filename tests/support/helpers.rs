// tests/support/helpers.rs
use std::sync::Arc;

use core_cms::application::commands::records::RecordCleaner;
use core_cms::domain::slug::{SlugRepository, SlugResolver};
use core_cms::infrastructure::util::DefaultSlugGenerator;

use super::mocks::DummyClock;

pub fn resolver(repo: Arc<dyn SlugRepository>) -> SlugResolver {
    SlugResolver::new(repo, Arc::new(DefaultSlugGenerator))
}

pub fn cleaner(repo: Arc<dyn SlugRepository>) -> RecordCleaner {
    RecordCleaner::new(Arc::new(resolver(repo)), Arc::new(DummyClock))
}

pub fn cleaner_with_separator(repo: Arc<dyn SlugRepository>, separator: &str) -> RecordCleaner {
    RecordCleaner::new(
        Arc::new(resolver(repo).with_counter_separator(separator)),
        Arc::new(DummyClock),
    )
}
