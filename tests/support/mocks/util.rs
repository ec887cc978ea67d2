// tests/support/mocks/util.rs
use std::collections::HashSet;
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use core_cms::domain::errors::DomainResult;
use core_cms::domain::slug::{SlugQuery, SlugRepository};

#[derive(Clone)]
pub struct DummyClock;

impl core_cms::application::ports::time::Clock for DummyClock {
    fn now(&self) -> DateTime<Utc> {
        super::time::fixed_now()
    }
}

/// Slugifier that only uppercases, to tell generator output apart.
#[derive(Clone)]
pub struct UpperSlug;

impl core_cms::application::ports::util::SlugGenerator for UpperSlug {
    fn slugify(&self, s: &str) -> String {
        s.to_uppercase()
    }
}

/// Slug repository answering from a fixed set of taken slugs and keeping
/// every query it was asked.
pub struct RecordingSlugRepo {
    taken: HashSet<String>,
    seen: Mutex<Vec<SlugQuery>>,
}

impl RecordingSlugRepo {
    pub fn new<I, S>(taken: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            taken: taken.into_iter().map(Into::into).collect(),
            seen: Mutex::new(Vec::new()),
        }
    }

    pub fn queries(&self) -> Vec<SlugQuery> {
        self.seen.lock().unwrap().clone()
    }
}

#[async_trait]
impl SlugRepository for RecordingSlugRepo {
    async fn slug_exists(&self, query: &SlugQuery) -> DomainResult<bool> {
        self.seen.lock().unwrap().push(query.clone());
        Ok(self.taken.contains(&query.slug))
    }
}
