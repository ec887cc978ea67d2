// src/application/commands/authors/guard.rs
use std::sync::Arc;

use crate::{
    application::error::ApplicationResult,
    domain::{errors::DomainError, repository::AuthoredRepository, user::UserId},
};

/// Refuses to let a user go while authored records still point at them.
pub struct AuthorshipGuard {
    repos: Vec<Arc<dyn AuthoredRepository>>,
}

impl AuthorshipGuard {
    pub fn new(repos: Vec<Arc<dyn AuthoredRepository>>) -> Self {
        Self { repos }
    }

    pub fn watch(mut self, repo: Arc<dyn AuthoredRepository>) -> Self {
        self.repos.push(repo);
        self
    }

    pub async fn owned_records(&self, author: UserId) -> ApplicationResult<u64> {
        let mut total = 0;
        for repo in &self.repos {
            total += repo.count_owned_by(author).await?;
        }
        Ok(total)
    }

    pub async fn ensure_deletable(&self, author: UserId) -> ApplicationResult<()> {
        let owned = self.owned_records(author).await?;
        if owned > 0 {
            tracing::warn!(%author, owned, "refusing to delete author of existing records");
            return Err(DomainError::Conflict(format!(
                "user {author} still owns {owned} record(s)"
            ))
            .into());
        }
        Ok(())
    }
}
