// tests/support/builders.rs
use chrono::{DateTime, Utc};

use core_cms::domain::article::BasicArticle;
use core_cms::domain::mixins::SlugDeclaration;
use core_cms::domain::status::Status;
use core_cms::domain::user::UserId;

use super::declarations::{Article, TitleSlug};

pub struct ArticleBuilder {
    author: i64,
    title: String,
    body: String,
    slug: String,
    status: Status,
    date_available: Option<DateTime<Utc>>,
}

impl ArticleBuilder {
    pub fn new() -> Self {
        Self {
            author: 1,
            title: "Test Article".into(),
            body: "Test body".into(),
            slug: String::new(),
            status: Status::Draft,
            date_available: None,
        }
    }

    pub fn author(mut self, author: i64) -> Self {
        self.author = author;
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }

    pub fn slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = slug.into();
        self
    }

    pub fn status(mut self, status: Status) -> Self {
        self.status = status;
        self
    }

    pub fn available_at(mut self, at: DateTime<Utc>) -> Self {
        self.date_available = Some(at);
        self
    }

    /// Article slugged from its title, without a uniqueness check.
    pub fn build(self) -> Article {
        self.build_as::<TitleSlug>()
    }

    pub fn build_as<D: SlugDeclaration>(self) -> BasicArticle<D> {
        let mut article = BasicArticle::new(UserId::new(self.author).unwrap(), self.title, self.body)
            .with_status(self.status)
            .with_slug(self.slug);
        article.publishing.date_available = self.date_available;
        article
    }
}
