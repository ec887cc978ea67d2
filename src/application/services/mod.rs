// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        commands::{authors::AuthorshipGuard, records::RecordCleaner},
        ports::{time::Clock, util::SlugGenerator},
    },
    domain::{
        repository::AuthoredRepository,
        slug::{SlugRepository, SlugResolver},
    },
};

pub struct ApplicationServices {
    pub records: Arc<RecordCleaner>,
    pub authorship: Arc<AuthorshipGuard>,
}

impl ApplicationServices {
    pub fn new(
        slug_repo: Arc<dyn SlugRepository>,
        authored_repos: Vec<Arc<dyn AuthoredRepository>>,
        clock: Arc<dyn Clock>,
        slugger: Arc<dyn SlugGenerator>,
        counter_separator: &str,
    ) -> Self {
        let slug_resolver = Arc::new(
            SlugResolver::new(Arc::clone(&slug_repo), Arc::clone(&slugger))
                .with_counter_separator(counter_separator),
        );

        let records = Arc::new(RecordCleaner::new(
            Arc::clone(&slug_resolver),
            Arc::clone(&clock),
        ));
        let authorship = Arc::new(AuthorshipGuard::new(authored_repos));

        Self {
            records,
            authorship,
        }
    }
}
