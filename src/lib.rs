//! Reusable content-model building blocks: field-group mixins (dates,
//! authorship, publishing, expiration, live updates, slugs, channels), a
//! typed choice table, and a slug resolver that keeps slugs unique within a
//! declared scope.
pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
