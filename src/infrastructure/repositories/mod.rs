// src/infrastructure/repositories/mod.rs
mod error;
mod memory;
mod postgres_slug;

pub use error::map_sqlx;
pub use memory::InMemoryRecordStore;
pub use postgres_slug::PostgresSlugRepository;
