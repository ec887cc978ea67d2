pub mod counter;
pub mod repository;
pub mod scope;
pub mod services;

pub use counter::{DEFAULT_COUNTER_SEPARATOR, add_counter_to_slug, add_counter_with_separator};
pub use repository::{SlugQuery, SlugRepository};
pub use scope::{Lookup, ScopeField, ScopeFilter, Uniqueness};
pub use services::{SlugOptions, SlugResolver, truncate_chars};
