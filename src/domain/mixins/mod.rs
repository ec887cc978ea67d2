//! Field groups composed into concrete record types.
//!
//! Each group contributes its `FieldSpec`s and values through `FieldGroup`;
//! the ones with pre-persist behaviour expose it as plain methods that
//! `RecordCleaner` calls in a fixed order.
pub mod authorship;
pub mod channel;
pub mod dates;
pub mod expiration;
pub mod live_update;
pub mod publishing;
pub mod slug_field;

pub use authorship::Authorship;
pub use channel::ChannelFields;
pub use dates::DateStamps;
pub use expiration::Expiration;
pub use live_update::LiveUpdate;
pub use publishing::{Publishing, StatusField};
pub use slug_field::{FreeTextSlug, SlugDeclaration, SlugField, SlugSettings};
