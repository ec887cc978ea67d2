use crate::domain::record::FieldGroup;
use crate::domain::schema::{FieldKind, FieldSpec, FieldValue};
use crate::domain::user::{USERS_COLLECTION, UserId};
use serde::{Deserialize, Serialize};

/// Owning user of a record. Required; the owner cannot be deleted while it
/// still owns records (see `AuthorshipGuard`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Authorship {
    pub author: UserId,
}

impl Authorship {
    pub fn new(author: UserId) -> Self {
        Self { author }
    }
}

impl FieldGroup for Authorship {
    fn field_specs() -> Vec<FieldSpec> {
        vec![FieldSpec::new(
            "author",
            "Author",
            FieldKind::ForeignKey(USERS_COLLECTION),
        )]
    }

    fn field_value(&self, name: &str) -> Option<FieldValue> {
        (name == "author").then(|| FieldValue::Integer(self.author.into()))
    }
}
