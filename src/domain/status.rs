// src/domain/status.rs
use crate::domain::choices::{Choices, Label};
use crate::domain::errors::{DomainError, DomainResult};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Allowed values of the `status` field, in declaration order.
pub static STATUSES: Lazy<Choices> = Lazy::new(|| {
    Choices::new([
        ("PENDING", Label::new("Pending")),
        ("DRAFT", Label::new("Draft")),
        ("PUBLIC", Label::new("Public")),
        ("REJECTED", Label::new("Rejected")),
        ("B", Label::new("B")),
    ])
});

/// Publication state of a record.
///
/// - `Pending`: waiting on someone else's approval
/// - `Draft`: still being worked on
/// - `Public`: finished and visible
/// - `Rejected`: turned down by a moderator
///
/// Any state may follow any other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Status {
    Pending,
    #[default]
    Draft,
    Public,
    Rejected,
    B,
}

impl Status {
    pub const MAX_LENGTH: usize = 10;

    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Pending => "PENDING",
            Status::Draft => "DRAFT",
            Status::Public => "PUBLIC",
            Status::Rejected => "REJECTED",
            Status::B => "B",
        }
    }

    pub fn choices() -> &'static Choices {
        &*STATUSES
    }

    pub fn label(&self) -> Label {
        STATUSES
            .label(self.as_str())
            .cloned()
            .unwrap_or_else(|| Label::from(self.as_str()))
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Status {
    type Err = DomainError;

    fn from_str(s: &str) -> DomainResult<Self> {
        match STATUSES.token(s)? {
            "PENDING" => Ok(Status::Pending),
            "DRAFT" => Ok(Status::Draft),
            "PUBLIC" => Ok(Status::Public),
            "REJECTED" => Ok(Status::Rejected),
            "B" => Ok(Status::B),
            other => Err(DomainError::UnknownChoice(other.to_string())),
        }
    }
}

impl PartialEq<str> for Status {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl PartialEq<&str> for Status {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}
