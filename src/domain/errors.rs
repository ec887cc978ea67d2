// src/domain/errors.rs
use thiserror::Error;

pub type DomainResult<T> = Result<T, DomainError>;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DomainError {
    #[error("validation error: {0}")]
    Validation(String),
    #[error("conflict: {0}")]
    Conflict(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("persistence error: {0}")]
    Persistence(String),
    #[error("unknown choice: {0}")]
    UnknownChoice(String),
    #[error("unknown field: {0}")]
    UnknownField(String),
}

impl DomainError {
    /// Field-level validation failure, formatted as `<field>: <message>`.
    pub fn field(name: &str, message: impl AsRef<str>) -> Self {
        Self::Validation(format!("{name}: {}", message.as_ref()))
    }
}
