// src/application/error.rs
use crate::domain::errors::DomainError;
use thiserror::Error;

pub type ApplicationResult<T> = Result<T, ApplicationError>;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error(transparent)]
    Domain(#[from] DomainError),
}

impl ApplicationError {
    pub fn as_domain(&self) -> &DomainError {
        match self {
            Self::Domain(err) => err,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn domain_errors_pass_through_unchanged() {
        let err = ApplicationError::from(DomainError::NotFound("articles 3".into()));
        assert_eq!(err.to_string(), "not found: articles 3");
        assert_eq!(err.as_domain(), &DomainError::NotFound("articles 3".into()));
    }
}
