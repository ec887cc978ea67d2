use crate::domain::errors::DomainError;

const UNIQUE_VIOLATION: &str = "23505";
const FOREIGN_KEY_VIOLATION: &str = "23503";
const NOT_NULL_VIOLATION: &str = "23502";
const CHECK_VIOLATION: &str = "23514";
const UNDEFINED_TABLE: &str = "42P01";
const UNDEFINED_COLUMN: &str = "42703";

pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::Database(db_err) => {
            if let Some(code) = db_err.code() {
                match code.as_ref() {
                    UNIQUE_VIOLATION => {
                        let what = db_err.constraint().unwrap_or("unique constraint");
                        return DomainError::Conflict(format!("{what} violated"));
                    }
                    FOREIGN_KEY_VIOLATION => {
                        return DomainError::Conflict("record is still referenced".into());
                    }
                    NOT_NULL_VIOLATION | CHECK_VIOLATION => {
                        return DomainError::Validation(db_err.message().to_string());
                    }
                    UNDEFINED_TABLE => {
                        return DomainError::NotFound(db_err.message().to_string());
                    }
                    UNDEFINED_COLUMN => {
                        return DomainError::UnknownField(db_err.message().to_string());
                    }
                    _ => {}
                }
            }

            DomainError::Persistence(db_err.message().to_string())
        }
        sqlx::Error::RowNotFound => DomainError::NotFound("row not found".into()),
        _ => DomainError::Persistence(err.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_database_errors_are_persistence_failures() {
        assert!(matches!(
            map_sqlx(sqlx::Error::PoolTimedOut),
            DomainError::Persistence(_)
        ));
        assert!(matches!(
            map_sqlx(sqlx::Error::RowNotFound),
            DomainError::NotFound(_)
        ));
    }
}
