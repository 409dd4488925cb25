// src/infrastructure/repositories/error.rs
use crate::domain::errors::DomainError;

const ER_DATA_TOO_LONG: &str = "1406";

pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::Database(db_err) => {
            if db_err.code().as_deref() == Some(ER_DATA_TOO_LONG) {
                return DomainError::Validation(db_err.message().to_string());
            }
            DomainError::Persistence(db_err.message().to_string())
        }
        sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed | sqlx::Error::Io(_) => {
            DomainError::Persistence(format!("database unavailable: {err}"))
        }
        _ => DomainError::Persistence(err.to_string()),
    }
}
