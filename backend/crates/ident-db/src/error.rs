use ident_core::{ErrorLocation, StoreError};

use std::panic::Location;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DbError {
    #[error("SQLx error: {source} {location}")]
    Sqlx {
        source: sqlx::Error,
        location: ErrorLocation,
    },

    #[error("Migration error: {message} {location}")]
    Migration {
        message: String,
        location: ErrorLocation,
    },

    #[error("Database initialization failed: {message} {location}")]
    Initialization {
        message: String,
        location: ErrorLocation,
    },

    #[error("Account not found: {id} {location}")]
    AccountNotFound {
        id: String,
        location: ErrorLocation,
    },
}

impl DbError {
    /// True when SQLite rejected the write because of a UNIQUE index.
    pub fn is_unique_violation(&self) -> bool {
        match self {
            Self::Sqlx {
                source: sqlx::Error::Database(db_error),
                ..
            } => db_error.is_unique_violation(),
            _ => false,
        }
    }
}

impl From<sqlx::Error> for DbError {
    #[track_caller]
    fn from(source: sqlx::Error) -> Self {
        Self::Sqlx {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<DbError> for StoreError {
    #[track_caller]
    fn from(error: DbError) -> Self {
        if error.is_unique_violation() {
            return StoreError::conflict(error.to_string());
        }
        StoreError::backend(error)
    }
}

pub type Result<T> = std::result::Result<T, DbError>;
