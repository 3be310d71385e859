use crate::ErrorLocation;

use std::panic::Location;
use std::result::Result as StdResult;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Invalid provider: {value} {location}")]
    InvalidProvider {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid email verification state: {value} {location}")]
    InvalidEmailVerificationState {
        value: String,
        location: ErrorLocation,
    },
}

pub type Result<T> = StdResult<T, CoreError>;

/// Failure reported by an [`AccountStore`](crate::AccountStore) implementation.
#[derive(Error, Debug)]
pub enum StoreError {
    /// A unique constraint (provider subject id or email) rejected the write.
    #[error("Unique constraint violated: {message} {location}")]
    Conflict {
        message: String,
        location: ErrorLocation,
    },

    #[error("Persistence failure: {source} {location}")]
    Backend {
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
        location: ErrorLocation,
    },
}

impl StoreError {
    #[track_caller]
    pub fn conflict<S: Into<String>>(message: S) -> Self {
        Self::Conflict {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn backend<E>(source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Backend {
            source: Box::new(source),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::Conflict { .. })
    }
}

pub type StoreResult<T> = StdResult<T, StoreError>;
