use ident_core::{Provider, StoreError};

use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

/// Message shown for every failure whose details must stay server-side.
pub const GENERIC_FAILURE_MESSAGE: &str = "Authentication failed.";

#[derive(Error, Debug)]
pub enum AuthError {
    /// No account matches the identifier. Local sign-in only.
    #[error("Account not found: {identifier} {location}")]
    NotFound {
        identifier: String,
        location: ErrorLocation,
    },

    #[error("Invalid credentials {location}")]
    InvalidCredential { location: ErrorLocation },

    #[error("Persistence failure: {source} {location}")]
    Persistence {
        #[source]
        source: StoreError,
        location: ErrorLocation,
    },

    /// The provider returned a profile missing required fields.
    #[error("Malformed {provider} profile: {message} {location}")]
    ProviderProtocol {
        provider: Provider,
        message: String,
        location: ErrorLocation,
    },

    /// Talking to the provider failed (transport, status or body).
    #[error("{provider} request failed: {message} {location}")]
    ProviderRequest {
        provider: Provider,
        message: String,
        location: ErrorLocation,
    },

    #[error("Unknown strategy: {name} {location}")]
    UnknownStrategy {
        name: String,
        location: ErrorLocation,
    },

    #[error("Strategy '{strategy}' cannot handle this request {location}")]
    UnsupportedRequest {
        strategy: String,
        location: ErrorLocation,
    },

    #[error("Session expired {location}")]
    SessionExpired { location: ErrorLocation },

    #[error("Session token rejected: {source} {location}")]
    SessionDecode {
        #[source]
        source: jsonwebtoken::errors::Error,
        location: ErrorLocation,
    },

    #[error("Session token could not be issued: {source} {location}")]
    SessionEncode {
        #[source]
        source: jsonwebtoken::errors::Error,
        location: ErrorLocation,
    },

    #[error("Invalid session claim '{claim}': {message} {location}")]
    InvalidClaim {
        claim: String,
        message: String,
        location: ErrorLocation,
    },

    #[error("Password hashing failed: {message} {location}")]
    PasswordHash {
        message: String,
        location: ErrorLocation,
    },
}

impl AuthError {
    #[track_caller]
    pub fn persistence(source: StoreError) -> Self {
        Self::Persistence {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn provider_protocol<S: Into<String>>(provider: Provider, message: S) -> Self {
        Self::ProviderProtocol {
            provider,
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn provider_request<S: Into<String>>(provider: Provider, message: S) -> Self {
        Self::ProviderRequest {
            provider,
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Machine-readable code, used in logs
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::NotFound { .. } => "NOT_FOUND",
            Self::InvalidCredential { .. } => "INVALID_CREDENTIAL",
            Self::Persistence { .. } => "PERSISTENCE_FAILURE",
            Self::ProviderProtocol { .. } => "PROVIDER_PROTOCOL_FAILURE",
            Self::ProviderRequest { .. } => "PROVIDER_REQUEST_FAILURE",
            Self::UnknownStrategy { .. } => "UNKNOWN_STRATEGY",
            Self::UnsupportedRequest { .. } => "UNSUPPORTED_REQUEST",
            Self::SessionExpired { .. } => "SESSION_EXPIRED",
            Self::SessionDecode { .. } => "SESSION_DECODE_FAILED",
            Self::SessionEncode { .. } => "SESSION_ENCODE_FAILED",
            Self::InvalidClaim { .. } => "INVALID_CLAIM",
            Self::PasswordHash { .. } => "PASSWORD_HASH_FAILED",
        }
    }

    /// Message safe to show the user.
    ///
    /// Local sign-in keeps its two flash messages; everything else collapses
    /// to [`GENERIC_FAILURE_MESSAGE`].
    pub fn user_message(&self) -> String {
        match self {
            Self::NotFound { identifier, .. } => format!("Email {} not found.", identifier),
            Self::InvalidCredential { .. } => "Invalid email or password.".to_string(),
            _ => GENERIC_FAILURE_MESSAGE.to_string(),
        }
    }
}

impl From<StoreError> for AuthError {
    #[track_caller]
    fn from(source: StoreError) -> Self {
        Self::persistence(source)
    }
}

pub type Result<T> = std::result::Result<T, AuthError>;
