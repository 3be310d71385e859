//! HTTP error boundary.
//!
//! Sign-in failures are collapsed here: the client sees a fixed message and
//! the full error (with its location) goes to the log.

use crate::UiError;

use ident_auth::AuthError;
use ident_auth::error::GENERIC_FAILURE_MESSAGE;

use std::panic::Location;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use error_location::ErrorLocation;
use serde::Serialize;
use thiserror::Error;

/// JSON error response body
#[derive(Debug, Serialize)]
pub struct ApiErrorResponse {
    pub error: ApiErrorBody,
}

#[derive(Debug, Serialize)]
pub struct ApiErrorBody {
    /// Machine-readable code, e.g. `AUTHENTICATION_FAILED`
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

#[derive(Debug, Error)]
pub enum ApiError {
    /// Sign-in or session failure (401)
    #[error("Unauthorized: {message} {location}")]
    Unauthorized {
        message: String,
        location: ErrorLocation,
    },

    /// Unknown route target (404)
    #[error("Resource not found: {message} {location}")]
    NotFound {
        message: String,
        location: ErrorLocation,
    },

    /// Bad input (400)
    #[error("Validation failed: {message} {location}")]
    Validation {
        message: String,
        field: Option<String>,
        location: ErrorLocation,
    },

    /// Internal server error (500)
    #[error("Internal error: {message} {location}")]
    Internal {
        message: String,
        location: ErrorLocation,
    },
}

impl ApiError {
    /// 401 with the fixed failure message.
    #[track_caller]
    pub fn authentication_failed() -> Self {
        Self::Unauthorized {
            message: GENERIC_FAILURE_MESSAGE.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            ApiError::Internal { .. } => log::error!("{}", self),
            _ => log::warn!("{}", self),
        }

        let (status, body) = match self {
            ApiError::Unauthorized { message, .. } => (
                StatusCode::UNAUTHORIZED,
                ApiErrorBody {
                    code: "AUTHENTICATION_FAILED".into(),
                    message,
                    field: None,
                },
            ),
            ApiError::NotFound { message, .. } => (
                StatusCode::NOT_FOUND,
                ApiErrorBody {
                    code: "NOT_FOUND".into(),
                    message,
                    field: None,
                },
            ),
            ApiError::Validation { message, field, .. } => (
                StatusCode::BAD_REQUEST,
                ApiErrorBody {
                    code: "VALIDATION_ERROR".into(),
                    message,
                    field,
                },
            ),
            ApiError::Internal { message, .. } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ApiErrorBody {
                    code: "INTERNAL_ERROR".into(),
                    message,
                    field: None,
                },
            ),
        };

        (status, Json(ApiErrorResponse { error: body })).into_response()
    }
}

impl From<AuthError> for ApiError {
    #[track_caller]
    fn from(e: AuthError) -> Self {
        let location = ErrorLocation::from(Location::caller());

        match e {
            AuthError::UnknownStrategy { name, .. } => ApiError::NotFound {
                message: format!("No sign-in method named '{}'", name),
                location,
            },
            known @ (AuthError::NotFound { .. } | AuthError::InvalidCredential { .. }) => {
                ApiError::Unauthorized {
                    message: known.user_message(),
                    location,
                }
            }
            other => {
                log::error!("Sign-in failed [{}]: {}", other.error_code(), other);
                ApiError::Unauthorized {
                    message: other.user_message(),
                    location,
                }
            }
        }
    }
}

impl From<UiError> for ApiError {
    #[track_caller]
    fn from(e: UiError) -> Self {
        let location = ErrorLocation::from(Location::caller());

        match e {
            UiError::EmptyButtonText { .. } => ApiError::Validation {
                message: "Button text must not be empty".to_string(),
                field: Some("text".to_string()),
                location,
            },
            UiError::UnknownProvider { value, .. } => ApiError::NotFound {
                message: format!("Unknown provider '{}'", value),
                location,
            },
        }
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
