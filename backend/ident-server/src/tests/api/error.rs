use crate::{ApiError, UiError};

use ident_auth::AuthError;
use ident_core::{ErrorLocation, StoreError};

use std::panic::Location;

use axum::response::IntoResponse;
use http::StatusCode;
use http_body_util::BodyExt;

async fn body_json(error: ApiError) -> (StatusCode, serde_json::Value) {
    let response = error.into_response();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&body).unwrap())
}

#[tokio::test]
async fn test_invalid_credential_returns_401_with_user_message() {
    let error: ApiError = AuthError::InvalidCredential {
        location: ErrorLocation::from(Location::caller()),
    }
    .into();

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(json["error"]["code"], "AUTHENTICATION_FAILED");
    assert_eq!(json["error"]["message"], "Invalid email or password.");
}

#[tokio::test]
async fn test_not_found_names_the_identifier() {
    let error: ApiError = AuthError::NotFound {
        identifier: "a@x.com".into(),
        location: ErrorLocation::from(Location::caller()),
    }
    .into();

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(json["error"]["message"], "Email a@x.com not found.");
}

#[tokio::test]
async fn test_persistence_failure_is_collapsed_to_generic_message() {
    let error: ApiError = AuthError::persistence(StoreError::backend(std::io::Error::other("disk full"))).into();

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(json["error"]["code"], "AUTHENTICATION_FAILED");
    assert_eq!(json["error"]["message"], "Authentication failed.");
    assert!(!json.to_string().contains("disk full"));
}

#[tokio::test]
async fn test_unknown_strategy_returns_404() {
    let error: ApiError = AuthError::UnknownStrategy {
        name: "google".into(),
        location: ErrorLocation::from(Location::caller()),
    }
    .into();

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["error"]["code"], "NOT_FOUND");
}

#[tokio::test]
async fn test_empty_button_text_returns_400_on_text_field() {
    let error: ApiError = UiError::empty_button_text().into();

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"]["code"], "VALIDATION_ERROR");
    assert_eq!(json["error"]["field"], "text");
}
