//! Provider handshake: redirect out, come back with a code.

use crate::api::auth::cookies::{
    STATE_COOKIE, clear_state_cookie, new_oauth_state, session_cookie, state_cookie,
};
use crate::{ApiError, ApiResult, AppState};

use ident_auth::AuthRequest;
use ident_core::Provider;

use std::panic::Location;
use std::str::FromStr;

use axum::{
    extract::{Path, Query, State},
    response::Redirect,
};
use axum_extra::extract::CookieJar;
use error_location::ErrorLocation;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct CallbackQuery {
    pub code: Option<String>,
    pub state: Option<String>,
    /// Set by the provider when the user declines consent
    pub error: Option<String>,
}

/// GET /auth/{provider} and /auth/{provider}/
///
/// Store a fresh `state` in a cookie and send the browser to the provider.
pub async fn oauth_start(
    State(state): State<AppState>,
    Path(provider): Path<String>,
    jar: CookieJar,
) -> ApiResult<(CookieJar, Redirect)> {
    let provider = parse_provider(&provider)?;
    let strategy = state.registry.get(provider.as_str())?;

    let oauth_state = new_oauth_state();
    let url = strategy
        .authorization_url(&oauth_state)?
        .ok_or_else(|| ApiError::NotFound {
            message: format!("{} has no redirect handshake", provider),
            location: ErrorLocation::from(Location::caller()),
        })?;

    log::debug!("Redirecting to {} consent page", provider);

    Ok((
        jar.add(state_cookie(oauth_state, state.secure_cookies)),
        Redirect::to(url.as_str()),
    ))
}

/// GET /auth/{provider}/callback
pub async fn oauth_callback(
    State(state): State<AppState>,
    Path(provider): Path<String>,
    Query(query): Query<CallbackQuery>,
    jar: CookieJar,
) -> ApiResult<(CookieJar, Redirect)> {
    let provider = parse_provider(&provider)?;
    let strategy = state.registry.get(provider.as_str())?;

    if let Some(error) = &query.error {
        log::warn!("{} callback carried error: {}", provider, error);
        return Err(ApiError::authentication_failed());
    }

    let expected = jar.get(STATE_COOKIE).map(|c| c.value().to_string());
    match (&query.state, &expected) {
        (Some(got), Some(want)) if !got.is_empty() && got == want => {}
        _ => {
            log::warn!("{} callback state did not match the state cookie", provider);
            return Err(ApiError::authentication_failed());
        }
    }

    let Some(code) = query.code.filter(|c| !c.is_empty()) else {
        log::warn!("{} callback without an authorization code", provider);
        return Err(ApiError::authentication_failed());
    };

    let account = strategy.authenticate(AuthRequest::Callback { code }).await?;
    let token = state.sessions.issue(&account)?;
    log::info!("Account {} signed in with {}", account.id, provider);

    let jar = jar
        .remove(clear_state_cookie())
        .add(session_cookie(token, state.secure_cookies));

    Ok((jar, Redirect::to("/")))
}

#[track_caller]
fn parse_provider(raw: &str) -> ApiResult<Provider> {
    Provider::from_str(raw).map_err(|_| ApiError::NotFound {
        message: format!("Unknown provider '{}'", raw),
        location: ErrorLocation::from(Location::caller()),
    })
}
