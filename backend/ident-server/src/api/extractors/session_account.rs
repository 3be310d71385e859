//! Axum extractor for the signed-in account

use crate::api::auth::cookies::SESSION_COOKIE;
use crate::{ApiError, AppState};

use ident_core::Account;

use std::future::Future;

use axum::{extract::FromRequestParts, http::request::Parts};
use axum_extra::extract::CookieJar;

/// The account named by the `ident_session` cookie.
///
/// Missing, expired, forged or orphaned sessions all reject with the same 401.
pub struct SessionAccount(pub Account);

impl FromRequestParts<AppState> for SessionAccount {
    type Rejection = ApiError;

    #[allow(clippy::manual_async_fn)]
    fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        async move {
            let jar = CookieJar::from_headers(&parts.headers);

            let Some(cookie) = jar.get(SESSION_COOKIE) else {
                log::debug!("No session cookie on request");
                return Err(ApiError::authentication_failed());
            };

            match state.sessions.load(cookie.value()).await {
                Ok(account) => Ok(SessionAccount(account)),
                Err(e) => {
                    log::warn!("Rejected session [{}]: {}", e.error_code(), e);
                    Err(ApiError::authentication_failed())
                }
            }
        }
    }
}
