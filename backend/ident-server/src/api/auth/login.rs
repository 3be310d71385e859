use crate::api::auth::cookies::session_cookie;
use crate::{AccountResponse, ApiResult, AppState};

use ident_auth::AuthRequest;
use ident_auth::local_strategy::LOCAL_STRATEGY_NAME;

use axum::{Json, extract::State};
use axum_extra::extract::CookieJar;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    /// Email or username
    pub email: String,
    pub password: String,
}

/// POST /login
///
/// Local sign-in. Sets the session cookie and returns the account.
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(req): Json<LoginRequest>,
) -> ApiResult<(CookieJar, Json<AccountResponse>)> {
    let strategy = state.registry.get(LOCAL_STRATEGY_NAME)?;

    let account = strategy
        .authenticate(AuthRequest::Credentials {
            identifier: req.email,
            password: req.password,
        })
        .await?;

    let token = state.sessions.issue(&account)?;
    log::info!("Account {} signed in with password", account.id);

    Ok((
        jar.add(session_cookie(token, state.secure_cookies)),
        Json(account.into()),
    ))
}
