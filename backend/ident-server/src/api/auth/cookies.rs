//! Cookies set by the sign-in routes.

use axum_extra::extract::cookie::{Cookie, SameSite};
use base64::Engine;

pub const SESSION_COOKIE: &str = "ident_session";
pub const STATE_COOKIE: &str = "oauth_state";

const SESSION_COOKIE_PATH: &str = "/";
/// Only the `/auth/*` routes need to see the state.
const STATE_COOKIE_PATH: &str = "/auth";

pub fn session_cookie(token: String, secure: bool) -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE, token))
        .path(SESSION_COOKIE_PATH)
        .http_only(true)
        .secure(secure)
        .same_site(SameSite::Lax)
        .build()
}

pub fn clear_session_cookie() -> Cookie<'static> {
    let mut cookie = Cookie::build((SESSION_COOKIE, ""))
        .path(SESSION_COOKIE_PATH)
        .http_only(true)
        .build();
    cookie.make_removal();
    cookie
}

pub fn state_cookie(state: String, secure: bool) -> Cookie<'static> {
    Cookie::build((STATE_COOKIE, state))
        .path(STATE_COOKIE_PATH)
        .http_only(true)
        .secure(secure)
        .same_site(SameSite::Lax)
        .build()
}

pub fn clear_state_cookie() -> Cookie<'static> {
    let mut cookie = Cookie::build((STATE_COOKIE, ""))
        .path(STATE_COOKIE_PATH)
        .http_only(true)
        .build();
    cookie.make_removal();
    cookie
}

/// 32 random bytes, URL-safe base64.
pub fn new_oauth_state() -> String {
    let bytes = rand::random::<[u8; 32]>();
    base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(bytes)
}
