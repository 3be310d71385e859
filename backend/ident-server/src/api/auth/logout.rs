use crate::api::auth::cookies::clear_session_cookie;

use axum::response::Redirect;
use axum_extra::extract::CookieJar;

/// POST /logout
///
/// Sessions are stateless, so dropping the cookie is the whole sign-out.
pub async fn logout(jar: CookieJar) -> (CookieJar, Redirect) {
    (jar.remove(clear_session_cookie()), Redirect::to("/login"))
}
