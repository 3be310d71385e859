//! HTML routes.

use crate::api::auth::cookies::SESSION_COOKIE;
use crate::ui::login_page::render_login_page;
use crate::{ApiResult, AppState, UiError, render_provider_button};

use ident_core::Provider;

use std::str::FromStr;

use axum::{
    extract::{Path, Query, State},
    response::{Html, IntoResponse, Redirect, Response},
};
use axum_extra::extract::CookieJar;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct ButtonQuery {
    pub text: Option<String>,
}

/// GET /
///
/// Greets a signed-in account, otherwise sends the browser to `/login`.
pub async fn home(State(state): State<AppState>, jar: CookieJar) -> Response {
    let Some(cookie) = jar.get(SESSION_COOKIE) else {
        return Redirect::to("/login").into_response();
    };

    match state.sessions.load(cookie.value()).await {
        Ok(account) => {
            let who = account
                .name
                .as_deref()
                .or(account.email.as_deref())
                .or(account.username.as_deref())
                .unwrap_or("unnamed account");

            Html(format!(
                r#"<!DOCTYPE html>
<html lang="en">
<head><meta charset="utf-8" /><title>Signed in</title></head>
<body>
  <p>Signed in as {}</p>
  <form method="post" action="/logout"><button type="submit">Sign out</button></form>
</body>
</html>"#,
                html_escape::encode_text(who)
            ))
            .into_response()
        }
        Err(e) => {
            log::debug!("Stale session on home page: {}", e);
            Redirect::to("/login").into_response()
        }
    }
}

/// GET /login
pub async fn login_page(State(state): State<AppState>) -> Html<String> {
    let providers: Vec<Provider> = Provider::ALL
        .into_iter()
        .filter(|p| state.registry.contains(p.as_str()))
        .collect();

    Html(render_login_page(&providers))
}

/// GET /ui/button/{provider}?text=...
///
/// Without `text` the label defaults to "Sign in with {Provider}".
pub async fn provider_button(
    Path(provider): Path<String>,
    Query(query): Query<ButtonQuery>,
) -> ApiResult<Html<String>> {
    let provider = Provider::from_str(&provider).map_err(|_| UiError::unknown_provider(&provider))?;

    let text = query
        .text
        .unwrap_or_else(|| format!("Sign in with {}", provider.display_name()));

    Ok(Html(render_provider_button(provider, &text)?))
}
