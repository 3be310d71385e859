use crate::{
    AppState, current_session, health, home, login, login_page, logout, oauth_callback,
    oauth_start, provider_button,
};

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::cors::{Any, CorsLayer};

/// Build the application router with all endpoints
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(home))
        .route("/health", get(health::health_check))
        // Local sign-in
        .route("/login", get(login_page).post(login))
        // Provider handshakes; buttons link to the trailing-slash form
        .route("/auth/{provider}", get(oauth_start))
        .route("/auth/{provider}/", get(oauth_start))
        .route("/auth/{provider}/callback", get(oauth_callback))
        // Session
        .route("/session", get(current_session))
        .route("/logout", post(logout))
        .route("/ui/button/{provider}", get(provider_button))
        .with_state(state)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}
