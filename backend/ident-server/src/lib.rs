pub mod api;
pub mod app_state;
pub mod composition;
pub mod error;
pub mod health;
pub mod logger;
pub mod routes;
pub mod ui;

#[cfg(test)]
mod tests;

pub use api::{
    account_dto::{AccountDto, AccountResponse},
    auth::{
        cookies::{SESSION_COOKIE, STATE_COOKIE},
        login::{LoginRequest, login},
        logout::logout,
        oauth::{CallbackQuery, oauth_callback, oauth_start},
        session::current_session,
    },
    error::{ApiError, ApiErrorBody, ApiErrorResponse, Result as ApiResult},
    extractors::session_account::SessionAccount,
    pages::{ButtonQuery, home, login_page, provider_button},
};
pub use app_state::AppState;
pub use composition::{build_registry, build_session_codec};
pub use error::{Result as ServerResult, ServerError};
pub use ui::{error::UiError, login_page::render_login_page, provider_button::render_provider_button};

pub use crate::routes::build_router;
