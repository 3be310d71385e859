use crate::{AccountResponse, SessionAccount};

use axum::Json;

/// GET /session
pub async fn current_session(SessionAccount(account): SessionAccount) -> Json<AccountResponse> {
    Json(account.into())
}
