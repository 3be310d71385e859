use crate::Result as AuthErrorResult;

use ident_core::Account;

use async_trait::async_trait;
use url::Url;

/// What the HTTP layer hands a strategy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthRequest {
    /// Local form post
    Credentials { identifier: String, password: String },
    /// Provider redirect carrying an authorization code
    Callback { code: String },
}

/// One way of signing in.
#[async_trait]
pub trait Strategy: Send + Sync {
    /// Registry key, also the route segment (`local`, `github`, `google`).
    fn name(&self) -> &str;

    /// Where to send the browser to start a handshake. `None` for strategies
    /// without one.
    fn authorization_url(&self, state: &str) -> AuthErrorResult<Option<Url>>;

    async fn authenticate(&self, request: AuthRequest) -> AuthErrorResult<Account>;
}
