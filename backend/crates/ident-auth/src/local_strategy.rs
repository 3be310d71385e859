//! Email/username + password sign-in.

use crate::{AuthError, AuthRequest, PasswordHasher, Result as AuthErrorResult, Strategy};

use ident_core::{Account, AccountStore, ErrorLocation};

use std::panic::Location;
use std::sync::Arc;

use async_trait::async_trait;
use log::debug;
use url::Url;

pub const LOCAL_STRATEGY_NAME: &str = "local";

pub struct LocalStrategy {
    store: Arc<dyn AccountStore>,
    hasher: Arc<dyn PasswordHasher>,
}

impl LocalStrategy {
    pub fn new(store: Arc<dyn AccountStore>, hasher: Arc<dyn PasswordHasher>) -> Self {
        Self { store, hasher }
    }

    /// Look up by email or username (case-insensitive) and check the password.
    pub async fn verify(&self, identifier: &str, password: &str) -> AuthErrorResult<Account> {
        let account = self
            .store
            .find_by_email_or_username(&identifier.to_lowercase())
            .await?
            .ok_or_else(|| AuthError::NotFound {
                identifier: identifier.to_string(),
                location: ErrorLocation::from(Location::caller()),
            })?;

        let Some(hash) = account.password_hash.clone().filter(|h| !h.is_empty()) else {
            debug!("Account {} has no local password", account.id);
            return Err(AuthError::InvalidCredential {
                location: ErrorLocation::from(Location::caller()),
            });
        };

        // Hashing blocks.
        let hasher = Arc::clone(&self.hasher);
        let password = password.to_string();
        let matches = tokio::task::spawn_blocking(move || hasher.verify(&password, &hash))
            .await
            .map_err(|e| AuthError::PasswordHash {
                message: format!("Password check aborted: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })??;

        if !matches {
            return Err(AuthError::InvalidCredential {
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(account)
    }
}

#[async_trait]
impl Strategy for LocalStrategy {
    fn name(&self) -> &str {
        LOCAL_STRATEGY_NAME
    }

    fn authorization_url(&self, _state: &str) -> AuthErrorResult<Option<Url>> {
        Ok(None)
    }

    async fn authenticate(&self, request: AuthRequest) -> AuthErrorResult<Account> {
        match request {
            AuthRequest::Credentials {
                identifier,
                password,
            } => self.verify(&identifier, &password).await,
            AuthRequest::Callback { .. } => Err(AuthError::UnsupportedRequest {
                strategy: LOCAL_STRATEGY_NAME.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}
