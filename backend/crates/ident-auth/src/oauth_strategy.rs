//! Provider sign-in: code -> token -> profile -> account.

use crate::{
    AccountResolver, AuthError, AuthRequest, ProviderClient, Result as AuthErrorResult, Strategy,
};

use ident_core::{Account, ErrorLocation};

use std::panic::Location;
use std::sync::Arc;

use async_trait::async_trait;
use log::debug;
use url::Url;

pub struct OAuthStrategy {
    client: Arc<dyn ProviderClient>,
    resolver: Arc<AccountResolver>,
}

impl OAuthStrategy {
    pub fn new(client: Arc<dyn ProviderClient>, resolver: Arc<AccountResolver>) -> Self {
        Self { client, resolver }
    }

    pub async fn complete(&self, code: &str) -> AuthErrorResult<Account> {
        let provider = self.client.provider();

        let access_token = self.client.exchange_code(code).await?;
        let profile = self.client.fetch_profile(&access_token).await?.normalize()?;

        debug!(
            "{} profile for subject {} ({} candidate emails)",
            provider,
            profile.subject_id,
            profile.candidate_emails.len()
        );

        self.resolver.resolve(provider, &profile, &access_token).await
    }
}

#[async_trait]
impl Strategy for OAuthStrategy {
    fn name(&self) -> &str {
        self.client.provider().as_str()
    }

    fn authorization_url(&self, state: &str) -> AuthErrorResult<Option<Url>> {
        self.client.authorization_url(state).map(Some)
    }

    async fn authenticate(&self, request: AuthRequest) -> AuthErrorResult<Account> {
        match request {
            AuthRequest::Callback { code } => self.complete(&code).await,
            AuthRequest::Credentials { .. } => Err(AuthError::UnsupportedRequest {
                strategy: self.name().to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}
