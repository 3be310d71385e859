use super::{
    ProviderClient, ProviderEndpoints, ProviderSettings, build_authorization_url, exchange_code,
    get_json, http_client,
};
use crate::{GitHubEmail, GitHubProfile, GitHubUser, ProviderProfile, Result as AuthErrorResult};

use ident_core::Provider;

use async_trait::async_trait;
use url::Url;

pub const DEFAULT_AUTHORIZE_URL: &str = "https://github.com/login/oauth/authorize";
pub const DEFAULT_TOKEN_URL: &str = "https://github.com/login/oauth/access_token";
pub const DEFAULT_API_URL: &str = "https://api.github.com";
pub const DEFAULT_SCOPES: &[&str] = &["user:email"];

pub struct GitHubClient {
    http: reqwest::Client,
    settings: ProviderSettings,
    endpoints: ProviderEndpoints,
}

impl GitHubClient {
    pub fn new(settings: ProviderSettings) -> AuthErrorResult<Self> {
        Self::with_endpoints(settings, Self::default_endpoints())
    }

    pub fn with_endpoints(
        settings: ProviderSettings,
        endpoints: ProviderEndpoints,
    ) -> AuthErrorResult<Self> {
        Ok(Self {
            http: http_client(Provider::GitHub)?,
            settings,
            endpoints,
        })
    }

    pub fn default_endpoints() -> ProviderEndpoints {
        ProviderEndpoints {
            authorize_url: DEFAULT_AUTHORIZE_URL.to_string(),
            token_url: DEFAULT_TOKEN_URL.to_string(),
            profile_url: DEFAULT_API_URL.to_string(),
        }
    }

    fn api(&self, path: &str) -> String {
        format!("{}{}", self.endpoints.profile_url.trim_end_matches('/'), path)
    }
}

#[async_trait]
impl ProviderClient for GitHubClient {
    fn provider(&self) -> Provider {
        Provider::GitHub
    }

    fn authorization_url(&self, state: &str) -> AuthErrorResult<Url> {
        build_authorization_url(Provider::GitHub, &self.endpoints, &self.settings, state)
    }

    async fn exchange_code(&self, code: &str) -> AuthErrorResult<String> {
        exchange_code(
            &self.http,
            Provider::GitHub,
            &self.endpoints,
            &self.settings,
            code,
        )
        .await
    }

    async fn fetch_profile(&self, access_token: &str) -> AuthErrorResult<ProviderProfile> {
        let user: GitHubUser =
            get_json(&self.http, Provider::GitHub, &self.api("/user"), access_token).await?;
        let emails: Vec<GitHubEmail> = get_json(
            &self.http,
            Provider::GitHub,
            &self.api("/user/emails"),
            access_token,
        )
        .await?;

        Ok(ProviderProfile::GitHub(GitHubProfile {
            user,
            emails: Some(emails),
        }))
    }
}
