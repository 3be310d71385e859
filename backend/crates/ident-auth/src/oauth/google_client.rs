use super::{
    ProviderClient, ProviderEndpoints, ProviderSettings, build_authorization_url, exchange_code,
    get_json, http_client,
};
use crate::{GoogleProfile, ProviderProfile, Result as AuthErrorResult};

use ident_core::Provider;

use async_trait::async_trait;
use url::Url;

pub const DEFAULT_AUTHORIZE_URL: &str = "https://accounts.google.com/o/oauth2/v2/auth";
pub const DEFAULT_TOKEN_URL: &str = "https://oauth2.googleapis.com/token";
pub const DEFAULT_USERINFO_URL: &str = "https://openidconnect.googleapis.com/v1/userinfo";
pub const DEFAULT_SCOPES: &[&str] = &["openid", "email", "profile"];

pub struct GoogleClient {
    http: reqwest::Client,
    settings: ProviderSettings,
    endpoints: ProviderEndpoints,
}

impl GoogleClient {
    pub fn new(settings: ProviderSettings) -> AuthErrorResult<Self> {
        Self::with_endpoints(settings, Self::default_endpoints())
    }

    pub fn with_endpoints(
        settings: ProviderSettings,
        endpoints: ProviderEndpoints,
    ) -> AuthErrorResult<Self> {
        Ok(Self {
            http: http_client(Provider::Google)?,
            settings,
            endpoints,
        })
    }

    pub fn default_endpoints() -> ProviderEndpoints {
        ProviderEndpoints {
            authorize_url: DEFAULT_AUTHORIZE_URL.to_string(),
            token_url: DEFAULT_TOKEN_URL.to_string(),
            profile_url: DEFAULT_USERINFO_URL.to_string(),
        }
    }
}

#[async_trait]
impl ProviderClient for GoogleClient {
    fn provider(&self) -> Provider {
        Provider::Google
    }

    fn authorization_url(&self, state: &str) -> AuthErrorResult<Url> {
        build_authorization_url(Provider::Google, &self.endpoints, &self.settings, state)
    }

    async fn exchange_code(&self, code: &str) -> AuthErrorResult<String> {
        exchange_code(
            &self.http,
            Provider::Google,
            &self.endpoints,
            &self.settings,
            code,
        )
        .await
    }

    async fn fetch_profile(&self, access_token: &str) -> AuthErrorResult<ProviderProfile> {
        let profile: GoogleProfile = get_json(
            &self.http,
            Provider::Google,
            &self.endpoints.profile_url,
            access_token,
        )
        .await?;

        Ok(ProviderProfile::Google(profile))
    }
}
