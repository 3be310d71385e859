//! OAuth 2.0 authorization-code clients.

pub mod github_client;
pub mod google_client;

use crate::{AuthError, ProviderProfile, Result as AuthErrorResult};

use ident_core::Provider;

use async_trait::async_trait;
use log::debug;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use url::{Url, form_urlencoded};

const USER_AGENT: &str = concat!("ident/", env!("CARGO_PKG_VERSION"));

/// Talks to one identity provider.
#[async_trait]
pub trait ProviderClient: Send + Sync {
    fn provider(&self) -> Provider;

    /// Consent page URL carrying `state`.
    fn authorization_url(&self, state: &str) -> AuthErrorResult<Url>;

    /// Trade an authorization code for an access token.
    async fn exchange_code(&self, code: &str) -> AuthErrorResult<String>;

    async fn fetch_profile(&self, access_token: &str) -> AuthErrorResult<ProviderProfile>;
}

/// Application registration with a provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderSettings {
    pub client_id: String,
    pub client_secret: String,
    /// Absolute URL of `/auth/{provider}/callback`
    pub callback_url: String,
    pub scopes: Vec<String>,
}

/// Provider URLs. Overridable so tests can point at a mock server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderEndpoints {
    pub authorize_url: String,
    pub token_url: String,
    /// GitHub: REST API base. Google: userinfo endpoint.
    pub profile_url: String,
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    #[serde(default)]
    access_token: Option<String>,
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    error_description: Option<String>,
}

pub(crate) fn http_client(provider: Provider) -> AuthErrorResult<reqwest::Client> {
    reqwest::Client::builder()
        .user_agent(USER_AGENT)
        .build()
        .map_err(|e| AuthError::provider_request(provider, format!("HTTP client: {}", e)))
}

pub(crate) fn build_authorization_url(
    provider: Provider,
    endpoints: &ProviderEndpoints,
    settings: &ProviderSettings,
    state: &str,
) -> AuthErrorResult<Url> {
    let mut url = Url::parse(&endpoints.authorize_url).map_err(|e| {
        AuthError::provider_request(provider, format!("Invalid authorize URL: {}", e))
    })?;

    url.query_pairs_mut()
        .append_pair("response_type", "code")
        .append_pair("client_id", &settings.client_id)
        .append_pair("redirect_uri", &settings.callback_url)
        .append_pair("scope", &settings.scopes.join(" "))
        .append_pair("state", state);

    Ok(url)
}

/// Form-POST the code to the token endpoint and pull out `access_token`.
pub(crate) async fn exchange_code(
    http: &reqwest::Client,
    provider: Provider,
    endpoints: &ProviderEndpoints,
    settings: &ProviderSettings,
    code: &str,
) -> AuthErrorResult<String> {
    let body = form_urlencoded::Serializer::new(String::new())
        .append_pair("grant_type", "authorization_code")
        .append_pair("code", code)
        .append_pair("redirect_uri", &settings.callback_url)
        .append_pair("client_id", &settings.client_id)
        .append_pair("client_secret", &settings.client_secret)
        .finish();

    let response = http
        .post(&endpoints.token_url)
        .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
        .header(ACCEPT, "application/json")
        .body(body)
        .send()
        .await
        .map_err(|e| AuthError::provider_request(provider, format!("Token request: {}", e)))?;

    let token: TokenResponse = read_json(provider, response, "Token response").await?;

    if let Some(error) = token.error {
        return Err(AuthError::provider_request(
            provider,
            format!(
                "Token endpoint returned {}: {}",
                error,
                token.error_description.unwrap_or_default()
            ),
        ));
    }

    let access_token = token
        .access_token
        .filter(|t| !t.is_empty())
        .ok_or_else(|| AuthError::provider_request(provider, "No access_token in response"))?;

    debug!("{} code exchanged for access token", provider);

    Ok(access_token)
}

/// Bearer-authenticated GET returning JSON.
pub(crate) async fn get_json<T: DeserializeOwned>(
    http: &reqwest::Client,
    provider: Provider,
    url: &str,
    access_token: &str,
) -> AuthErrorResult<T> {
    let response = http
        .get(url)
        .bearer_auth(access_token)
        .header(ACCEPT, "application/json")
        .send()
        .await
        .map_err(|e| AuthError::provider_request(provider, format!("GET {}: {}", url, e)))?;

    read_json(provider, response, url).await
}

async fn read_json<T: DeserializeOwned>(
    provider: Provider,
    response: reqwest::Response,
    what: &str,
) -> AuthErrorResult<T> {
    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(AuthError::provider_request(
            provider,
            format!("{} returned {}: {}", what, status, body),
        ));
    }

    response
        .json::<T>()
        .await
        .map_err(|e| AuthError::provider_request(provider, format!("{} body: {}", what, e)))
}
