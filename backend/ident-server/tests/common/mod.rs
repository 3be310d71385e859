#![allow(dead_code)]

//! Test infrastructure for ident-server API tests

use ident_auth::{
    AccountResolver, AuthError, GitHubEmail, GitHubProfile, GitHubUser, LocalStrategy,
    OAuthStrategy, PasswordHasher, ProviderClient, ProviderProfile, Result as AuthErrorResult,
    ScryptHasher, SessionCodec, StrategyRegistry,
};
use ident_core::{Account, AccountStore, Provider};
use ident_db::AccountRepository;
use ident_server::AppState;

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use axum::{body::Body, http::Response, http::header::SET_COOKIE};
use http_body_util::BodyExt;
use tempfile::TempDir;
use url::Url;

pub const SESSION_SECRET: &[u8] = b"test-session-secret-that-is-long-enough";
pub const PASSWORD: &str = "correct horse";

/// Code the stub provider accepts.
pub const GOOD_CODE: &str = "good-code";

/// Always GitHub; accepts only [`GOOD_CODE`].
pub struct StubGitHub;

#[async_trait]
impl ProviderClient for StubGitHub {
    fn provider(&self) -> Provider {
        Provider::GitHub
    }

    fn authorization_url(&self, state: &str) -> AuthErrorResult<Url> {
        let mut url = Url::parse("https://github.test/login/oauth/authorize").unwrap();
        url.query_pairs_mut().append_pair("state", state);
        Ok(url)
    }

    async fn exchange_code(&self, code: &str) -> AuthErrorResult<String> {
        if code != GOOD_CODE {
            return Err(AuthError::provider_request(Provider::GitHub, "bad_verification_code"));
        }
        Ok("gho_stub_token".to_string())
    }

    async fn fetch_profile(&self, _access_token: &str) -> AuthErrorResult<ProviderProfile> {
        Ok(ProviderProfile::GitHub(GitHubProfile {
            user: GitHubUser {
                id: Some(4242),
                login: Some("octocat".to_string()),
                name: Some("Octo Cat".to_string()),
            },
            emails: Some(vec![GitHubEmail {
                email: "octo@x.com".to_string(),
                primary: true,
                verified: true,
            }]),
        }))
    }
}

pub struct TestApp {
    pub state: AppState,
    pub store: Arc<AccountRepository>,
    pub hasher: Arc<ScryptHasher>,
    _temp: TempDir,
}

impl TestApp {
    /// Local strategy plus a stubbed GitHub; Google left unregistered.
    pub async fn new() -> Self {
        let temp = TempDir::new().unwrap();
        let pool = ident_db::open_pool(&temp.path().join("ident.db"))
            .await
            .unwrap();

        let store = Arc::new(AccountRepository::new(pool));
        let dyn_store: Arc<dyn AccountStore> = store.clone();
        let hasher = Arc::new(ScryptHasher::with_params(4, 8, 1));

        let mut registry = StrategyRegistry::new();
        registry.register(Arc::new(LocalStrategy::new(dyn_store.clone(), hasher.clone())));
        registry.register(Arc::new(OAuthStrategy::new(
            Arc::new(StubGitHub),
            Arc::new(AccountResolver::new(dyn_store.clone())),
        )));

        let sessions =
            SessionCodec::with_hs256(SESSION_SECRET, Duration::from_secs(3600), dyn_store);

        Self {
            state: AppState::new(registry, sessions, false),
            store,
            hasher,
            _temp: temp,
        }
    }

    /// Insert an account that signs in with [`PASSWORD`].
    pub async fn seed_local_account(&self, email: &str) -> Account {
        let hash = self.hasher.hash(PASSWORD).unwrap();
        let account = Account::with_password(email, Some("pat".to_string()), hash);
        self.store.insert(&account).await.unwrap();
        account
    }

    pub fn session_token(&self, account: &Account) -> String {
        self.state.sessions.issue(account).unwrap()
    }
}

pub fn set_cookies(response: &Response<Body>) -> Vec<String> {
    response
        .headers()
        .get_all(SET_COOKIE)
        .iter()
        .map(|v| v.to_str().unwrap().to_string())
        .collect()
}

/// Value of the `Set-Cookie` for `name`, if any.
pub fn cookie_value(response: &Response<Body>, name: &str) -> Option<String> {
    set_cookies(response).into_iter().find_map(|c| {
        let pair = c.split(';').next()?;
        let (key, value) = pair.split_once('=')?;
        (key == name).then(|| value.to_string())
    })
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}

pub async fn body_text(response: Response<Body>) -> String {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(body.to_vec()).unwrap()
}
