//! Startup wiring: which strategies exist and how sessions are signed.

use crate::error::Result as ServerErrorResult;

use ident_auth::{
    AccountResolver, GitHubClient, GoogleClient, LocalStrategy, OAuthStrategy, PasswordHasher,
    ProviderClient, ProviderEndpoints, ProviderSettings, SessionCodec, StrategyRegistry,
    oauth::{github_client, google_client},
};
use ident_config::{Config, ProviderConfig};
use ident_core::{AccountStore, Provider};

use std::sync::Arc;
use std::time::Duration;

use log::{info, warn};

/// Register `local` plus every provider with credentials in `config`.
pub fn build_registry(
    config: &Config,
    store: Arc<dyn AccountStore>,
    hasher: Arc<dyn PasswordHasher>,
) -> ServerErrorResult<StrategyRegistry> {
    let mut registry = StrategyRegistry::new();
    let resolver = Arc::new(AccountResolver::new(store.clone()));

    registry.register(Arc::new(LocalStrategy::new(store, hasher)));

    for provider in Provider::ALL {
        let provider_config = provider_config(config, provider);
        if !provider_config.is_configured() {
            info!("{} sign-in disabled (no client credentials)", provider.display_name());
            continue;
        }

        let client = provider_client(config, provider, provider_config)?;
        registry.register(Arc::new(OAuthStrategy::new(client, resolver.clone())));
    }

    Ok(registry)
}

/// HS256 codec keyed by the configured secret, or a random per-process one.
pub fn build_session_codec(config: &Config, store: Arc<dyn AccountStore>) -> SessionCodec {
    let ttl = Duration::from_secs(config.auth.session_ttl_secs);

    match &config.auth.session_secret {
        Some(secret) => SessionCodec::with_hs256(secret.as_bytes(), ttl, store),
        None => {
            warn!("No session secret configured; sessions will not survive a restart");
            let secret = rand::random::<[u8; 32]>();
            SessionCodec::with_hs256(&secret, ttl, store)
        }
    }
}

fn provider_config(config: &Config, provider: Provider) -> &ProviderConfig {
    match provider {
        Provider::GitHub => &config.auth.github,
        Provider::Google => &config.auth.google,
    }
}

fn provider_client(
    config: &Config,
    provider: Provider,
    provider_config: &ProviderConfig,
) -> ServerErrorResult<Arc<dyn ProviderClient>> {
    let (defaults, default_scopes) = match provider {
        Provider::GitHub => (GitHubClient::default_endpoints(), github_client::DEFAULT_SCOPES),
        Provider::Google => (GoogleClient::default_endpoints(), google_client::DEFAULT_SCOPES),
    };

    let scopes = if provider_config.scopes.is_empty() {
        default_scopes.iter().map(|s| s.to_string()).collect()
    } else {
        provider_config.scopes.clone()
    };

    let settings = ProviderSettings {
        client_id: provider_config.client_id.clone().unwrap_or_default(),
        client_secret: provider_config.client_secret.clone().unwrap_or_default(),
        callback_url: config.callback_url(provider.as_str()),
        scopes,
    };

    let endpoints = ProviderEndpoints {
        authorize_url: provider_config
            .authorize_url
            .clone()
            .unwrap_or(defaults.authorize_url),
        token_url: provider_config
            .token_url
            .clone()
            .unwrap_or(defaults.token_url),
        profile_url: provider_config
            .profile_url
            .clone()
            .unwrap_or(defaults.profile_url),
    };

    let client: Arc<dyn ProviderClient> = match provider {
        Provider::GitHub => Arc::new(GitHubClient::with_endpoints(settings, endpoints)?),
        Provider::Google => Arc::new(GoogleClient::with_endpoints(settings, endpoints)?),
    };

    Ok(client)
}
