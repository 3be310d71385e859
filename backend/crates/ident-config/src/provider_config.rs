use crate::{ConfigError, ConfigErrorResult};

use serde::Deserialize;

/// OAuth application registration for one provider.
///
/// A provider is enabled only when both `client_id` and `client_secret` are
/// set. Endpoint fields override the provider's public URLs.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ProviderConfig {
    pub client_id: Option<String>,
    pub client_secret: Option<String>,
    /// Empty means the provider's default scopes.
    pub scopes: Vec<String>,
    pub authorize_url: Option<String>,
    pub token_url: Option<String>,
    pub profile_url: Option<String>,
}

impl ProviderConfig {
    pub fn is_configured(&self) -> bool {
        is_set(&self.client_id) && is_set(&self.client_secret)
    }

    pub fn validate(&self, name: &str) -> ConfigErrorResult<()> {
        if is_set(&self.client_id) != is_set(&self.client_secret) {
            return Err(ConfigError::provider(format!(
                "{} needs both client_id and client_secret",
                name
            )));
        }

        for (field, value) in [
            ("authorize_url", &self.authorize_url),
            ("token_url", &self.token_url),
            ("profile_url", &self.profile_url),
        ] {
            if let Some(url) = value
                && !(url.starts_with("http://") || url.starts_with("https://"))
            {
                return Err(ConfigError::provider(format!(
                    "{}.{} must be an http(s) URL, got {}",
                    name, field, url
                )));
            }
        }

        Ok(())
    }
}

fn is_set(value: &Option<String>) -> bool {
    value.as_deref().is_some_and(|v| !v.trim().is_empty())
}
