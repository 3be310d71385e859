use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_SESSION_TTL_SECS, MIN_SESSION_SECRET_LEN,
    MIN_SESSION_TTL_SECS, ProviderConfig,
};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    /// HS256 key for session tokens. Generated per process when absent,
    /// which signs everyone out on restart.
    pub session_secret: Option<String>,
    pub session_ttl_secs: u64,
    /// Mark the session cookie `Secure`
    pub secure_cookies: bool,
    pub github: ProviderConfig,
    pub google: ProviderConfig,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            session_secret: None,
            session_ttl_secs: DEFAULT_SESSION_TTL_SECS,
            secure_cookies: false,
            github: ProviderConfig::default(),
            google: ProviderConfig::default(),
        }
    }
}

impl AuthConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if let Some(secret) = &self.session_secret
            && secret.len() < MIN_SESSION_SECRET_LEN
        {
            return Err(ConfigError::auth(format!(
                "auth.session_secret must be at least {} characters",
                MIN_SESSION_SECRET_LEN
            )));
        }

        if self.session_ttl_secs < MIN_SESSION_TTL_SECS {
            return Err(ConfigError::auth(format!(
                "auth.session_ttl_secs must be >= {}, got {}",
                MIN_SESSION_TTL_SECS, self.session_ttl_secs
            )));
        }

        self.github.validate("auth.github")?;
        self.google.validate("auth.google")?;

        Ok(())
    }
}
