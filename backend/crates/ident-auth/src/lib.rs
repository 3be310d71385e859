pub mod error;
pub mod local_strategy;
pub mod oauth;
pub mod oauth_strategy;
pub mod password;
pub mod profile;
pub mod resolver;
pub mod session_claims;
pub mod session_codec;
pub mod strategy;
pub mod strategy_registry;

pub use error::{AuthError, Result};
pub use local_strategy::LocalStrategy;
pub use oauth::{
    ProviderClient, ProviderEndpoints, ProviderSettings, github_client::GitHubClient,
    google_client::GoogleClient,
};
pub use oauth_strategy::OAuthStrategy;
pub use password::{PasswordHasher, ScryptHasher};
pub use profile::{
    ProviderProfile,
    github::{GitHubEmail, GitHubProfile, GitHubUser},
    google::GoogleProfile,
};
pub use resolver::AccountResolver;
pub use session_claims::SessionClaims;
pub use session_codec::SessionCodec;
pub use strategy::{AuthRequest, Strategy};
pub use strategy_registry::StrategyRegistry;

#[cfg(test)]
mod tests;
