//! Provider payloads and their normalization into [`ExternalProfile`].

pub mod github;
pub mod google;

use crate::Result as AuthErrorResult;

use ident_core::{ExternalProfile, Provider};

use github::GitHubProfile;
use google::GoogleProfile;

/// Raw identity data, one variant per provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProviderProfile {
    GitHub(GitHubProfile),
    Google(GoogleProfile),
}

impl ProviderProfile {
    pub fn provider(&self) -> Provider {
        match self {
            Self::GitHub(_) => Provider::GitHub,
            Self::Google(_) => Provider::Google,
        }
    }

    #[track_caller]
    pub fn normalize(&self) -> AuthErrorResult<ExternalProfile> {
        match self {
            Self::GitHub(profile) => profile.normalize(),
            Self::Google(profile) => profile.normalize(),
        }
    }
}

/// Treat blank strings like missing ones.
fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}
