use super::non_blank;
use crate::{AuthError, Result as AuthErrorResult};

use ident_core::{CandidateEmail, ExternalProfile, Provider};

use serde::{Deserialize, Serialize};

/// `GET /user`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GitHubUser {
    pub id: Option<u64>,
    #[serde(default)]
    pub login: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
}

/// One entry of `GET /user/emails`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GitHubEmail {
    pub email: String,
    #[serde(default)]
    pub primary: bool,
    #[serde(default)]
    pub verified: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GitHubProfile {
    pub user: GitHubUser,
    /// `None` when the email list was not returned
    pub emails: Option<Vec<GitHubEmail>>,
}

impl GitHubProfile {
    #[track_caller]
    pub fn normalize(&self) -> AuthErrorResult<ExternalProfile> {
        let subject_id = self
            .user
            .id
            .map(|id| id.to_string())
            .ok_or_else(|| AuthError::provider_protocol(Provider::GitHub, "user id missing"))?;

        let candidate_emails = self
            .emails
            .as_deref()
            .unwrap_or_default()
            .iter()
            .map(|e| CandidateEmail::new(e.email.clone(), e.primary, e.verified))
            .collect();

        Ok(ExternalProfile {
            subject_id,
            candidate_emails,
            display_name: non_blank(self.user.name.as_deref()),
            username_hint: non_blank(self.user.login.as_deref()),
        })
    }
}
