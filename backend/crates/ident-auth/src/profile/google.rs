use super::non_blank;
use crate::{AuthError, Result as AuthErrorResult};

use ident_core::{CandidateEmail, ExternalProfile, Provider};

use serde::{Deserialize, Serialize};

/// OpenID Connect userinfo response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GoogleProfile {
    #[serde(default)]
    pub sub: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub email_verified: Option<bool>,
    #[serde(default)]
    pub name: Option<String>,
}

impl GoogleProfile {
    /// Google supplies exactly one address; it is both primary and the
    /// username hint.
    #[track_caller]
    pub fn normalize(&self) -> AuthErrorResult<ExternalProfile> {
        let subject_id = non_blank(self.sub.as_deref())
            .ok_or_else(|| AuthError::provider_protocol(Provider::Google, "sub missing"))?;
        let email = non_blank(self.email.as_deref())
            .ok_or_else(|| AuthError::provider_protocol(Provider::Google, "email missing"))?;

        Ok(ExternalProfile {
            subject_id,
            candidate_emails: vec![CandidateEmail::new(
                email.clone(),
                true,
                self.email_verified.unwrap_or(true),
            )],
            display_name: non_blank(self.name.as_deref()),
            username_hint: Some(email),
        })
    }
}
