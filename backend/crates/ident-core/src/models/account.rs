//! Local account entity - the record every sign-in method resolves to.

use crate::{EmailVerificationState, ExternalProfile, LinkedCredential, Provider};

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// A local account.
///
/// Optional text fields treat `None` and `Some("")` alike as empty; the
/// linking operations only ever fill empty fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    pub id: Uuid,
    /// Unique across accounts once set
    pub email: Option<String>,
    pub username: Option<String>,
    pub name: Option<String>,
    /// Present only for accounts with a local credential
    pub password_hash: Option<String>,
    pub github_id: Option<String>,
    pub google_id: Option<String>,
    /// Append-only log of external linkages
    pub linked_credentials: Vec<LinkedCredential>,
    pub email_verification: EmailVerificationState,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Account {
    /// Create an empty, unverified account
    pub fn new() -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            email: None,
            username: None,
            name: None,
            password_hash: None,
            github_id: None,
            google_id: None,
            linked_credentials: Vec::new(),
            email_verification: EmailVerificationState::Unverified,
            created_at: now,
            updated_at: now,
        }
    }

    /// Create an account that signs in with a local password
    pub fn with_password(
        email: impl Into<String>,
        username: Option<String>,
        password_hash: impl Into<String>,
    ) -> Self {
        Self {
            email: Some(email.into()),
            username,
            password_hash: Some(password_hash.into()),
            ..Self::new()
        }
    }

    /// Build a brand new account from a first-time external sign-in.
    pub fn from_external(
        provider: Provider,
        profile: &ExternalProfile,
        access_token: impl Into<String>,
    ) -> Self {
        let mut account = Self {
            email: profile.primary_email(),
            username: profile.username_hint.clone(),
            name: profile.display_name.clone(),
            email_verification: EmailVerificationState::Verified,
            ..Self::new()
        };
        account.set_linked_id(provider, profile.subject_id.clone());
        account
            .linked_credentials
            .push(LinkedCredential::new(provider, access_token));
        account
    }

    /// Attach an external identity to this account.
    ///
    /// Fills `email`, `username` and `name` only where empty, records the
    /// provider subject id, appends one credential and marks the email
    /// verified.
    pub fn link_external(
        &mut self,
        provider: Provider,
        profile: &ExternalProfile,
        access_token: impl Into<String>,
    ) {
        fill_if_empty(&mut self.email, profile.primary_email());
        self.set_linked_id(provider, profile.subject_id.clone());
        fill_if_empty(&mut self.username, profile.username_hint.clone());
        self.linked_credentials
            .push(LinkedCredential::new(provider, access_token));
        fill_if_empty(&mut self.name, profile.display_name.clone());
        self.email_verification = EmailVerificationState::Verified;
        self.updated_at = Utc::now();
    }

    pub fn linked_id(&self, provider: Provider) -> Option<&str> {
        match provider {
            Provider::GitHub => self.github_id.as_deref(),
            Provider::Google => self.google_id.as_deref(),
        }
    }

    pub fn set_linked_id(&mut self, provider: Provider, subject_id: String) {
        match provider {
            Provider::GitHub => self.github_id = Some(subject_id),
            Provider::Google => self.google_id = Some(subject_id),
        }
    }

    pub fn is_verified(&self) -> bool {
        self.email_verification == EmailVerificationState::Verified
    }

    pub fn has_password(&self) -> bool {
        self.password_hash.as_deref().is_some_and(|hash| !hash.is_empty())
    }
}

impl Default for Account {
    fn default() -> Self {
        Self::new()
    }
}

fn fill_if_empty(field: &mut Option<String>, value: Option<String>) {
    if field.as_deref().is_none_or(str::is_empty) {
        *field = value;
    }
}
