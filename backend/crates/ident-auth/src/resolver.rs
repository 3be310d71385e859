//! OAuth account-linking decision.
//!
//! ## Resolution order
//!
//! 1. An account already linked to `(provider, subject_id)` is returned as-is.
//!    Nothing is written and no credential entry is appended.
//! 2. Otherwise an account whose email matches the profile is linked: empty
//!    fields are filled, the provider id is set, one credential is appended
//!    and the email is marked verified. GitHub matches against its verified
//!    emails only; Google supplies one email and matches it by exact value,
//!    whatever its verified flag says.
//! 3. Otherwise a new verified account is created from the profile.
//!
//! ## Races
//!
//! Steps 2 and 3 are check-then-act. When the store rejects the write with
//! [`StoreError::Conflict`](ident_core::StoreError::Conflict) another request
//! won the race; resolution runs once more from step 1 so the winner's
//! account is found and returned. A second conflict is a persistence failure.

use crate::{AuthError, Result as AuthErrorResult};

use ident_core::{Account, AccountStore, ExternalProfile, Provider, StoreError};

use std::sync::Arc;

use log::{debug, info, warn};

/// First try plus one retry after a lost write race.
const MAX_ATTEMPTS: usize = 2;

pub struct AccountResolver {
    store: Arc<dyn AccountStore>,
}

impl AccountResolver {
    pub fn new(store: Arc<dyn AccountStore>) -> Self {
        Self { store }
    }

    pub async fn resolve(
        &self,
        provider: Provider,
        profile: &ExternalProfile,
        access_token: &str,
    ) -> AuthErrorResult<Account> {
        let mut attempt = 1;
        loop {
            match self.resolve_once(provider, profile, access_token).await {
                Err(Outcome::Conflict(e)) if attempt < MAX_ATTEMPTS => {
                    warn!(
                        "{} sign-in for subject {} lost a write race, retrying: {}",
                        provider, profile.subject_id, e
                    );
                    attempt += 1;
                }
                Err(Outcome::Conflict(e)) | Err(Outcome::Failed(e)) => {
                    return Err(AuthError::persistence(e));
                }
                Ok(account) => return Ok(account),
            }
        }
    }

    async fn resolve_once(
        &self,
        provider: Provider,
        profile: &ExternalProfile,
        access_token: &str,
    ) -> Result<Account, Outcome> {
        if let Some(account) = self
            .store
            .find_by_provider_id(provider, &profile.subject_id)
            .await?
        {
            debug!(
                "{} subject {} already linked to account {}",
                provider, profile.subject_id, account.id
            );
            return Ok(account);
        }

        let emails = match_emails(provider, profile);
        let existing = if emails.is_empty() {
            None
        } else {
            self.store.find_by_any_email(&emails).await?
        };

        match existing {
            Some(mut account) => {
                account.link_external(provider, profile, access_token);
                self.store.update(&account).await?;
                info!("Linked {} to existing account {}", provider, account.id);
                Ok(account)
            }
            None => {
                let account = Account::from_external(provider, profile, access_token);
                self.store.insert(&account).await?;
                info!("Created account {} from {} sign-in", account.id, provider);
                Ok(account)
            }
        }
    }
}

/// Addresses an existing account may be matched on.
fn match_emails(provider: Provider, profile: &ExternalProfile) -> Vec<String> {
    match provider {
        Provider::GitHub => profile.verified_emails(),
        Provider::Google => profile.primary_email().into_iter().collect(),
    }
}

/// Store failures split by whether another attempt can succeed.
enum Outcome {
    Conflict(StoreError),
    Failed(StoreError),
}

impl From<StoreError> for Outcome {
    fn from(error: StoreError) -> Self {
        if error.is_conflict() {
            Self::Conflict(error)
        } else {
            Self::Failed(error)
        }
    }
}
