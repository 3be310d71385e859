//! Provider-neutral identity data handed over after user consent.
//!
//! Every provider payload is normalized into an [`ExternalProfile`] before
//! any account decision is made, so the linking logic never branches on
//! provider-specific field paths.

use serde::{Deserialize, Serialize};

/// An email address as reported by the identity provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateEmail {
    pub address: String,
    pub is_primary: bool,
    /// The provider attests the user controls this address.
    pub is_verified: bool,
}

impl CandidateEmail {
    pub fn new(address: impl Into<String>, is_primary: bool, is_verified: bool) -> Self {
        Self {
            address: address.into(),
            is_primary,
            is_verified,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExternalProfile {
    /// Provider-scoped unique identifier
    pub subject_id: String,
    pub candidate_emails: Vec<CandidateEmail>,
    pub display_name: Option<String>,
    pub username_hint: Option<String>,
}

impl ExternalProfile {
    pub fn verified_emails(&self) -> Vec<String> {
        verified_emails(Some(self.candidate_emails.as_slice()))
    }

    pub fn primary_email(&self) -> Option<String> {
        primary_email(Some(self.candidate_emails.as_slice()))
    }
}

/// Addresses flagged as verified, in the order the provider listed them.
///
/// A missing list yields an empty result.
pub fn verified_emails(candidates: Option<&[CandidateEmail]>) -> Vec<String> {
    candidates
        .unwrap_or_default()
        .iter()
        .filter(|candidate| candidate.is_verified)
        .map(|candidate| candidate.address.clone())
        .collect()
}

/// Address of the first entry flagged as primary, if any.
pub fn primary_email(candidates: Option<&[CandidateEmail]>) -> Option<String> {
    candidates
        .unwrap_or_default()
        .iter()
        .find(|candidate| candidate.is_primary)
        .map(|candidate| candidate.address.clone())
}
