#![allow(dead_code)]

use ident_core::{Account, CandidateEmail, ExternalProfile, Provider};

/// Creates a password account with the given email and username
pub fn create_test_account(email: &str, username: Option<&str>) -> Account {
    Account::with_password(email, username.map(str::to_string), "00ff:abcd")
}

/// Creates an account linked to GitHub with one credential
pub fn create_github_account(subject_id: &str, email: &str) -> Account {
    let profile = ExternalProfile {
        subject_id: subject_id.to_string(),
        candidate_emails: vec![CandidateEmail::new(email, true, true)],
        display_name: Some("GitHub User".to_string()),
        username_hint: Some(format!("gh-{}", subject_id)),
    };
    Account::from_external(Provider::GitHub, &profile, "gho_initial")
}

/// Creates a minimal Google profile
pub fn create_google_profile(subject_id: &str, email: &str) -> ExternalProfile {
    ExternalProfile {
        subject_id: subject_id.to_string(),
        candidate_emails: vec![CandidateEmail::new(email, true, true)],
        display_name: Some("Google User".to_string()),
        username_hint: Some(email.to_string()),
    }
}
