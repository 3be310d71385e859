use crate::{Account, CandidateEmail, EmailVerificationState, ExternalProfile, Provider};

use googletest::prelude::*;

fn github_profile() -> ExternalProfile {
    ExternalProfile {
        subject_id: "1001".to_string(),
        candidate_emails: vec![
            CandidateEmail::new("p@x.com", true, true),
            CandidateEmail::new("alt@x.com", false, true),
        ],
        display_name: Some("Octo Cat".to_string()),
        username_hint: Some("octocat".to_string()),
    }
}

#[test]
fn test_account_new_is_empty_and_unverified() {
    let account = Account::new();

    assert_that!(account.email, none());
    assert_that!(account.linked_credentials, is_empty());
    assert_that!(
        account.email_verification,
        eq(EmailVerificationState::Unverified)
    );
    assert!(!account.has_password());
}

#[test]
fn given_first_time_profile_when_creating_from_external_then_fields_come_from_profile() {
    let account = Account::from_external(Provider::GitHub, &github_profile(), "tok-1");

    assert_that!(account.email, some(eq("p@x.com")));
    assert_that!(account.github_id, some(eq("1001")));
    assert_that!(account.google_id, none());
    assert_that!(account.username, some(eq("octocat")));
    assert_that!(account.name, some(eq("Octo Cat")));
    assert_that!(account.linked_credentials.len(), eq(1));
    assert_that!(account.linked_credentials[0].provider, eq(Provider::GitHub));
    assert_that!(account.linked_credentials[0].access_token, eq("tok-1"));
    assert!(account.is_verified());
}

#[test]
fn given_existing_fields_when_linking_then_only_empty_fields_are_filled() {
    let mut account = Account::new();
    account.email = Some("old@x.com".to_string());
    account.name = Some("Keep Me".to_string());

    account.link_external(Provider::GitHub, &github_profile(), "tok-2");

    assert_that!(account.email, some(eq("old@x.com")));
    assert_that!(account.name, some(eq("Keep Me")));
    assert_that!(account.username, some(eq("octocat")));
    assert_that!(account.github_id, some(eq("1001")));
}

#[test]
fn given_blank_email_when_linking_then_primary_email_fills_it() {
    let mut account = Account::new();
    account.email = Some(String::new());

    account.link_external(Provider::GitHub, &github_profile(), "tok-3");

    assert_that!(account.email, some(eq("p@x.com")));
}

#[test]
fn given_prior_credentials_when_linking_then_one_entry_is_appended() {
    let mut account = Account::from_external(Provider::GitHub, &github_profile(), "first");
    let before = account.linked_credentials.clone();

    let google = ExternalProfile {
        subject_id: "g-7".to_string(),
        candidate_emails: vec![CandidateEmail::new("p@x.com", true, true)],
        display_name: None,
        username_hint: None,
    };
    account.link_external(Provider::Google, &google, "second");

    assert_that!(account.linked_credentials.len(), eq(before.len() + 1));
    assert_eq!(account.linked_credentials[..before.len()], before[..]);
    assert_that!(account.linked_credentials[1].provider, eq(Provider::Google));
    assert_that!(account.linked_id(Provider::Google), some(eq("g-7")));
    assert_that!(account.linked_id(Provider::GitHub), some(eq("1001")));
}

#[test]
fn given_unverified_account_when_linking_then_becomes_verified() {
    let mut account = Account::with_password("p@x.com", None, "salt:key");
    assert!(!account.is_verified());

    account.link_external(Provider::GitHub, &github_profile(), "tok");

    assert!(account.is_verified());
    assert!(account.has_password());
}
