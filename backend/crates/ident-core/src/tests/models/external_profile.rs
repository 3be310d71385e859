use crate::{CandidateEmail, ExternalProfile, primary_email, verified_emails};

use googletest::prelude::*;

fn candidates() -> Vec<CandidateEmail> {
    vec![
        CandidateEmail::new("a@x.com", false, true),
        CandidateEmail::new("b@x.com", false, false),
    ]
}

#[test]
fn given_mixed_candidates_when_filtering_verified_then_only_verified_in_order() {
    let emails = vec![
        CandidateEmail::new("one@x.com", false, true),
        CandidateEmail::new("two@x.com", true, false),
        CandidateEmail::new("three@x.com", true, true),
    ];

    let verified = verified_emails(Some(emails.as_slice()));

    assert_eq!(verified, vec!["one@x.com", "three@x.com"]);
}

#[test]
fn given_no_list_when_filtering_verified_then_empty() {
    assert_that!(verified_emails(None), is_empty());
    assert_that!(verified_emails(Some(&[][..])), is_empty());
}

#[test]
fn given_no_primary_entry_when_finding_primary_then_none() {
    let emails = candidates();

    assert_eq!(verified_emails(Some(emails.as_slice())), vec!["a@x.com"]);
    assert_that!(primary_email(Some(emails.as_slice())), none());
}

#[test]
fn given_primary_entry_when_finding_primary_then_returns_its_address() {
    let emails = vec![
        CandidateEmail::new("first@x.com", false, true),
        CandidateEmail::new("p@x.com", true, false),
        CandidateEmail::new("late@x.com", true, true),
    ];

    assert_that!(primary_email(Some(emails.as_slice())), some(eq("p@x.com")));
}

#[test]
fn given_empty_input_when_finding_primary_then_none() {
    assert_that!(primary_email(None), none());
    assert_that!(primary_email(Some(&[][..])), none());
}

#[test]
fn given_profile_when_using_helpers_then_delegate_to_candidates() {
    let profile = ExternalProfile {
        subject_id: "42".to_string(),
        candidate_emails: candidates(),
        display_name: None,
        username_hint: None,
    };

    assert_eq!(profile.verified_emails(), vec!["a@x.com"]);
    assert_that!(profile.primary_email(), none());
}
