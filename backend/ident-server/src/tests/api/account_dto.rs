use crate::AccountDto;

use ident_core::{Account, CandidateEmail, ExternalProfile, Provider};

#[test]
fn test_account_json_never_contains_secrets() {
    let profile = ExternalProfile {
        subject_id: "42".into(),
        candidate_emails: vec![CandidateEmail::new("p@x.com", true, true)],
        display_name: Some("Pat".into()),
        username_hint: Some("pat".into()),
    };
    let mut account = Account::from_external(Provider::GitHub, &profile, "gho_secret_token");
    account.password_hash = Some("salt:key".into());

    let json = serde_json::to_string(&AccountDto::from(account)).unwrap();

    assert!(!json.contains("gho_secret_token"));
    assert!(!json.contains("salt:key"));
    assert!(!json.contains("password"));
}

#[test]
fn test_account_dto_lists_linked_providers() {
    let mut account = Account::with_password("a@x.com", None, "salt:key");
    account.google_id = Some("g-1".into());

    let dto = AccountDto::from(account);

    assert_eq!(dto.providers, vec!["google".to_string()]);
    assert_eq!(dto.email.as_deref(), Some("a@x.com"));
    assert!(!dto.email_verified);
}
