use crate::EmailVerificationState;

use std::str::FromStr;

#[test]
fn test_email_verification_state_round_trips_through_str() {
    for state in [
        EmailVerificationState::Unverified,
        EmailVerificationState::Verified,
    ] {
        assert_eq!(EmailVerificationState::from_str(state.as_str()).unwrap(), state);
    }
    assert!(EmailVerificationState::from_str("pending").is_err());
}

#[test]
fn test_email_verification_state_default() {
    assert_eq!(
        EmailVerificationState::default(),
        EmailVerificationState::Unverified
    );
}
