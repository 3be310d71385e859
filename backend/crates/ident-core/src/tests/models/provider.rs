use crate::Provider;

use std::str::FromStr;

#[test]
fn test_provider_as_str() {
    assert_eq!(Provider::GitHub.as_str(), "github");
    assert_eq!(Provider::Google.as_str(), "google");
}

#[test]
fn test_provider_from_str() {
    assert_eq!(Provider::from_str("github").unwrap(), Provider::GitHub);
    assert_eq!(Provider::from_str("google").unwrap(), Provider::Google);
    assert!(Provider::from_str("GitHub").is_err());
    assert!(Provider::from_str("twitter").is_err());
}

#[test]
fn test_provider_display_matches_as_str() {
    for provider in Provider::ALL {
        assert_eq!(provider.to_string(), provider.as_str());
    }
}
