use crate::render_login_page;

use ident_core::Provider;

#[test]
fn test_login_page_has_button_per_provider_and_local_form() {
    let html = render_login_page(&[Provider::GitHub, Provider::Google]);

    assert!(html.contains(r#"href="/auth/github/""#));
    assert!(html.contains(r#"href="/auth/google/""#));
    assert!(html.contains("Sign in with GitHub"));
    assert!(html.contains(r#"id="login-form""#));
}

#[test]
fn test_login_page_omits_unregistered_providers() {
    let html = render_login_page(&[Provider::Google]);

    assert!(!html.contains("/auth/github/"));
    assert!(html.contains("/auth/google/"));
}
