use crate::{UiError, render_provider_button};

use ident_core::Provider;

#[test]
fn test_github_button_links_to_github_auth_route() {
    let html = render_provider_button(Provider::GitHub, "Sign in with GitHub").unwrap();

    assert!(html.starts_with(r#"<a class="github-button" href="/auth/github/">"#));
    assert!(html.contains(r#"class="github-icon""#));
    assert!(html.ends_with("<span>Sign in with GitHub</span></a>"));
}

#[test]
fn test_google_button_links_to_google_auth_route() {
    let html = render_provider_button(Provider::Google, "Continue").unwrap();

    assert!(html.starts_with(r#"<a class="google-button" href="/auth/google/">"#));
    assert!(html.contains(r#"class="google-icon""#));
    assert!(html.ends_with("<span>Continue</span></a>"));
}

#[test]
fn test_button_text_is_html_escaped() {
    let html = render_provider_button(Provider::GitHub, "<script>alert(1)</script> & co").unwrap();

    assert!(html.contains("<span>&lt;script&gt;alert(1)&lt;/script&gt; &amp; co</span>"));
    assert!(!html.contains("<script>"));
}

#[test]
fn test_blank_button_text_is_rejected() {
    assert!(matches!(
        render_provider_button(Provider::Google, ""),
        Err(UiError::EmptyButtonText { .. })
    ));
    assert!(matches!(
        render_provider_button(Provider::Google, "   "),
        Err(UiError::EmptyButtonText { .. })
    ));
}
