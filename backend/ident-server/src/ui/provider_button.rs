//! Sign-in link for one provider: icon plus caller-supplied label.

use crate::ui::error::{Result as UiErrorResult, UiError};

use ident_core::Provider;

const GITHUB_ICON: &str = include_str!("icons/github.svg");
const GOOGLE_ICON: &str = include_str!("icons/google.svg");

/// Render `<a class="{p}-button" href="/auth/{p}/">` with the provider icon
/// and the escaped label.
#[track_caller]
pub fn render_provider_button(provider: Provider, button_text: &str) -> UiErrorResult<String> {
    if button_text.trim().is_empty() {
        return Err(UiError::empty_button_text());
    }

    let name = provider.as_str();

    Ok(format!(
        r#"<a class="{name}-button" href="/auth/{name}/">{icon}<span>{text}</span></a>"#,
        name = name,
        icon = icon(provider),
        text = html_escape::encode_text(button_text),
    ))
}

fn icon(provider: Provider) -> &'static str {
    match provider {
        Provider::GitHub => GITHUB_ICON.trim_end(),
        Provider::Google => GOOGLE_ICON.trim_end(),
    }
}
