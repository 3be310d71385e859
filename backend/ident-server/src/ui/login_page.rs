use crate::ui::provider_button::render_provider_button;

use ident_core::Provider;

use log::warn;

/// Full `/login` document: one button per enabled provider plus the local form.
///
/// The form posts JSON to `/login`; failures show the server's message.
pub fn render_login_page(providers: &[Provider]) -> String {
    let buttons: Vec<String> = providers
        .iter()
        .filter_map(|provider| {
            let label = format!("Sign in with {}", provider.display_name());
            render_provider_button(*provider, &label)
                .map_err(|e| warn!("Skipping {} button: {}", provider, e))
                .ok()
        })
        .collect();

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1" />
  <title>Sign in</title>
</head>
<body>
  <h1>Sign in</h1>
  <div class="providers">
    {buttons}
  </div>
  <form id="login-form" method="post" action="/login">
    <label>Email or username <input name="email" autocomplete="username" required /></label>
    <label>Password <input name="password" type="password" autocomplete="current-password" required /></label>
    <button type="submit">Sign in</button>
    <p id="login-error" role="alert"></p>
  </form>
  <script>
    document.getElementById("login-form").addEventListener("submit", async (event) => {{
      event.preventDefault();
      const form = new FormData(event.target);
      const response = await fetch("/login", {{
        method: "POST",
        headers: {{ "Content-Type": "application/json" }},
        body: JSON.stringify({{ email: form.get("email"), password: form.get("password") }}),
      }});
      if (response.ok) {{
        window.location.assign("/");
        return;
      }}
      const body = await response.json().catch(() => null);
      document.getElementById("login-error").textContent =
        body && body.error ? body.error.message : "Authentication failed.";
    }});
  </script>
</body>
</html>"#,
        buttons = buttons.join("\n    "),
    )
}
