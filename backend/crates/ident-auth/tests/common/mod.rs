use ident_auth::{ProviderEndpoints, ProviderSettings};

use wiremock::MockServer;

pub fn settings(scopes: &[&str]) -> ProviderSettings {
    ProviderSettings {
        client_id: "client-123".to_string(),
        client_secret: "shh-secret".to_string(),
        callback_url: "http://localhost:8000/auth/test/callback".to_string(),
        scopes: scopes.iter().map(|s| s.to_string()).collect(),
    }
}

/// Point every endpoint at the mock server; `profile_path` is appended to its URI.
pub fn endpoints(server: &MockServer, profile_path: &str) -> ProviderEndpoints {
    ProviderEndpoints {
        authorize_url: format!("{}/authorize", server.uri()),
        token_url: format!("{}/token", server.uri()),
        profile_url: format!("{}{}", server.uri(), profile_path),
    }
}
