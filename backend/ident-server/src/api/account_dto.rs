use ident_core::{Account, Provider};

use serde::Serialize;

/// Account as clients see it. Never carries the password hash or tokens.
#[derive(Debug, Serialize)]
pub struct AccountDto {
    pub id: String,
    pub email: Option<String>,
    pub username: Option<String>,
    pub name: Option<String>,
    pub email_verified: bool,
    /// Providers with a linked id, e.g. `["github"]`
    pub providers: Vec<String>,
    pub created_at: i64,
}

impl From<Account> for AccountDto {
    fn from(a: Account) -> Self {
        let providers = Provider::ALL
            .iter()
            .filter(|p| a.linked_id(**p).is_some())
            .map(|p| p.as_str().to_string())
            .collect();

        Self {
            id: a.id.to_string(),
            email_verified: a.is_verified(),
            email: a.email,
            username: a.username,
            name: a.name,
            providers,
            created_at: a.created_at.timestamp(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct AccountResponse {
    pub account: AccountDto,
}

impl From<Account> for AccountResponse {
    fn from(account: Account) -> Self {
        Self {
            account: account.into(),
        }
    }
}
