use crate::Provider;

use serde::{Deserialize, Serialize};

/// One successful external linkage. Entries are only ever appended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkedCredential {
    pub provider: Provider,
    pub access_token: String,
}

impl LinkedCredential {
    pub fn new(provider: Provider, access_token: impl Into<String>) -> Self {
        Self {
            provider,
            access_token: access_token.into(),
        }
    }
}
