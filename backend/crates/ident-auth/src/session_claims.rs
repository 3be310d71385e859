use crate::{AuthError, Result as AuthErrorResult};

use ident_core::ErrorLocation;

use std::panic::Location;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Payload of the session cookie.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionClaims {
    /// Account id
    pub sub: String,
    /// Issued at (Unix seconds)
    pub iat: i64,
    /// Expiration (Unix seconds)
    pub exp: i64,
}

impl SessionClaims {
    pub fn new(account_id: Uuid, issued_at: i64, ttl_secs: i64) -> Self {
        Self {
            sub: account_id.to_string(),
            iat: issued_at,
            exp: issued_at + ttl_secs,
        }
    }

    /// Checks run after signature verification.
    #[track_caller]
    pub fn validate(&self) -> AuthErrorResult<Uuid> {
        if self.sub.is_empty() {
            return Err(AuthError::InvalidClaim {
                claim: "sub".to_string(),
                message: "sub (account id) cannot be empty".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        if self.exp <= self.iat {
            return Err(AuthError::InvalidClaim {
                claim: "exp".to_string(),
                message: "exp must be after iat".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Uuid::parse_str(&self.sub).map_err(|e| AuthError::InvalidClaim {
            claim: "sub".to_string(),
            message: format!("sub is not an account id: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })
    }
}
