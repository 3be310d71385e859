//! Session serialization: account -> signed token -> account.

use crate::{AuthError, Result as AuthErrorResult, SessionClaims};

use ident_core::{Account, AccountStore, ErrorLocation};

use std::panic::Location;
use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};

/// Clock skew tolerated when checking `exp`.
const LEEWAY_SECS: u64 = 30;

/// Issues and reads HS256 session tokens.
pub struct SessionCodec {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    ttl: Duration,
    store: Arc<dyn AccountStore>,
}

impl SessionCodec {
    pub fn with_hs256(secret: &[u8], ttl: Duration, store: Arc<dyn AccountStore>) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        validation.leeway = LEEWAY_SECS;

        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            validation,
            ttl,
            store,
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Serialize: only the account id goes into the token.
    #[track_caller]
    pub fn issue(&self, account: &Account) -> AuthErrorResult<String> {
        let claims = SessionClaims::new(account.id, Utc::now().timestamp(), self.ttl.as_secs() as i64);
        self.encode_claims(&claims)
    }

    #[track_caller]
    pub fn encode_claims(&self, claims: &SessionClaims) -> AuthErrorResult<String> {
        encode(&Header::new(Algorithm::HS256), claims, &self.encoding_key).map_err(|e| {
            AuthError::SessionEncode {
                source: e,
                location: ErrorLocation::from(Location::caller()),
            }
        })
    }

    /// Verify signature and expiry, then the claims themselves.
    #[track_caller]
    pub fn decode(&self, token: &str) -> AuthErrorResult<SessionClaims> {
        let token_data = decode::<SessionClaims>(token, &self.decoding_key, &self.validation)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => AuthError::SessionExpired {
                    location: ErrorLocation::from(Location::caller()),
                },
                _ => AuthError::SessionDecode {
                    source: e,
                    location: ErrorLocation::from(Location::caller()),
                },
            })?;

        token_data.claims.validate()?;

        Ok(token_data.claims)
    }

    /// Deserialize: decode the token and load the account it names.
    pub async fn load(&self, token: &str) -> AuthErrorResult<Account> {
        let account_id = self.decode(token)?.validate()?;

        self.store
            .find_by_id(account_id)
            .await?
            .ok_or_else(|| AuthError::NotFound {
                identifier: account_id.to_string(),
                location: ErrorLocation::from(Location::caller()),
            })
    }
}
