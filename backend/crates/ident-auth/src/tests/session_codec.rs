use super::memory_store::MemoryStore;
use crate::{AuthError, SessionClaims, SessionCodec};

use ident_core::Account;

use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use googletest::prelude::*;
use uuid::Uuid;

const SECRET: &[u8] = b"test-secret-key-at-least-32-bytes";

fn codec(store: Arc<MemoryStore>) -> SessionCodec {
    SessionCodec::with_hs256(SECRET, Duration::from_secs(3600), store)
}

#[tokio::test]
async fn given_issued_token_when_loaded_then_returns_same_account() {
    let account = Account::with_password("pat@x.com", None, "h");
    let codec = codec(Arc::new(MemoryStore::with_accounts(vec![account.clone()])));

    let token = codec.issue(&account).unwrap();
    let loaded = codec.load(&token).await.unwrap();

    assert_that!(loaded.id, eq(account.id));
}

#[test]
fn given_issued_token_when_decoded_then_claims_carry_account_id_and_ttl() {
    let account = Account::new();
    let codec = codec(Arc::new(MemoryStore::new()));

    let claims = codec.decode(&codec.issue(&account).unwrap()).unwrap();

    assert_that!(claims.sub, eq(&account.id.to_string()));
    assert_that!(claims.exp - claims.iat, eq(3600));
}

#[test]
fn given_expired_token_when_decoded_then_session_expired() {
    let codec = codec(Arc::new(MemoryStore::new()));
    let now = Utc::now().timestamp();
    let claims = SessionClaims {
        sub: Uuid::new_v4().to_string(),
        iat: now - 7200,
        exp: now - 3600,
    };
    let token = codec.encode_claims(&claims).unwrap();

    let result = codec.decode(&token);

    assert!(matches!(result, Err(AuthError::SessionExpired { .. })));
}

#[test]
fn given_token_signed_with_other_secret_when_decoded_then_decode_error() {
    let account = Account::new();
    let forger = SessionCodec::with_hs256(
        b"another-secret-key-at-least-32-bytes",
        Duration::from_secs(60),
        Arc::new(MemoryStore::new()),
    );
    let token = forger.issue(&account).unwrap();

    let result = codec(Arc::new(MemoryStore::new())).decode(&token);

    assert!(matches!(result, Err(AuthError::SessionDecode { .. })));
}

#[test]
fn given_garbage_token_when_decoded_then_decode_error() {
    let result = codec(Arc::new(MemoryStore::new())).decode("not.a.token");

    assert!(matches!(result, Err(AuthError::SessionDecode { .. })));
}

#[test]
fn given_non_uuid_subject_when_decoded_then_invalid_claim() {
    let codec = codec(Arc::new(MemoryStore::new()));
    let now = Utc::now().timestamp();
    let token = codec
        .encode_claims(&SessionClaims {
            sub: "user-123".to_string(),
            iat: now,
            exp: now + 60,
        })
        .unwrap();

    let result = codec.decode(&token);

    assert!(matches!(result, Err(AuthError::InvalidClaim { .. })));
}

#[tokio::test]
async fn given_token_for_deleted_account_when_loaded_then_not_found() {
    let codec = codec(Arc::new(MemoryStore::new()));
    let token = codec.issue(&Account::new()).unwrap();

    let result = codec.load(&token).await;

    assert!(matches!(result, Err(AuthError::NotFound { .. })));
}
