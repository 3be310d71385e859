//! Password hashing for local credentials.
//!
//! Hashes are stored as `hex(salt):hex(key)` with a 16-byte random salt and a
//! 64-byte scrypt key.

use crate::{AuthError, Result as AuthErrorResult};

use ident_core::ErrorLocation;

use std::panic::Location;

use scrypt::{Params, scrypt};

const SALT_LEN: usize = 16;
const KEY_LEN: usize = 64;

/// Hashes and verifies local passwords.
pub trait PasswordHasher: Send + Sync {
    fn hash(&self, password: &str) -> AuthErrorResult<String>;

    /// `Ok(false)` for a wrong password, `Err` for a hash that cannot be parsed.
    fn verify(&self, password: &str, hash: &str) -> AuthErrorResult<bool>;
}

#[derive(Debug, Clone, Copy)]
pub struct ScryptHasher {
    log_n: u8,
    r: u32,
    p: u32,
}

impl ScryptHasher {
    /// N = 2^14, r = 16, p = 1
    pub fn new() -> Self {
        Self {
            log_n: 14,
            r: 16,
            p: 1,
        }
    }

    /// Custom cost parameters. Tests use cheap ones.
    pub fn with_params(log_n: u8, r: u32, p: u32) -> Self {
        Self { log_n, r, p }
    }

    #[track_caller]
    fn derive_key(&self, password: &str, salt: &str) -> AuthErrorResult<Vec<u8>> {
        let params =
            Params::new(self.log_n, self.r, self.p, KEY_LEN).map_err(|e| {
                AuthError::PasswordHash {
                    message: format!("Invalid scrypt params: {}", e),
                    location: ErrorLocation::from(Location::caller()),
                }
            })?;

        let mut output = vec![0u8; KEY_LEN];
        scrypt(password.as_bytes(), salt.as_bytes(), &params, &mut output).map_err(|e| {
            AuthError::PasswordHash {
                message: format!("scrypt failed: {}", e),
                location: ErrorLocation::from(Location::caller()),
            }
        })?;

        Ok(output)
    }
}

impl Default for ScryptHasher {
    fn default() -> Self {
        Self::new()
    }
}

impl PasswordHasher for ScryptHasher {
    fn hash(&self, password: &str) -> AuthErrorResult<String> {
        let salt_hex = hex::encode(rand::random::<[u8; SALT_LEN]>());
        let key = self.derive_key(password, &salt_hex)?;
        Ok(format!("{}:{}", salt_hex, hex::encode(key)))
    }

    fn verify(&self, password: &str, hash: &str) -> AuthErrorResult<bool> {
        let (salt, key_hex) = hash.split_once(':').ok_or_else(|| AuthError::PasswordHash {
            message: "Invalid password hash format".to_string(),
            location: ErrorLocation::from(Location::caller()),
        })?;

        let expected = hex::decode(key_hex).map_err(|e| AuthError::PasswordHash {
            message: format!("Invalid hex in password hash: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        let derived = self.derive_key(password, salt)?;

        Ok(constant_time_eq(&derived, &expected))
    }
}

fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.iter().zip(b).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
}
