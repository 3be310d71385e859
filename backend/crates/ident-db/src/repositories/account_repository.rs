//! Account repository backed by SQLite.
//!
//! ## Credential log
//!
//! `account_credentials` is append-only. `update()` counts the rows already
//! stored for the account and inserts only the entries past that count, so a
//! stale in-memory copy can never rewrite or drop earlier linkages.
//!
//! ## Case-insensitive lookup
//!
//! `email_key` and `username_key` hold Unicode-lowercased copies computed
//! here on every write; SQLite's `lower()` only folds ASCII.
//!
//! ## Uniqueness
//!
//! Email (once non-empty) and each provider subject id are backed by UNIQUE
//! indexes. Violations surface as `StoreError::Conflict` through the
//! `AccountStore` impl.

use crate::{DbError, Result as DbErrorResult};

use ident_core::{
    Account, AccountStore, EmailVerificationState, LinkedCredential, Provider, StoreError,
    StoreResult,
};

use std::panic::Location;
use std::str::FromStr;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use error_location::ErrorLocation;
use sqlx::{FromRow, QueryBuilder, Sqlite, SqliteConnection, SqlitePool};
use uuid::Uuid;

#[derive(Debug, FromRow)]
struct AccountRow {
    id: String,
    email: Option<String>,
    username: Option<String>,
    name: Option<String>,
    password_hash: Option<String>,
    github_id: Option<String>,
    google_id: Option<String>,
    email_verification: String,
    created_at: i64,
    updated_at: i64,
}

#[derive(Debug, FromRow)]
struct CredentialRow {
    provider: String,
    access_token: String,
}

pub struct AccountRepository {
    pool: SqlitePool,
}

impl AccountRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, account: &Account) -> DbErrorResult<()> {
        let mut tx = self.pool.begin().await?;

        sqlx::query(
            r#"
                INSERT INTO accounts (
                    id, email, username, name, password_hash, github_id, google_id,
                    email_key, username_key, email_verification, created_at, updated_at
                ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(account.id.to_string())
        .bind(&account.email)
        .bind(&account.username)
        .bind(&account.name)
        .bind(&account.password_hash)
        .bind(&account.github_id)
        .bind(&account.google_id)
        .bind(lookup_key(account.email.as_deref()))
        .bind(lookup_key(account.username.as_deref()))
        .bind(account.email_verification.as_str())
        .bind(account.created_at.timestamp())
        .bind(account.updated_at.timestamp())
        .execute(&mut *tx)
        .await?;

        Self::append_credentials(&mut tx, account, 0).await?;

        tx.commit().await?;

        Ok(())
    }

    pub async fn update(&self, account: &Account) -> DbErrorResult<()> {
        let mut tx = self.pool.begin().await?;
        let id = account.id.to_string();

        let result = sqlx::query(
            r#"
                UPDATE accounts
                SET email = ?, username = ?, name = ?, password_hash = ?,
                    github_id = ?, google_id = ?, email_key = ?, username_key = ?,
                    email_verification = ?, updated_at = ?
                WHERE id = ?
            "#,
        )
        .bind(&account.email)
        .bind(&account.username)
        .bind(&account.name)
        .bind(&account.password_hash)
        .bind(&account.github_id)
        .bind(&account.google_id)
        .bind(lookup_key(account.email.as_deref()))
        .bind(lookup_key(account.username.as_deref()))
        .bind(account.email_verification.as_str())
        .bind(account.updated_at.timestamp())
        .bind(&id)
        .execute(&mut *tx)
        .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::AccountNotFound {
                id,
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let stored: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM account_credentials WHERE account_id = ?")
                .bind(&id)
                .fetch_one(&mut *tx)
                .await?;

        Self::append_credentials(&mut tx, account, stored as usize).await?;

        tx.commit().await?;

        Ok(())
    }

    pub async fn find_by_id(&self, id: Uuid) -> DbErrorResult<Option<Account>> {
        let row = sqlx::query_as::<_, AccountRow>(
            r#"
                SELECT id, email, username, name, password_hash, github_id, google_id,
                    email_verification, created_at, updated_at
                FROM accounts
                WHERE id = ?
            "#,
        )
        .bind(id.to_string())
        .fetch_optional(&self.pool)
        .await?;

        self.hydrate(row).await
    }

    pub async fn find_by_provider_id(
        &self,
        provider: Provider,
        subject_id: &str,
    ) -> DbErrorResult<Option<Account>> {
        let sql = match provider {
            Provider::GitHub => {
                r#"
                    SELECT id, email, username, name, password_hash, github_id, google_id,
                        email_verification, created_at, updated_at
                    FROM accounts
                    WHERE github_id = ?
                "#
            }
            Provider::Google => {
                r#"
                    SELECT id, email, username, name, password_hash, github_id, google_id,
                        email_verification, created_at, updated_at
                    FROM accounts
                    WHERE google_id = ?
                "#
            }
        };

        let row = sqlx::query_as::<_, AccountRow>(sql)
            .bind(subject_id)
            .fetch_optional(&self.pool)
            .await?;

        self.hydrate(row).await
    }

    pub async fn find_by_any_email(&self, emails: &[String]) -> DbErrorResult<Option<Account>> {
        if emails.is_empty() {
            return Ok(None);
        }

        let mut builder = QueryBuilder::<Sqlite>::new(
            r#"
                SELECT id, email, username, name, password_hash, github_id, google_id,
                    email_verification, created_at, updated_at
                FROM accounts
                WHERE email IN (
            "#,
        );
        let mut separated = builder.separated(", ");
        for email in emails {
            separated.push_bind(email);
        }
        separated.push_unseparated(") ORDER BY created_at, id LIMIT 1");

        let row = builder
            .build_query_as::<AccountRow>()
            .fetch_optional(&self.pool)
            .await?;

        self.hydrate(row).await
    }

    pub async fn find_by_email_or_username(
        &self,
        identifier: &str,
    ) -> DbErrorResult<Option<Account>> {
        let key = identifier.to_lowercase();
        let row = sqlx::query_as::<_, AccountRow>(
            r#"
                SELECT id, email, username, name, password_hash, github_id, google_id,
                    email_verification, created_at, updated_at
                FROM accounts
                WHERE email_key = ? OR username_key = ?
                ORDER BY created_at, id
                LIMIT 1
            "#,
        )
        .bind(&key)
        .bind(&key)
        .fetch_optional(&self.pool)
        .await?;

        self.hydrate(row).await
    }

    async fn append_credentials(
        conn: &mut SqliteConnection,
        account: &Account,
        already_stored: usize,
    ) -> DbErrorResult<()> {
        let id = account.id.to_string();
        let now = Utc::now().timestamp();

        for (position, credential) in account
            .linked_credentials
            .iter()
            .enumerate()
            .skip(already_stored)
        {
            sqlx::query(
                r#"
                    INSERT INTO account_credentials (
                        account_id, position, provider, access_token, created_at
                    ) VALUES (?, ?, ?, ?, ?)
                "#,
            )
            .bind(&id)
            .bind(position as i64)
            .bind(credential.provider.as_str())
            .bind(&credential.access_token)
            .bind(now)
            .execute(&mut *conn)
            .await?;
        }

        Ok(())
    }

    async fn hydrate(&self, row: Option<AccountRow>) -> DbErrorResult<Option<Account>> {
        let Some(row) = row else {
            return Ok(None);
        };

        let credentials = sqlx::query_as::<_, CredentialRow>(
            r#"
                SELECT provider, access_token
                FROM account_credentials
                WHERE account_id = ?
                ORDER BY position
            "#,
        )
        .bind(&row.id)
        .fetch_all(&self.pool)
        .await?;

        row_to_account(row, credentials).map(Some)
    }
}

#[track_caller]
fn row_to_account(row: AccountRow, credentials: Vec<CredentialRow>) -> DbErrorResult<Account> {
    let linked_credentials = credentials
        .into_iter()
        .map(|c| -> DbErrorResult<LinkedCredential> {
            let provider =
                Provider::from_str(&c.provider).map_err(|e| DbError::Initialization {
                    message: format!("Invalid provider in account_credentials.provider: {}", e),
                    location: ErrorLocation::from(Location::caller()),
                })?;
            Ok(LinkedCredential::new(provider, c.access_token))
        })
        .collect::<DbErrorResult<Vec<_>>>()?;

    Ok(Account {
        id: Uuid::parse_str(&row.id).map_err(|e| DbError::Initialization {
            message: format!("Invalid UUID in accounts.id: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?,
        email: row.email,
        username: row.username,
        name: row.name,
        password_hash: row.password_hash,
        github_id: row.github_id,
        google_id: row.google_id,
        linked_credentials,
        email_verification: EmailVerificationState::from_str(&row.email_verification).map_err(
            |e| DbError::Initialization {
                message: format!("Invalid state in accounts.email_verification: {}", e),
                location: ErrorLocation::from(Location::caller()),
            },
        )?,
        created_at: timestamp(row.created_at, "accounts.created_at")?,
        updated_at: timestamp(row.updated_at, "accounts.updated_at")?,
    })
}

#[track_caller]
fn timestamp(seconds: i64, column: &str) -> DbErrorResult<DateTime<Utc>> {
    DateTime::from_timestamp(seconds, 0).ok_or_else(|| DbError::Initialization {
        message: format!("Invalid timestamp in {}", column),
        location: ErrorLocation::from(Location::caller()),
    })
}

#[async_trait]
impl AccountStore for AccountRepository {
    async fn find_by_id(&self, id: Uuid) -> StoreResult<Option<Account>> {
        Ok(AccountRepository::find_by_id(self, id).await?)
    }

    async fn find_by_provider_id(
        &self,
        provider: Provider,
        subject_id: &str,
    ) -> StoreResult<Option<Account>> {
        Ok(AccountRepository::find_by_provider_id(self, provider, subject_id).await?)
    }

    async fn find_by_any_email(&self, emails: &[String]) -> StoreResult<Option<Account>> {
        Ok(AccountRepository::find_by_any_email(self, emails).await?)
    }

    async fn find_by_email_or_username(&self, identifier: &str) -> StoreResult<Option<Account>> {
        Ok(AccountRepository::find_by_email_or_username(self, identifier).await?)
    }

    async fn insert(&self, account: &Account) -> StoreResult<()> {
        self.create(account).await.map_err(StoreError::from)
    }

    async fn update(&self, account: &Account) -> StoreResult<()> {
        AccountRepository::update(self, account)
            .await
            .map_err(StoreError::from)
    }
}

/// Lowercased lookup copy; blank values have none.
fn lookup_key(value: Option<&str>) -> Option<String> {
    value.filter(|v| !v.is_empty()).map(str::to_lowercase)
}
