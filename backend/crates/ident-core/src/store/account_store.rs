use crate::{Account, Provider, StoreResult};

use async_trait::async_trait;
use uuid::Uuid;

/// Persistence seam for accounts.
///
/// Implementations must enforce uniqueness of `email` (once non-empty) and of
/// each provider subject id, reporting violations as
/// [`StoreError::Conflict`](crate::StoreError::Conflict).
#[async_trait]
pub trait AccountStore: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> StoreResult<Option<Account>>;

    async fn find_by_provider_id(
        &self,
        provider: Provider,
        subject_id: &str,
    ) -> StoreResult<Option<Account>>;

    /// First account (oldest first) whose email is one of `emails`.
    async fn find_by_any_email(&self, emails: &[String]) -> StoreResult<Option<Account>>;

    /// Case-insensitive match on email or username.
    async fn find_by_email_or_username(&self, identifier: &str) -> StoreResult<Option<Account>>;

    async fn insert(&self, account: &Account) -> StoreResult<()>;

    /// Persist field changes and append credentials not stored yet.
    async fn update(&self, account: &Account) -> StoreResult<()>;
}
