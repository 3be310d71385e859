pub mod error;
pub mod models;
pub mod store;

pub use error::{CoreError, Result, StoreError, StoreResult};
pub use error_location::ErrorLocation;
pub use models::account::Account;
pub use models::email_verification_state::EmailVerificationState;
pub use models::external_profile::{
    CandidateEmail, ExternalProfile, primary_email, verified_emails,
};
pub use models::linked_credential::LinkedCredential;
pub use models::provider::Provider;
pub use store::account_store::AccountStore;

#[cfg(test)]
mod tests;
