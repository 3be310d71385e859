pub mod account;
pub mod email_verification_state;
pub mod external_profile;
pub mod linked_credential;
pub mod provider;
