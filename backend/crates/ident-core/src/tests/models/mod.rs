mod account;
mod email_verification_state;
mod external_profile;
mod provider;
