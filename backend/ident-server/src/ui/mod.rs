pub mod error;
pub mod login_page;
pub mod provider_button;
