pub mod cookies;
pub mod login;
pub mod logout;
pub mod oauth;
pub mod session;
