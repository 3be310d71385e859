pub mod account_dto;
pub mod auth;
pub mod error;
pub mod extractors;
pub mod pages;
