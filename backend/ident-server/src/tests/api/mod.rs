mod account_dto;
mod error;
