mod auth_config;
mod config;
mod database_config;
mod error;
mod log_level;
mod logging_config;
mod provider_config;
mod server_config;

pub use auth_config::AuthConfig;
pub use config::Config;
pub use database_config::DatabaseConfig;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use provider_config::ProviderConfig;
pub use server_config::ServerConfig;

pub const CONFIG_DIR_ENV: &str = "IDENT_CONFIG_DIR";
pub const DEFAULT_CONFIG_DIR: &str = ".ident";
pub const CONFIG_FILE_NAME: &str = "config.toml";

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8000;
const MIN_PORT: u16 = 1024;
const DEFAULT_DATABASE_FILENAME: &str = "ident.db";
const DEFAULT_SESSION_TTL_SECS: u64 = 60 * 60 * 24 * 14;
const MIN_SESSION_TTL_SECS: u64 = 60;
const MIN_SESSION_SECRET_LEN: usize = 32;
const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_COLORED: bool = true;

#[cfg(test)]
mod tests;
