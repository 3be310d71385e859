use crate::{
    AuthConfig, CONFIG_DIR_ENV, CONFIG_FILE_NAME, ConfigError, ConfigErrorResult,
    DEFAULT_CONFIG_DIR, DatabaseConfig, LoggingConfig, ServerConfig,
};

use std::path::{Path, PathBuf};

use log::info;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub auth: AuthConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration.
    ///
    /// Loading order:
    /// 1. `IDENT_CONFIG_DIR`, else `./.ident/` (created if missing)
    /// 2. `config.toml` in that directory, else defaults
    /// 3. `IDENT_*` and provider credential environment overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let config_dir = Self::config_dir()?;

        if !config_dir.exists() {
            std::fs::create_dir_all(&config_dir).map_err(|e| ConfigError::Io {
                path: config_dir.clone(),
                source: e,
            })?;
        }

        let config_path = config_dir.join(CONFIG_FILE_NAME);

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    fn load_toml(path: &Path) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Priority: IDENT_CONFIG_DIR env var > ./.ident/ (relative to cwd)
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(DEFAULT_CONFIG_DIR))
    }

    /// Validate all configuration.
    /// Call after load() to catch all errors at startup.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.server.validate()?;
        self.auth.validate()?;

        let db_path = Path::new(&self.database.path);
        if self.database.path.is_empty() || db_path.is_absolute() || self.database.path.contains("..")
        {
            return Err(ConfigError::database(
                "database.path must be relative and cannot contain '..'",
            ));
        }

        if let Some(file) = &self.logging.file
            && (Path::new(file).is_absolute() || file.contains(".."))
        {
            return Err(ConfigError::config(
                "logging.file must be relative and cannot contain '..'",
            ));
        }

        Ok(())
    }

    /// Absolute path to the database file.
    pub fn database_path(&self) -> ConfigErrorResult<PathBuf> {
        Ok(Self::config_dir()?.join(&self.database.path))
    }

    /// Absolute path to the log file, when file logging is on.
    pub fn log_file_path(&self) -> ConfigErrorResult<Option<PathBuf>> {
        match &self.logging.file {
            Some(file) => Ok(Some(Self::config_dir()?.join(file))),
            None => Ok(None),
        }
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// `{public base}/auth/{provider}/callback`
    pub fn callback_url(&self, provider: &str) -> String {
        format!(
            "{}/auth/{}/callback",
            self.server.public_base_url(),
            provider
        )
    }

    /// Log configuration summary (NEVER logs secrets).
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!(
            "  server: {}:{} (public {})",
            self.server.host,
            self.server.port,
            self.server.public_base_url()
        );
        info!("  database: {}", self.database.path);
        info!(
            "  session: {} secret, ttl={}s, secure_cookies={}",
            if self.auth.session_secret.is_some() {
                "configured"
            } else {
                "ephemeral"
            },
            self.auth.session_ttl_secs,
            self.auth.secure_cookies
        );
        info!(
            "  providers: github={}, google={}",
            enabled(self.auth.github.is_configured()),
            enabled(self.auth.google.is_configured())
        );
        info!(
            "  logging: {} (colored: {}, file: {})",
            *self.logging.level,
            self.logging.colored,
            self.logging.file.as_deref().unwrap_or("-")
        );
    }

    fn apply_env_overrides(&mut self) {
        // Server
        Self::apply_env_string("IDENT_SERVER_HOST", &mut self.server.host);
        Self::apply_env_parse("IDENT_SERVER_PORT", &mut self.server.port);
        Self::apply_env_option_string("IDENT_PUBLIC_URL", &mut self.server.public_url);

        // Database
        Self::apply_env_string("IDENT_DATABASE_PATH", &mut self.database.path);

        // Session
        Self::apply_env_option_string("IDENT_SESSION_SECRET", &mut self.auth.session_secret);
        Self::apply_env_parse("IDENT_SESSION_TTL_SECS", &mut self.auth.session_ttl_secs);
        Self::apply_env_bool("IDENT_SECURE_COOKIES", &mut self.auth.secure_cookies);

        // Providers keep their conventional variable names
        Self::apply_env_option_string("GITHUB_ID", &mut self.auth.github.client_id);
        Self::apply_env_option_string("GITHUB_SECRET", &mut self.auth.github.client_secret);
        Self::apply_env_option_string("GOOGLE_ID", &mut self.auth.google.client_id);
        Self::apply_env_option_string("GOOGLE_SECRET", &mut self.auth.google.client_secret);

        // Logging
        Self::apply_env_parse("IDENT_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_bool("IDENT_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_option_string("IDENT_LOG_FILE", &mut self.logging.file);
    }

    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// Accepts "true"/"1"
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val == "true" || val == "1";
        }
    }

    /// Unparseable values are ignored.
    fn apply_env_parse<T: std::str::FromStr>(var_name: &str, target: &mut T) {
        if let Ok(val) = std::env::var(var_name)
            && let Ok(parsed) = val.parse()
        {
            *target = parsed;
        }
    }

    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = Some(val);
        }
    }
}

fn enabled(on: bool) -> &'static str {
    if on { "enabled" } else { "disabled" }
}
