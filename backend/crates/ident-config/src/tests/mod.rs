
use crate::CONFIG_DIR_ENV;

use std::env;

use tempfile::TempDir;

/// Variables that must not leak in from the developer's shell.
const OVERRIDE_VARS: &[&str] = &[
    "IDENT_SERVER_HOST",
    "IDENT_SERVER_PORT",
    "IDENT_PUBLIC_URL",
    "IDENT_DATABASE_PATH",
    "IDENT_SESSION_SECRET",
    "IDENT_SESSION_TTL_SECS",
    "IDENT_SECURE_COOKIES",
    "IDENT_LOG_LEVEL",
    "IDENT_LOG_COLORED",
    "IDENT_LOG_FILE",
    "GITHUB_ID",
    "GITHUB_SECRET",
    "GOOGLE_ID",
    "GOOGLE_SECRET",
];

/// RAII guard for environment variables - automatically restores on drop
pub(crate) struct EnvGuard {
    key: &'static str,
    original: Option<String>,
}

impl EnvGuard {
    pub(crate) fn set(key: &'static str, value: &str) -> Self {
        unsafe {
            let original = env::var(key).ok();
            env::set_var(key, value);
            Self { key, original }
        }
    }

    pub(crate) fn remove(key: &'static str) -> Self {
        unsafe {
            let original = env::var(key).ok();
            env::remove_var(key);
            Self { key, original }
        }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        unsafe {
            match &self.original {
                Some(val) => env::set_var(self.key, val),
                None => env::remove_var(self.key),
            }
        }
    }
}

pub(crate) struct TestConfigDir {
    pub(crate) temp: TempDir,
    _dir: EnvGuard,
    _cleared: Vec<EnvGuard>,
}

impl TestConfigDir {
    pub(crate) fn write_toml(&self, contents: &str) {
        std::fs::write(self.temp.path().join(crate::CONFIG_FILE_NAME), contents).unwrap();
    }
}

/// Temp config dir pointed to by IDENT_CONFIG_DIR, with overrides cleared
pub(crate) fn setup_config_dir() -> TestConfigDir {
    let temp = TempDir::new().unwrap();
    let dir = EnvGuard::set(CONFIG_DIR_ENV, temp.path().to_str().unwrap());
    let cleared = OVERRIDE_VARS.iter().map(|v| EnvGuard::remove(*v)).collect();
    TestConfigDir {
        temp,
        _dir: dir,
        _cleared: cleared,
    }
}
