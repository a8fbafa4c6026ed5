use std::path::{Path, PathBuf};
use tracing::debug;

pub const CONFIG_DIR_ENV: &str = "LOCALCONF_DIR";
pub const DEFAULT_CONFIG_DIR: &str = "conf";

pub const INTERPRETER_SETTINGS_FILE: &str = "interpreter.json";
pub const NOTEBOOK_AUTHORIZATION_FILE: &str = "notebook-authorization.json";
pub const CREDENTIALS_FILE: &str = "credentials.json";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StorageConfig {
    pub config_dir: PathBuf,
}

impl StorageConfig {
    pub fn new(config_dir: impl Into<PathBuf>) -> Self {
        Self {
            config_dir: config_dir.into(),
        }
    }

    /// Picks the config directory: explicit flag, then environment, then default.
    pub fn resolve(flag: Option<PathBuf>, env_value: Option<String>) -> Self {
        if let Some(dir) = flag {
            return Self::new(dir);
        }

        match env_value.filter(|v| !v.trim().is_empty()) {
            Some(dir) => Self::new(dir),
            None => Self::default(),
        }
    }

    pub fn from_env(flag: Option<PathBuf>) -> Self {
        let config = Self::resolve(flag, std::env::var(CONFIG_DIR_ENV).ok());
        debug!("Using config directory {}", config.config_dir.display());
        config
    }

    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self::new(DEFAULT_CONFIG_DIR)
    }
}
