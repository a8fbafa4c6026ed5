pub mod local;

pub use local::LocalConfigStorage;

use crate::config::{CREDENTIALS_FILE, INTERPRETER_SETTINGS_FILE, NOTEBOOK_AUTHORIZATION_FILE};
use crate::error::{Result, StorageError};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fmt;
use std::path::PathBuf;

/// A JSON document kept by a config storage backend.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ConfigEntry {
    InterpreterSettings,
    NotebookAuthorization,
    Credentials,
}

impl ConfigEntry {
    pub const ALL: [ConfigEntry; 3] = [
        ConfigEntry::InterpreterSettings,
        ConfigEntry::NotebookAuthorization,
        ConfigEntry::Credentials,
    ];

    pub fn file_name(self) -> &'static str {
        match self {
            ConfigEntry::InterpreterSettings => INTERPRETER_SETTINGS_FILE,
            ConfigEntry::NotebookAuthorization => NOTEBOOK_AUTHORIZATION_FILE,
            ConfigEntry::Credentials => CREDENTIALS_FILE,
        }
    }
}

impl fmt::Display for ConfigEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ConfigEntry::InterpreterSettings => "interpreter settings",
            ConfigEntry::NotebookAuthorization => "notebook authorization",
            ConfigEntry::Credentials => "credentials",
        };
        f.write_str(name)
    }
}

pub trait ConfigStorage {
    /// Where `entry` is kept, used for error reporting.
    fn location(&self, entry: ConfigEntry) -> PathBuf;

    fn save_raw(&self, entry: ConfigEntry, content: &str) -> Result<()>;

    /// Returns `None` when the entry has never been saved.
    fn load_raw(&self, entry: ConfigEntry) -> Result<Option<String>>;

    fn save<T: Serialize>(&self, entry: ConfigEntry, value: &T) -> Result<()> {
        let json =
            serde_json::to_string_pretty(value).map_err(|source| StorageError::Serialization {
                source,
                path: self.location(entry),
            })?;
        self.save_raw(entry, &json)
    }

    fn load<T: DeserializeOwned>(&self, entry: ConfigEntry) -> Result<Option<T>> {
        let Some(json) = self.load_raw(entry)? else {
            return Ok(None);
        };

        serde_json::from_str(&json)
            .map(Some)
            .map_err(|source| StorageError::Serialization {
                source,
                path: self.location(entry),
            })
    }
}
