use localconf::config::StorageConfig;
use localconf::storage::{ConfigEntry, ConfigStorage, LocalConfigStorage};
use localconf::StorageError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use tempfile::TempDir;

#[derive(Debug, PartialEq, Serialize, Deserialize)]
struct InterpreterSettings {
    interpreter_settings: BTreeMap<String, InterpreterSetting>,
    interpreter_repositories: Vec<String>,
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
struct InterpreterSetting {
    id: String,
    group: String,
    properties: BTreeMap<String, String>,
}

fn sample_settings() -> InterpreterSettings {
    let mut properties = BTreeMap::new();
    properties.insert("spark.master".to_string(), "local[*]".to_string());

    let mut interpreter_settings = BTreeMap::new();
    interpreter_settings.insert(
        "spark".to_string(),
        InterpreterSetting {
            id: "2C4U48MY3".to_string(),
            group: "spark".to_string(),
            properties,
        },
    );

    InterpreterSettings {
        interpreter_settings,
        interpreter_repositories: vec!["central".to_string()],
    }
}

#[test]
fn test_entry_file_names() {
    let storage = LocalConfigStorage::new("/etc/localconf");

    assert_eq!(
        storage.path_of(ConfigEntry::InterpreterSettings),
        std::path::Path::new("/etc/localconf/interpreter.json")
    );
    assert_eq!(
        storage.path_of(ConfigEntry::NotebookAuthorization),
        std::path::Path::new("/etc/localconf/notebook-authorization.json")
    );
    assert_eq!(
        storage.path_of(ConfigEntry::Credentials),
        std::path::Path::new("/etc/localconf/credentials.json")
    );
}

#[test]
fn test_load_missing_entry_returns_none() {
    let temp_dir = TempDir::new().unwrap();
    let storage = LocalConfigStorage::new(temp_dir.path());

    for entry in ConfigEntry::ALL {
        assert_eq!(storage.load_raw(entry).unwrap(), None);
    }
    let typed: Option<InterpreterSettings> =
        storage.load(ConfigEntry::InterpreterSettings).unwrap();
    assert!(typed.is_none());
}

#[test]
fn test_typed_round_trip() {
    let temp_dir = TempDir::new().unwrap();
    let storage = LocalConfigStorage::new(temp_dir.path());
    let settings = sample_settings();

    storage.save(ConfigEntry::InterpreterSettings, &settings).unwrap();
    let loaded: Option<InterpreterSettings> =
        storage.load(ConfigEntry::InterpreterSettings).unwrap();

    assert_eq!(loaded, Some(settings));
}

#[test]
fn test_save_writes_pretty_json() {
    let temp_dir = TempDir::new().unwrap();
    let storage = LocalConfigStorage::new(temp_dir.path());

    storage
        .save(ConfigEntry::NotebookAuthorization, &serde_json::json!({"authInfo": {}}))
        .unwrap();

    let raw = fs::read_to_string(temp_dir.path().join("notebook-authorization.json")).unwrap();
    assert_eq!(raw, "{\n  \"authInfo\": {}\n}");
}

#[test]
fn test_save_creates_config_dir() {
    let temp_dir = TempDir::new().unwrap();
    let config = StorageConfig::new(temp_dir.path().join("conf").join("nested"));
    let storage = LocalConfigStorage::from_config(&config);

    storage
        .save_raw(ConfigEntry::Credentials, "{\"userCredentials\":{}}")
        .unwrap();

    assert_eq!(storage.dir(), config.config_dir());
    assert_eq!(
        storage.load_raw(ConfigEntry::Credentials).unwrap().as_deref(),
        Some("{\"userCredentials\":{}}")
    );
}

#[test]
fn test_entries_are_independent() {
    let temp_dir = TempDir::new().unwrap();
    let storage = LocalConfigStorage::new(temp_dir.path());

    storage.save_raw(ConfigEntry::Credentials, "creds").unwrap();
    storage.save_raw(ConfigEntry::InterpreterSettings, "interp").unwrap();
    storage.save_raw(ConfigEntry::Credentials, "creds-v2").unwrap();

    assert_eq!(
        storage.load_raw(ConfigEntry::Credentials).unwrap().as_deref(),
        Some("creds-v2")
    );
    assert_eq!(
        storage.load_raw(ConfigEntry::InterpreterSettings).unwrap().as_deref(),
        Some("interp")
    );
    assert_eq!(storage.load_raw(ConfigEntry::NotebookAuthorization).unwrap(), None);
}

#[test]
fn test_load_invalid_json_is_serialization_error() {
    let temp_dir = TempDir::new().unwrap();
    let storage = LocalConfigStorage::new(temp_dir.path());
    storage
        .save_raw(ConfigEntry::InterpreterSettings, "{ not json")
        .unwrap();

    let err = storage
        .load::<InterpreterSettings>(ConfigEntry::InterpreterSettings)
        .unwrap_err();

    assert!(matches!(err, StorageError::Serialization { .. }), "unexpected error: {err}");
    assert_eq!(err.path(), temp_dir.path().join("interpreter.json").as_path());
}

#[test]
fn test_load_entry_that_is_a_directory_fails() {
    let temp_dir = TempDir::new().unwrap();
    fs::create_dir(temp_dir.path().join("credentials.json")).unwrap();
    let storage = LocalConfigStorage::new(temp_dir.path());

    let err = storage.load_raw(ConfigEntry::Credentials).unwrap_err();

    assert!(matches!(err, StorageError::Io { .. }), "unexpected error: {err}");
}

#[test]
fn test_entry_display() {
    assert_eq!(ConfigEntry::InterpreterSettings.to_string(), "interpreter settings");
    assert_eq!(ConfigEntry::NotebookAuthorization.to_string(), "notebook authorization");
    assert_eq!(ConfigEntry::Credentials.to_string(), "credentials");
}
