use anyhow::{Context, Result, anyhow};
use std::io::Write;
use std::path::PathBuf;
use tracing::info;

use crate::cli::read_input;
use crate::config::StorageConfig;
use crate::storage::{ConfigEntry, ConfigStorage, LocalConfigStorage};

pub async fn execute_get(config: StorageConfig, entry: ConfigEntry) -> Result<()> {
    let storage = LocalConfigStorage::from_config(&config);
    let location = storage.path_of(entry);

    let content = tokio::task::spawn_blocking(move || storage.load_raw(entry))
        .await
        .context("Storage task failed")?
        .with_context(|| format!("Failed to load {}", entry))?
        .ok_or_else(|| anyhow!("No {} stored at {}", entry, location.display()))?;

    let mut stdout = std::io::stdout().lock();
    stdout.write_all(content.as_bytes())?;
    stdout.flush()?;
    Ok(())
}

pub async fn execute_put(
    config: StorageConfig,
    entry: ConfigEntry,
    json_file: Option<PathBuf>,
) -> Result<()> {
    let json_content = read_input(json_file.as_deref()).await?;

    let value: serde_json::Value =
        serde_json::from_str(&json_content).context("Failed to parse JSON content")?;

    let storage = LocalConfigStorage::from_config(&config);
    let location = storage.path_of(entry);

    tokio::task::spawn_blocking(move || storage.save(entry, &value))
        .await
        .context("Storage task failed")?
        .with_context(|| format!("Failed to save {}", entry))?;

    info!("Stored {} at {}", entry, location.display());
    Ok(())
}
