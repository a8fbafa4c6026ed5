use anyhow::{Context, Result};
use std::path::PathBuf;
use std::time::Duration;
use tracing::info;

use crate::config::StorageConfig;
use crate::io::sweep_stale_temp_files;

pub async fn execute(config: StorageConfig, dir: Option<PathBuf>, min_age_secs: u64) -> Result<()> {
    let dir = dir.unwrap_or(config.config_dir);
    let min_age = Duration::from_secs(min_age_secs);

    let target = dir.clone();
    let removed = tokio::task::spawn_blocking(move || sweep_stale_temp_files(&target, min_age))
        .await
        .context("Sweep task failed")?
        .with_context(|| format!("Failed to sweep {}", dir.display()))?;

    for path in &removed {
        println!("{}", path.display());
    }

    info!("Removed {} stale staging files from {}", removed.len(), dir.display());
    Ok(())
}
