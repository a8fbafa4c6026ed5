use anyhow::{Context, Result};
use std::path::PathBuf;
use tracing::{debug, info};

use crate::cli::read_input;
use crate::io::write_file_safe;

pub async fn execute(path: PathBuf, content: Option<String>) -> Result<()> {
    let content = match content {
        Some(text) if text != "-" => text,
        _ => {
            debug!("Reading content from stdin");
            read_input(None).await?
        }
    };

    write_file_safe(&path, &content)
        .await
        .with_context(|| format!("Failed to write {}", path.display()))?;

    info!("Write completed successfully");
    Ok(())
}
