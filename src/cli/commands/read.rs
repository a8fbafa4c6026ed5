use anyhow::{Context, Result};
use std::io::Write;
use std::path::PathBuf;

use crate::io::read_file_safe;

pub async fn execute(path: PathBuf) -> Result<()> {
    let content = read_file_safe(&path)
        .await
        .with_context(|| format!("Failed to read {}", path.display()))?;

    let mut stdout = std::io::stdout().lock();
    stdout.write_all(content.as_bytes())?;
    stdout.flush()?;
    Ok(())
}
