pub mod args;
pub mod commands;

pub use args::{Args, Commands, EntryArg};

use anyhow::{Context, Result};
use std::io::Read;
use std::path::Path;

/// Reads `source`, or stdin when it is absent or '-'.
pub(crate) async fn read_input(source: Option<&Path>) -> Result<String> {
    match source {
        Some(path) if path != Path::new("-") => crate::io::read_file_safe(path)
            .await
            .with_context(|| format!("Failed to read input file: {}", path.display())),
        _ => tokio::task::spawn_blocking(|| -> Result<String> {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read from stdin")?;
            Ok(buffer)
        })
        .await
        .context("Stdin reader task failed")?,
    }
}
