use super::{ConfigEntry, ConfigStorage};
use crate::config::StorageConfig;
use crate::error::Result;
use crate::io::{atomic_write_to_file, read_from_file};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// Config storage backed by one JSON file per entry in a local directory.
#[derive(Clone, Debug)]
pub struct LocalConfigStorage {
    dir: PathBuf,
}

impl LocalConfigStorage {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn from_config(config: &StorageConfig) -> Self {
        Self::new(config.config_dir())
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn path_of(&self, entry: ConfigEntry) -> PathBuf {
        self.dir.join(entry.file_name())
    }
}

impl ConfigStorage for LocalConfigStorage {
    fn location(&self, entry: ConfigEntry) -> PathBuf {
        self.path_of(entry)
    }

    #[instrument(skip(self, content), fields(dir = %self.dir.display()))]
    fn save_raw(&self, entry: ConfigEntry, content: &str) -> Result<()> {
        let path = self.path_of(entry);
        atomic_write_to_file(content, &path)?;
        info!("Saved {} to {}", entry, path.display());
        Ok(())
    }

    #[instrument(skip(self), fields(dir = %self.dir.display()))]
    fn load_raw(&self, entry: ConfigEntry) -> Result<Option<String>> {
        let path = self.path_of(entry);
        match read_from_file(&path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.is_not_found() => {
                debug!("No {} stored at {}", entry, path.display());
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }
}
