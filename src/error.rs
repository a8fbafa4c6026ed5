use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("File not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("I/O error on {}: {source}", path.display())]
    Io { source: io::Error, path: PathBuf },

    #[error("Invalid destination path: {}", path.display())]
    InvalidPath { path: PathBuf },

    #[error("Invalid JSON in {}: {source}", path.display())]
    Serialization {
        source: serde_json::Error,
        path: PathBuf,
    },
}

pub type Result<T> = std::result::Result<T, StorageError>;

impl StorageError {
    /// Wraps an I/O error, keeping `NotFound` distinguishable.
    pub fn from_io(source: io::Error, path: &Path) -> Self {
        if source.kind() == io::ErrorKind::NotFound {
            StorageError::NotFound {
                path: path.to_path_buf(),
            }
        } else {
            StorageError::Io {
                source,
                path: path.to_path_buf(),
            }
        }
    }

    pub fn io(source: io::Error, path: &Path) -> Self {
        StorageError::Io {
            source,
            path: path.to_path_buf(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, StorageError::NotFound { .. })
    }

    pub fn path(&self) -> &Path {
        match self {
            StorageError::NotFound { path }
            | StorageError::Io { path, .. }
            | StorageError::InvalidPath { path }
            | StorageError::Serialization { path, .. } => path,
        }
    }
}
