use crate::error::{Result, StorageError};
use regex::Regex;
use std::ffi::{OsStr, OsString};
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::LazyLock;
use std::time::{Duration, SystemTime};
use tempfile::Builder;
use tracing::{debug, info, instrument, warn};
use walkdir::WalkDir;

const STAGING_SUFFIX: &str = ".localconf.tmp";
const STAGING_RANDOM_LEN: usize = 6;
const MAX_FILE_NAME_LEN: usize = 255;

// "." + name + "." + random + suffix must fit in one path component
const MAX_STAGING_NAME_PART: usize =
    MAX_FILE_NAME_LEN - 2 - STAGING_RANDOM_LEN - STAGING_SUFFIX.len();

// `.<file name>.<6 random alphanumerics>.localconf.tmp`
static STAGING_FILE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\..+\.[A-Za-z0-9]{6}\.localconf\.tmp$").unwrap());

/// Writes `content` to `destination` so that readers see either the previous
/// file or the complete new one.
///
/// Missing parent directories are created first. The content is staged in a
/// sibling file and renamed into place; the staging file is removed on every
/// failure path.
///
/// # Errors
/// Returns `InvalidPath` if `destination` has no file name, and `Io` if the
/// destination is read-only or directory creation, staging, or the final
/// rename fails.
#[instrument(skip(content), fields(bytes = content.len()))]
pub fn atomic_write_to_file(content: &str, destination: &Path) -> Result<()> {
    let file_name = destination
        .file_name()
        .ok_or_else(|| StorageError::InvalidPath {
            path: destination.to_path_buf(),
        })?;

    let dir = match destination.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let existing = fs::metadata(destination).ok().filter(|m| m.is_file());
    if existing.as_ref().is_some_and(|m| m.permissions().readonly()) {
        return Err(StorageError::io(
            io::Error::new(io::ErrorKind::PermissionDenied, "destination is read-only"),
            destination,
        ));
    }

    fs::create_dir_all(dir).map_err(|e| StorageError::io(e, dir))?;

    let mut staging = Builder::new()
        .prefix(&staging_prefix(file_name))
        .suffix(STAGING_SUFFIX)
        .rand_bytes(STAGING_RANDOM_LEN)
        .tempfile_in(dir)
        .map_err(|e| StorageError::io(e, dir))?;

    debug!("Staging write in {}", staging.path().display());

    if let Err(e) = staging.write_all(content.as_bytes()) {
        return Err(StorageError::io(e, staging.path()));
    }
    if let Err(e) = staging.flush() {
        return Err(StorageError::io(e, staging.path()));
    }

    if let Some(metadata) = existing {
        staging
            .as_file()
            .set_permissions(metadata.permissions())
            .map_err(|e| StorageError::io(e, staging.path()))?;
    }

    // On failure the returned handle still owns the staging file and deletes it on drop
    staging
        .persist(destination)
        .map_err(|e| StorageError::io(e.error, destination))?;

    info!("Wrote {} bytes to {}", content.len(), destination.display());
    Ok(())
}

fn staging_prefix(file_name: &OsStr) -> OsString {
    let mut prefix = OsString::from(".");
    prefix.push(truncate_name(file_name));
    prefix.push(".");
    prefix
}

#[cfg(unix)]
fn truncate_name(name: &OsStr) -> OsString {
    use std::os::unix::ffi::OsStrExt;

    let bytes = name.as_bytes();
    let mut end = bytes.len().min(MAX_STAGING_NAME_PART);
    if let Some(text) = name.to_str() {
        while !text.is_char_boundary(end) {
            end -= 1;
        }
    }
    OsStr::from_bytes(&bytes[..end]).to_os_string()
}

#[cfg(not(unix))]
fn truncate_name(name: &OsStr) -> OsString {
    let text = name.to_string_lossy();
    let mut end = text.len().min(MAX_STAGING_NAME_PART);
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    OsString::from(&text[..end])
}

/// Reads the whole file at `source` as UTF-8.
///
/// # Errors
/// Returns `NotFound` if the file does not exist and `Io` for any other
/// failure, including content that is not valid UTF-8.
#[instrument]
pub fn read_from_file(source: &Path) -> Result<String> {
    let content = fs::read_to_string(source).map_err(|e| StorageError::from_io(e, source))?;
    debug!("Read {} bytes from {}", content.len(), source.display());
    Ok(content)
}

/// Async form of [`read_from_file`], run on tokio's blocking pool.
///
/// # Errors
/// Same as [`read_from_file`]; a failed blocking task is reported as `Io`.
pub async fn read_file_safe(path: &Path) -> Result<String> {
    let owned = path.to_path_buf();
    tokio::task::spawn_blocking(move || read_from_file(&owned))
        .await
        .map_err(|e| StorageError::io(io::Error::other(e), path))?
}

/// Async form of [`atomic_write_to_file`], run on tokio's blocking pool.
///
/// # Errors
/// Same as [`atomic_write_to_file`]; a failed blocking task is reported as `Io`.
pub async fn write_file_safe(path: &Path, content: &str) -> Result<()> {
    let owned = path.to_path_buf();
    let content = content.to_owned();
    tokio::task::spawn_blocking(move || atomic_write_to_file(&content, &owned))
        .await
        .map_err(|e| StorageError::io(io::Error::other(e), path))?
}

/// True for names produced by [`atomic_write_to_file`] for its staging files.
pub fn is_staging_file_name(name: &str) -> bool {
    STAGING_FILE_PATTERN.is_match(name)
}

/// Removes staging files left behind by interrupted writes.
///
/// Only files at least `min_age` old are removed so that writes still in
/// flight keep their staging file. Returns the removed paths, sorted.
///
/// Unreadable subdirectories and files that cannot be removed are logged and
/// skipped.
///
/// # Errors
/// Returns `Io` if `dir` itself cannot be read.
#[instrument]
pub fn sweep_stale_temp_files(dir: &Path, min_age: Duration) -> Result<Vec<PathBuf>> {
    if !dir.exists() {
        debug!("Nothing to sweep, {} does not exist", dir.display());
        return Ok(Vec::new());
    }

    let now = SystemTime::now();
    let mut removed = Vec::new();

    for entry in WalkDir::new(dir) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) if e.depth() == 0 => {
                let path = e.path().unwrap_or(dir).to_path_buf();
                return Err(StorageError::io(e.into(), &path));
            }
            Err(e) => {
                warn!("Skipping unreadable entry during sweep: {}", e);
                continue;
            }
        };

        if !entry.file_type().is_file() {
            continue;
        }

        let is_staging = is_staging_file_name(&entry.file_name().to_string_lossy());
        if !is_staging {
            continue;
        }

        let modified = entry
            .metadata()
            .ok()
            .and_then(|m| m.modified().ok())
            .unwrap_or(now);
        let age = now.duration_since(modified).unwrap_or_default();
        if age < min_age {
            debug!("Keeping recent staging file {}", entry.path().display());
            continue;
        }

        match fs::remove_file(entry.path()) {
            Ok(()) => {
                info!("Removed stale staging file {}", entry.path().display());
                removed.push(entry.into_path());
            }
            // Another sweeper or the writer itself got there first
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                warn!("Staging file vanished during sweep: {}", entry.path().display());
            }
            Err(e) => {
                warn!("Could not remove {}: {}", entry.path().display(), e);
            }
        }
    }

    removed.sort();
    Ok(removed)
}
