//! Atomic JSON file operations.
//!
//! Readers either see the previous file or the complete new one, never a
//! partial write. Every save stages its bytes in its own uniquely named
//! temp file, so concurrent writers never share one; there is no
//! cross-process locking and the last rename wins.

use antea_core::AnteaError;
use serde::{Serialize, de::DeserializeOwned};
use std::fs;
use std::io::{ErrorKind, Write as IoWrite};
use std::marker::PhantomData;
use std::path::{Path, PathBuf};
use tempfile::{Builder, NamedTempFile};
use thiserror::Error;

/// Errors that can occur during atomic JSON operations.
#[derive(Debug, Error)]
pub enum AtomicJsonError {
    /// File I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    /// Path has no file name to replace.
    #[error("Invalid path: {}", .0.display())]
    InvalidPath(PathBuf),
}

impl From<AtomicJsonError> for AnteaError {
    fn from(err: AtomicJsonError) -> Self {
        match err {
            AtomicJsonError::Io(e) => e.into(),
            AtomicJsonError::Json(e) => e.into(),
            AtomicJsonError::InvalidPath(path) => {
                AnteaError::io(format!("invalid path: {}", path.display()))
            }
        }
    }
}

/// A handle to a JSON file that is replaced atomically on save.
///
/// Provides:
/// - **Atomicity**: per-save tmp file in the same directory + rename
/// - **Durability**: explicit fsync before rename
/// - **Privacy**: owner-only permissions (0600) on Unix
pub struct AtomicJsonFile<T> {
    path: PathBuf,
    _phantom: PhantomData<T>,
}

impl<T> AtomicJsonFile<T>
where
    T: Serialize + DeserializeOwned,
{
    /// Creates a new atomic JSON file handle.
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            _phantom: PhantomData,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads and deserializes the file.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(T))`: Successfully loaded and deserialized
    /// - `Ok(None)`: File doesn't exist or is blank
    /// - `Err`: Failed to read or parse the file
    pub fn load(&self) -> Result<Option<T>, AtomicJsonError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        if content.trim().is_empty() {
            return Ok(None);
        }

        Ok(Some(serde_json::from_str(&content)?))
    }

    /// Serializes `data` and atomically replaces the file with it.
    ///
    /// On failure the temporary file is removed and the previous contents
    /// are left as they were.
    pub fn save(&self, data: &T) -> Result<(), AtomicJsonError> {
        let json = serde_json::to_string_pretty(data)?;

        let mut tmp_file = self.create_temp()?;
        tmp_file.write_all(json.as_bytes())?;
        tmp_file.as_file().sync_all()?;

        // Dropping the handle on error deletes the temp file
        tmp_file
            .persist(&self.path)
            .map_err(|e| AtomicJsonError::Io(e.error))?;

        Ok(())
    }

    /// Deletes the file. Deleting a missing file is not an error.
    pub fn remove(&self) -> Result<(), AtomicJsonError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    /// Creates `<dir>/.<name>.<random>.tmp`, owner-only on Unix.
    fn create_temp(&self) -> Result<NamedTempFile, AtomicJsonError> {
        let file_name = self
            .path
            .file_name()
            .ok_or_else(|| AtomicJsonError::InvalidPath(self.path.clone()))?;

        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        fs::create_dir_all(dir)?;

        let prefix = format!(".{}.", file_name.to_string_lossy());
        Ok(Builder::new()
            .prefix(&prefix)
            .suffix(".tmp")
            .tempfile_in(dir)?)
    }
}
