//! JSON file store for the persisted game record.
//!
//! Writes go to a sibling temp file first and are renamed into place, so
//! a crash mid-write leaves the previous save intact.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use idlepet_core::StateStore;
use idlepet_types::GameState;
use tracing::{debug, warn};

use crate::error::StoreError;

/// Persists the game record as pretty-printed JSON at a fixed path.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// A store backed by the file at `path`. Nothing is touched until the
    /// first load or save.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the save file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self.path.file_name().map(std::ffi::OsStr::to_os_string).unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    fn io_error(&self, source: std::io::Error) -> StoreError {
        StoreError::Io {
            path: self.path.clone(),
            source,
        }
    }

    /// Read the record.
    ///
    /// Returns `Ok(None)` when no save file exists yet.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Io`] if the file exists but cannot be read,
    /// or [`StoreError::Serialization`] if it is not a valid record.
    pub fn try_load(&self) -> Result<Option<GameState>, StoreError> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(self.io_error(e)),
        };
        let record = serde_json::from_str(&contents)?;
        Ok(Some(record))
    }

    /// Write the record atomically.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Serialization`] if the record cannot be
    /// encoded, or [`StoreError::Io`] if the file cannot be written.
    pub fn try_save(&self, record: &GameState) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(record)?;
        if let Some(dir) = self.path.parent()
            && !dir.as_os_str().is_empty()
        {
            fs::create_dir_all(dir).map_err(|e| self.io_error(e))?;
        }
        let temp = self.temp_path();
        fs::write(&temp, json).map_err(|e| self.io_error(e))?;
        fs::rename(&temp, &self.path).map_err(|e| self.io_error(e))?;
        Ok(())
    }
}

impl StateStore for JsonFileStore {
    fn load(&self) -> Option<GameState> {
        match self.try_load() {
            Ok(record) => {
                debug!(path = %self.path.display(), found = record.is_some(), "Save file read");
                record
            }
            Err(e) => {
                warn!(error = %e, "Could not load save file, starting without a record");
                None
            }
        }
    }

    fn save(&self, record: &GameState) {
        if let Err(e) = self.try_save(record) {
            warn!(error = %e, "Could not write save file, save skipped");
        }
    }
}
