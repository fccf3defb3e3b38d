//! Error types for the persistence layer.
//!
//! These errors never reach the game engine: the [`StateStore`] impl
//! logs and swallows them. They are surfaced only through the
//! `try_load` / `try_save` methods.
//!
//! [`StateStore`]: idlepet_core::StateStore

use std::path::PathBuf;

/// Errors that can occur while reading or writing the save file.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The save file could not be read or written.
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        /// File being accessed.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// The save file is not a valid record.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
