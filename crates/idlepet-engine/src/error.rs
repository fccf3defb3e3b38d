//! Error types for the engine binary.
//!
//! [`EngineError`] is the top-level error type that wraps every failure
//! mode during startup and the driver loop. Gameplay operations never
//! fail, so everything here is configuration or terminal I/O.

/// Top-level error for the engine binary.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// Configuration loading failed.
    #[error("config error: {source}")]
    Config {
        /// The underlying config error.
        #[from]
        source: idlepet_core::ConfigError,
    },

    /// Reading commands or writing output failed.
    #[error("terminal I/O error: {source}")]
    Terminal {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },
}
