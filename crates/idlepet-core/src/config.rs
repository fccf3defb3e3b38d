//! Configuration loading and typed config structures for the Idlepet simulation.
//!
//! The canonical configuration lives in `idlepet-config.yaml` next to the
//! binary's working directory. Every field has a serde default equal to
//! the built-in game constants, so an empty file (or no file at all)
//! reproduces the standard game.

use std::path::Path;

use serde::Deserialize;

use idlepet_types::CareAction;

/// Environment variable that overrides `driver.save_path`.
pub const SAVE_PATH_ENV: &str = "IDLEPET_SAVE_PATH";

/// Environment variable that overrides `logging.level`.
pub const LOG_LEVEL_ENV: &str = "IDLEPET_LOG";

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("failed to read config file: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// Failed to parse YAML content.
    #[error("failed to parse config YAML: {source}")]
    Yaml {
        /// The underlying YAML parse error.
        source: serde_yml::Error,
    },
}

impl From<serde_yml::Error> for ConfigError {
    fn from(source: serde_yml::Error) -> Self {
        Self::Yaml { source }
    }
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct GameConfig {
    /// Simulation and economy tunables.
    #[serde(default)]
    pub economy: EconomyConfig,

    /// Scheduling driver settings.
    #[serde(default)]
    pub driver: DriverConfig,

    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl GameConfig {
    /// Load configuration from a YAML file at the given path.
    ///
    /// Environment variables override YAML values:
    /// - `IDLEPET_SAVE_PATH` overrides `driver.save_path`
    /// - `IDLEPET_LOG` overrides `logging.level`
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read, or
    /// [`ConfigError::Yaml`] if the content is not valid YAML.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::parse(&contents)
    }

    /// Parse configuration from a YAML string.
    ///
    /// An empty string yields the defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Yaml`] if the string is not valid YAML.
    pub fn parse(yaml: &str) -> Result<Self, ConfigError> {
        let mut config: Self = if yaml.trim().is_empty() {
            Self::default()
        } else {
            serde_yml::from_str(yaml)?
        };
        config.apply_env_overrides();
        Ok(config)
    }

    /// Apply environment variable overrides.
    pub fn apply_env_overrides(&mut self) {
        if let Ok(val) = std::env::var(SAVE_PATH_ENV) {
            self.driver.save_path = val;
        }
        if let Ok(val) = std::env::var(LOG_LEVEL_ENV) {
            self.logging.level = val;
        }
    }
}

/// Simulation and economy tunables.
///
/// Rates are per second of elapsed wall-clock time; need values and
/// boosts are on the `[0, 1]` scale.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct EconomyConfig {
    /// Natural decay subtracted from every need per second.
    #[serde(default = "default_decay_rate")]
    pub decay_rate: f64,

    /// Upper bound on the offline gap simulated at restore (milliseconds).
    #[serde(default = "default_offline_cap_ms")]
    pub offline_cap_ms: u64,

    /// Name used when a rename yields an empty string.
    #[serde(default = "default_pet_name")]
    pub default_pet_name: String,

    /// Maximum pet name length in characters.
    #[serde(default = "default_max_name_chars")]
    pub max_name_chars: usize,

    /// Value every need starts at in a fresh game.
    #[serde(default = "default_starting_need")]
    pub starting_need: f64,

    /// Currency per tap in a fresh game.
    #[serde(default = "default_starting_click_power")]
    pub starting_click_power: f64,

    /// Hunger restored by one feed.
    #[serde(default = "default_care_boost")]
    pub feed_boost: f64,

    /// Happiness restored by one play.
    #[serde(default = "default_care_boost")]
    pub play_boost: f64,

    /// Energy restored by one nap.
    #[serde(default = "default_care_boost")]
    pub nap_boost: f64,

    /// Cleanliness restored by one clean.
    #[serde(default = "default_clean_boost")]
    pub clean_boost: f64,
}

impl Default for EconomyConfig {
    fn default() -> Self {
        Self {
            decay_rate: default_decay_rate(),
            offline_cap_ms: default_offline_cap_ms(),
            default_pet_name: default_pet_name(),
            max_name_chars: default_max_name_chars(),
            starting_need: default_starting_need(),
            starting_click_power: default_starting_click_power(),
            feed_boost: default_care_boost(),
            play_boost: default_care_boost(),
            nap_boost: default_care_boost(),
            clean_boost: default_clean_boost(),
        }
    }
}

impl EconomyConfig {
    /// The instantaneous boost a care action applies to its need.
    pub const fn boost_for(&self, action: CareAction) -> f64 {
        match action {
            CareAction::Feed => self.feed_boost,
            CareAction::Play => self.play_boost,
            CareAction::Nap => self.nap_boost,
            CareAction::Clean => self.clean_boost,
        }
    }
}

/// Scheduling driver settings used by the headless engine.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DriverConfig {
    /// Milliseconds between `tick()` calls.
    #[serde(default = "default_tick_interval_ms")]
    pub tick_interval_ms: u64,

    /// Milliseconds between automatic saves.
    #[serde(default = "default_autosave_interval_ms")]
    pub autosave_interval_ms: u64,

    /// Path of the JSON save file.
    #[serde(default = "default_save_path")]
    pub save_path: String,
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            tick_interval_ms: default_tick_interval_ms(),
            autosave_interval_ms: default_autosave_interval_ms(),
            save_path: default_save_path(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Emit JSON lines instead of human-readable output.
    #[serde(default)]
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

// ---------------------------------------------------------------------------
// Default value functions
// ---------------------------------------------------------------------------

const fn default_decay_rate() -> f64 {
    0.03
}

const fn default_offline_cap_ms() -> u64 {
    8 * 60 * 60 * 1000
}

fn default_pet_name() -> String {
    "Sprout".to_owned()
}

const fn default_max_name_chars() -> usize {
    16
}

const fn default_starting_need() -> f64 {
    0.7
}

const fn default_starting_click_power() -> f64 {
    1.0
}

const fn default_care_boost() -> f64 {
    0.25
}

const fn default_clean_boost() -> f64 {
    0.3
}

const fn default_tick_interval_ms() -> u64 {
    16
}

const fn default_autosave_interval_ms() -> u64 {
    10_000
}

fn default_save_path() -> String {
    "idlepet-save.json".to_owned()
}

fn default_log_level() -> String {
    "info".to_owned()
}
