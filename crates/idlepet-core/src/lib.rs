//! Simulation and economy engine for the Idlepet simulation.
//!
//! Everything in this crate operates on an in-memory [`GameState`] without
//! touching I/O. The presentation layer, the persistence backend, and the
//! scheduling driver are collaborators reached through the
//! [`GameObserver`], [`StateStore`], and [`TimeSource`] seams.
//!
//! # Modules
//!
//! - [`catalog`] -- Static upgrade catalog and geometric pricing
//! - [`clock`] -- Wall-clock time sources ([`SystemClock`], [`ManualClock`])
//! - [`config`] -- YAML configuration ([`GameConfig`])
//! - [`controller`] -- Public operation surface ([`GameController`])
//! - [`notify`] -- Typed notifications and observer registration
//! - [`state`] -- Fresh-state construction, sanitization, level derivation
//! - [`stepper`] -- Time integration of currency and needs
//! - [`store`] -- Persistence contract ([`StateStore`], [`MemoryStore`])
//!
//! [`GameState`]: idlepet_types::GameState

pub mod catalog;
pub mod clock;
pub mod config;
pub mod controller;
pub mod notify;
pub mod state;
pub mod stepper;
pub mod store;

// Re-export primary types at crate root for convenience.
pub use catalog::{CATALOG, UpgradeDefinition, UpgradeEffect, find_upgrade, list_with_prices, price_of};
pub use clock::{ManualClock, SystemClock, TimeSource};
pub use config::{ConfigError, DriverConfig, EconomyConfig, GameConfig, LoggingConfig};
pub use controller::{GameController, OfflineReport};
pub use notify::{GameObserver, NoOpObserver, Notification};
pub use stepper::{StepOutcome, advance, catch_up_elapsed};
pub use store::{MemoryStore, StateStore};
