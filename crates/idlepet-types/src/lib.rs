//! Shared type definitions for the Idlepet simulation.
//!
//! This crate is the single source of truth for the data model the
//! engine operates on and the snapshot it hands to the presentation
//! layer. Types flow downstream to `TypeScript` via `ts-rs`.
//!
//! # Modules
//!
//! - [`enums`] -- Closed enumerations (needs, care actions)
//! - [`structs`] -- Game state, need levels, render snapshot, shop entries

pub mod enums;
pub mod structs;

// Re-export all public types at crate root for convenience.
pub use enums::{CareAction, Need, ParseCareActionError};
pub use structs::{GameState, NeedLevels, ShopEntry, Snapshot};
