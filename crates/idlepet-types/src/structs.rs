//! Core entity structs for the Idlepet simulation.
//!
//! [`GameState`] is the single mutable record the engine owns. It is also
//! the persisted record: field names (camelCase) are the storage contract.
//! [`Snapshot`] is the read-only view published to the presentation layer.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::enums::Need;

// ---------------------------------------------------------------------------
// NeedLevels
// ---------------------------------------------------------------------------

/// One scalar per [`Need`].
///
/// Used both for the current need values (each in `[0, 1]`) and for the
/// per-second regeneration rates contributed by upgrades.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct NeedLevels {
    /// Hunger value.
    pub hunger: f64,
    /// Happiness value.
    pub happiness: f64,
    /// Energy value.
    pub energy: f64,
    /// Cleanliness value.
    pub cleanliness: f64,
}

impl NeedLevels {
    /// All four needs set to the same value.
    pub const fn uniform(value: f64) -> Self {
        Self {
            hunger: value,
            happiness: value,
            energy: value,
            cleanliness: value,
        }
    }

    /// Read the value for one need.
    pub const fn get(&self, need: Need) -> f64 {
        match need {
            Need::Hunger => self.hunger,
            Need::Happiness => self.happiness,
            Need::Energy => self.energy,
            Need::Cleanliness => self.cleanliness,
        }
    }

    /// Mutable access to the value for one need.
    pub const fn get_mut(&mut self, need: Need) -> &mut f64 {
        match need {
            Need::Hunger => &mut self.hunger,
            Need::Happiness => &mut self.happiness,
            Need::Energy => &mut self.energy,
            Need::Cleanliness => &mut self.cleanliness,
        }
    }

    /// Arithmetic mean of the four values.
    pub fn average(&self) -> f64 {
        (self.hunger + self.happiness + self.energy + self.cleanliness) / 4.0
    }
}

// ---------------------------------------------------------------------------
// GameState
// ---------------------------------------------------------------------------

/// The complete mutable state of one pet and its economy.
///
/// Owned exclusively by the game controller for the lifetime of a
/// session. Serialized verbatim as the persisted record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "bindings/")]
pub struct GameState {
    /// Display name, 1 to 16 characters.
    pub pet_name: String,
    /// Current currency balance. Fractional; displayed floored.
    pub coins: f64,
    /// Lifetime currency earned. Never decreases.
    pub coins_earned: f64,
    /// Currency generated per second of elapsed time.
    pub passive: f64,
    /// Currency granted per tap.
    pub click_power: f64,
    /// Current need values, each in `[0, 1]`.
    pub needs: NeedLevels,
    /// Per-second regeneration contributed by upgrades, per need.
    pub need_rates: NeedLevels,
    /// Care level derived from the needs; always at least 1.
    pub level: u32,
    /// Cumulative simulated milliseconds.
    #[ts(type = "number")]
    pub time_played_ms: u64,
    /// Wall-clock epoch milliseconds of the last simulation step.
    #[ts(type = "number")]
    pub last_tick_at: i64,
    /// Wall-clock epoch milliseconds of the last persistence.
    #[ts(type = "number")]
    pub last_save_at: i64,
    /// Owned count per upgrade id. One entry per catalog item.
    pub inventory: BTreeMap<String, u32>,
}

impl GameState {
    /// Owned count for an upgrade id (0 when absent).
    pub fn owned(&self, id: &str) -> u32 {
        self.inventory.get(id).copied().unwrap_or(0)
    }
}

// ---------------------------------------------------------------------------
// Snapshot
// ---------------------------------------------------------------------------

/// One row of the shop listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct ShopEntry {
    /// Upgrade id.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Display description.
    pub description: String,
    /// Price of the next unit at the current owned count.
    #[ts(type = "number")]
    pub price: u64,
    /// Units already owned.
    pub owned: u32,
}

/// Read-only view of the game published on every `render` notification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "bindings/")]
pub struct Snapshot {
    /// Pet display name.
    pub pet_name: String,
    /// Balance, floored.
    #[ts(type = "number")]
    pub coins: u64,
    /// Exact balance.
    pub coins_precise: f64,
    /// Lifetime earnings, floored.
    #[ts(type = "number")]
    pub coins_earned: u64,
    /// Currency per second.
    pub passive: f64,
    /// Currency per tap.
    pub click_power: f64,
    /// Current need values.
    pub needs: NeedLevels,
    /// Per-need regeneration rates.
    pub need_rates: NeedLevels,
    /// Derived care level.
    pub level: u32,
    /// Cumulative simulated milliseconds.
    #[ts(type = "number")]
    pub time_played_ms: u64,
    /// Epoch milliseconds of the last simulation step.
    #[ts(type = "number")]
    pub last_tick_at: i64,
    /// Shop listing in catalog order.
    pub shop: Vec<ShopEntry>,
}
