//! Static upgrade catalog and geometric pricing.
//!
//! The catalog is immutable process-wide data. Each entry carries a
//! closed [`UpgradeEffect`] that the purchase operation applies to the
//! game state exactly once per unit bought.
//!
//! Price of the next unit is `floor(base_price * price_growth ^ owned)`,
//! strictly increasing in `owned` for any `price_growth > 1`.

use idlepet_types::{GameState, Need, ShopEntry};

// ---------------------------------------------------------------------------
// UpgradeEffect
// ---------------------------------------------------------------------------

/// The permanent effect one purchased unit has on the game state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum UpgradeEffect {
    /// Adds `amount` per second of passive regeneration to one need.
    RateBoost {
        /// The need being regenerated.
        need: Need,
        /// Regeneration added per second.
        amount: f64,
    },
    /// Adds `amount` to the currency granted per tap.
    ClickBoost {
        /// Currency added per tap.
        amount: f64,
    },
    /// Adds `amount` to the passive currency earned per second.
    PassiveBoost {
        /// Currency added per second.
        amount: f64,
    },
}

impl UpgradeEffect {
    /// Apply this effect to the state once.
    pub fn apply(self, state: &mut GameState) {
        match self {
            Self::RateBoost { need, amount } => *state.need_rates.get_mut(need) += amount,
            Self::ClickBoost { amount } => state.click_power += amount,
            Self::PassiveBoost { amount } => state.passive += amount,
        }
    }

    /// Short toast message announcing a purchase of this category.
    pub fn toast(self) -> String {
        match self {
            Self::RateBoost { need, .. } => format!("+{need} care"),
            Self::ClickBoost { .. } => "+Tap".to_owned(),
            Self::PassiveBoost { .. } => "+Passive".to_owned(),
        }
    }
}

// ---------------------------------------------------------------------------
// UpgradeDefinition
// ---------------------------------------------------------------------------

/// One purchasable upgrade.
#[derive(Debug, Clone, PartialEq)]
pub struct UpgradeDefinition {
    /// Unique key, also used as the inventory key.
    pub id: &'static str,
    /// Display name.
    pub name: &'static str,
    /// Display description.
    pub description: &'static str,
    /// Price when none are owned.
    pub base_price: f64,
    /// Multiplier applied per unit owned.
    pub price_growth: f64,
    /// Effect of one unit.
    pub effect: UpgradeEffect,
}

// ---------------------------------------------------------------------------
// Catalog table
// ---------------------------------------------------------------------------

/// Every upgrade, in declaration (display) order.
pub static CATALOG: [UpgradeDefinition; 6] = [
    UpgradeDefinition {
        id: "autoFeeder",
        name: "Auto Feeder",
        description: "+0.3 hunger/s restore",
        base_price: 50.0,
        price_growth: 1.25,
        effect: UpgradeEffect::RateBoost {
            need: Need::Hunger,
            amount: 0.3,
        },
    },
    UpgradeDefinition {
        id: "toyDrone",
        name: "Toy Drone",
        description: "+0.3 happiness/s",
        base_price: 50.0,
        price_growth: 1.25,
        effect: UpgradeEffect::RateBoost {
            need: Need::Happiness,
            amount: 0.3,
        },
    },
    UpgradeDefinition {
        id: "solarBed",
        name: "Solar Bed",
        description: "+0.3 energy/s",
        base_price: 50.0,
        price_growth: 1.25,
        effect: UpgradeEffect::RateBoost {
            need: Need::Energy,
            amount: 0.3,
        },
    },
    UpgradeDefinition {
        id: "roomba",
        name: "Roomba",
        description: "+0.3 cleanliness/s",
        base_price: 50.0,
        price_growth: 1.25,
        effect: UpgradeEffect::RateBoost {
            need: Need::Cleanliness,
            amount: 0.3,
        },
    },
    UpgradeDefinition {
        id: "click1",
        name: "Finger Training",
        description: "+1 coin per tap",
        base_price: 20.0,
        price_growth: 1.3,
        effect: UpgradeEffect::ClickBoost { amount: 1.0 },
    },
    UpgradeDefinition {
        id: "passive1",
        name: "Piggy Bank",
        description: "+0.5 coins/s",
        base_price: 40.0,
        price_growth: 1.35,
        effect: UpgradeEffect::PassiveBoost { amount: 0.5 },
    },
];

/// Look up an upgrade by id.
pub fn find_upgrade(id: &str) -> Option<&'static UpgradeDefinition> {
    CATALOG.iter().find(|def| def.id == id)
}

/// Price of the next unit given how many are already owned.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn price_of(definition: &UpgradeDefinition, owned: u32) -> u64 {
    let raw = definition.base_price * definition.price_growth.powf(f64::from(owned));
    // Saturating float-to-int cast: absurd owned counts cap at u64::MAX.
    raw.floor() as u64
}

/// The shop listing for a state, in catalog order.
pub fn list_with_prices(state: &GameState) -> Vec<ShopEntry> {
    CATALOG
        .iter()
        .map(|def| {
            let owned = state.owned(def.id);
            ShopEntry {
                id: def.id.to_owned(),
                name: def.name.to_owned(),
                description: def.description.to_owned(),
                price: price_of(def, owned),
                owned,
            }
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
