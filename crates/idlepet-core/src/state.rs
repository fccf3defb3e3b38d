//! Construction and normalization of [`GameState`] records.
//!
//! - [`new_state`] builds the default state of a fresh game.
//! - [`sanitize`] repairs a restored record so every invariant holds
//!   before the engine touches it.
//! - [`derive_level`] is the only place the care level is computed; the
//!   stored `level` is always its output, never set independently.

use std::collections::BTreeMap;

use idlepet_types::{GameState, Need, NeedLevels};

use crate::catalog::CATALOG;
use crate::config::EconomyConfig;

/// Clamp a need value into `[0, 1]`.
pub const fn clamp01(value: f64) -> f64 {
    value.clamp(0.0, 1.0)
}

/// Care level for a set of needs: `max(1, floor(10 * average))`.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn derive_level(needs: &NeedLevels) -> u32 {
    let raw = (needs.average() * 10.0).floor();
    (raw as u32).max(1)
}

/// Apply the naming rule: trim, cut to `max_name_chars` characters, and
/// fall back to the default name when nothing is left.
pub fn normalize_name(raw: &str, config: &EconomyConfig) -> String {
    let cut: String = raw.trim().chars().take(config.max_name_chars).collect();
    let cut = cut.trim_end();
    if cut.is_empty() {
        config.default_pet_name.clone()
    } else {
        cut.to_owned()
    }
}

/// A zero-count inventory entry for every catalog item.
pub fn empty_inventory() -> BTreeMap<String, u32> {
    CATALOG.iter().map(|def| (def.id.to_owned(), 0)).collect()
}

/// The state of a brand-new game created at `now_ms`.
pub fn new_state(config: &EconomyConfig, now_ms: i64) -> GameState {
    let needs = NeedLevels::uniform(clamp01(config.starting_need));
    GameState {
        pet_name: config.default_pet_name.clone(),
        coins: 0.0,
        coins_earned: 0.0,
        passive: 0.0,
        click_power: config.starting_click_power,
        needs,
        need_rates: NeedLevels::default(),
        level: derive_level(&needs),
        time_played_ms: 0,
        last_tick_at: now_ms,
        last_save_at: now_ms,
        inventory: empty_inventory(),
    }
}

/// Repair a restored record so every invariant holds.
///
/// - Needs are clamped to `[0, 1]`; non-finite needs reset to the starting value.
/// - Negative or non-finite currency, rates and passive income become 0.
/// - A negative or non-finite click power resets to the starting value.
/// - The inventory keeps exactly the catalog ids, missing ones at 0.
/// - The name passes through [`normalize_name`] and the level is re-derived.
pub fn sanitize(mut state: GameState, config: &EconomyConfig) -> GameState {
    for need in Need::ALL {
        let value = state.needs.get_mut(need);
        *value = if value.is_finite() {
            clamp01(*value)
        } else {
            clamp01(config.starting_need)
        };
        let rate = state.need_rates.get_mut(need);
        *rate = non_negative(*rate);
    }

    state.coins = non_negative(state.coins);
    state.coins_earned = non_negative(state.coins_earned);
    state.passive = non_negative(state.passive);
    if !state.click_power.is_finite() || state.click_power < 0.0 {
        state.click_power = config.starting_click_power;
    }

    let restored = std::mem::take(&mut state.inventory);
    state.inventory = CATALOG
        .iter()
        .map(|def| (def.id.to_owned(), restored.get(def.id).copied().unwrap_or(0)))
        .collect();

    state.pet_name = normalize_name(&state.pet_name, config);
    state.level = derive_level(&state.needs);
    state
}

fn non_negative(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;

    #[test]
    fn fresh_state_defaults() {
        let config = EconomyConfig::default();
        let state = new_state(&config, 1_234);
        assert_eq!(state.pet_name, "Sprout");
        assert_eq!(state.coins, 0.0);
        assert_eq!(state.passive, 0.0);
        assert_eq!(state.click_power, 1.0);
        assert_eq!(state.needs, NeedLevels::uniform(0.7));
        assert_eq!(state.level, 7);
        assert_eq!(state.last_tick_at, 1_234);
        assert_eq!(state.inventory.len(), CATALOG.len());
        assert!(state.inventory.values().all(|&n| n == 0));
    }

    #[test]
    fn level_for_uniform_point_eight_is_eight() {
        assert_eq!(derive_level(&NeedLevels::uniform(0.8)), 8);
    }

    #[test]
    fn level_never_below_one() {
        assert_eq!(derive_level(&NeedLevels::uniform(0.0)), 1);
        assert_eq!(derive_level(&NeedLevels::uniform(0.05)), 1);
    }

    #[test]
    fn level_caps_at_ten_when_full() {
        assert_eq!(derive_level(&NeedLevels::uniform(1.0)), 10);
    }

    #[test]
    fn name_is_trimmed_and_cut() {
        let config = EconomyConfig::default();
        assert_eq!(normalize_name("  Biscuit  ", &config), "Biscuit");
        assert_eq!(
            normalize_name("AbcdefghijklmnopQRSTUV", &config),
            "Abcdefghijklmnop"
        );
        assert_eq!(normalize_name("", &config), "Sprout");
        assert_eq!(normalize_name("     ", &config), "Sprout");
    }

    #[test]
    fn name_cut_counts_characters_not_bytes() {
        let config = EconomyConfig::default();
        let name = "ü".repeat(20);
        assert_eq!(normalize_name(&name, &config).chars().count(), 16);
    }

    #[test]
    fn sanitize_repairs_garbage() {
        let config = EconomyConfig::default();
        let mut state = new_state(&config, 0);
        state.needs = NeedLevels {
            hunger: 3.0,
            happiness: -1.0,
            energy: f64::NAN,
            cleanliness: 0.5,
        };
        state.need_rates.hunger = f64::INFINITY;
        state.coins = -5.0;
        state.click_power = f64::NAN;
        state.level = 99;
        state.inventory.clear();
        state.inventory.insert("retired".to_owned(), 3);
        state.inventory.insert("click1".to_owned(), 2);
        state.pet_name = String::new();

        let state = sanitize(state, &config);
        assert_eq!(state.needs.hunger, 1.0);
        assert_eq!(state.needs.happiness, 0.0);
        assert_eq!(state.needs.energy, 0.7);
        assert_eq!(state.need_rates.hunger, 0.0);
        assert_eq!(state.coins, 0.0);
        assert_eq!(state.click_power, 1.0);
        assert_eq!(state.level, derive_level(&state.needs));
        assert_eq!(state.inventory.len(), CATALOG.len());
        assert_eq!(state.owned("click1"), 2);
        assert!(!state.inventory.contains_key("retired"));
        assert_eq!(state.pet_name, "Sprout");
    }

    #[test]
    fn sanitize_keeps_valid_state_unchanged() {
        let config = EconomyConfig::default();
        let state = new_state(&config, 42);
        assert_eq!(sanitize(state.clone(), &config), state);
    }
}
