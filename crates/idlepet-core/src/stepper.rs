//! Time integration of currency and needs.
//!
//! [`advance`] expresses every change as an instantaneous rate times the
//! elapsed seconds, so the same function serves a 16 ms frame and an
//! eight-hour offline catch-up.
//!
//! # Order of operations
//!
//! 1. Passive income accrues to `coins` and `coins_earned`
//! 2. Natural decay is computed for the interval
//! 3. Each need moves by `rate * seconds - decay`, then is clamped to `[0, 1]`
//! 4. Level is re-derived from the updated needs
//! 5. `time_played_ms` grows by the elapsed milliseconds
//!
//! Clamping happens once, after regeneration and decay are combined. As a
//! consequence `advance(a)` followed by `advance(b)` differs from
//! `advance(a + b)` whenever a need would have hit a bound inside the
//! interval. Callers must not assume exact composability.

use idlepet_types::{GameState, Need};

use crate::config::EconomyConfig;
use crate::state::{clamp01, derive_level};

/// What one [`advance`] call produced.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct StepOutcome {
    /// Currency accrued during the interval.
    pub income: f64,
}

/// Advance the state by `elapsed_ms` of wall-clock time.
///
/// A zero interval leaves the state untouched.
#[allow(clippy::cast_precision_loss)]
pub fn advance(state: &mut GameState, elapsed_ms: u64, config: &EconomyConfig) -> StepOutcome {
    if elapsed_ms == 0 {
        return StepOutcome::default();
    }
    let seconds = elapsed_ms as f64 / 1000.0;

    // 1. Currency accrual
    let income = state.passive * seconds;
    state.coins += income;
    state.coins_earned += income;

    // 2. Natural decay
    let decay = config.decay_rate * seconds;

    // 3. Need update, clamped after combining regeneration and decay
    for need in Need::ALL {
        let regen = state.need_rates.get(need) * seconds;
        let value = state.needs.get_mut(need);
        *value = clamp01(*value + regen - decay);
    }

    // 4. Level recompute
    state.level = derive_level(&state.needs);

    // 5. Simulated time
    state.time_played_ms = state.time_played_ms.saturating_add(elapsed_ms);

    StepOutcome { income }
}

/// Offline interval to simulate for a wall-clock gap.
///
/// Negative gaps (clock skew, garbage timestamps) yield 0; gaps longer
/// than `cap_ms` are cut to `cap_ms`.
pub fn catch_up_elapsed(gap_ms: i64, cap_ms: u64) -> u64 {
    u64::try_from(gap_ms).map_or(0, |gap| gap.min(cap_ms))
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use idlepet_types::NeedLevels;

    use super::*;
    use crate::state::new_state;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn zero_elapsed_is_a_no_op() {
        let config = EconomyConfig::default();
        let mut state = new_state(&config, 0);
        state.passive = 3.0;
        state.need_rates = NeedLevels::uniform(0.2);
        let before = state.clone();

        let outcome = advance(&mut state, 0, &config);
        assert_eq!(state, before);
        assert_eq!(outcome.income, 0.0);
    }

    #[test]
    fn passive_income_accrues_to_balance_and_lifetime() {
        let config = EconomyConfig::default();
        let mut state = new_state(&config, 0);
        state.passive = 0.5;

        let outcome = advance(&mut state, 10_000, &config);
        assert!(approx(outcome.income, 5.0));
        assert!(approx(state.coins, 5.0));
        assert!(approx(state.coins_earned, 5.0));
    }

    #[test]
    fn needs_decay_without_regeneration() {
        let config = EconomyConfig::default();
        let mut state = new_state(&config, 0);

        advance(&mut state, 10_000, &config);
        // 0.7 - 0.03 * 10
        assert!(approx(state.needs.hunger, 0.4));
        assert!(approx(state.needs.cleanliness, 0.4));
        assert_eq!(state.level, derive_level(&state.needs));
        assert_eq!(state.time_played_ms, 10_000);
    }

    #[test]
    fn needs_clamp_at_zero() {
        let config = EconomyConfig::default();
        let mut state = new_state(&config, 0);

        advance(&mut state, 3_600_000, &config);
        assert_eq!(state.needs, NeedLevels::uniform(0.0));
        assert_eq!(state.level, 1);
    }

    #[test]
    fn regeneration_clamps_at_one() {
        let config = EconomyConfig::default();
        let mut state = new_state(&config, 0);
        state.need_rates.energy = 0.3;

        advance(&mut state, 60_000, &config);
        assert_eq!(state.needs.energy, 1.0);
        assert_eq!(state.needs.hunger, 0.0);
    }

    #[test]
    fn regeneration_and_decay_combine_before_clamping() {
        let config = EconomyConfig::default();
        let mut state = new_state(&config, 0);
        state.needs.hunger = 1.0;
        state.need_rates.hunger = 0.03;

        // Regen exactly cancels decay: the value stays at the upper bound
        // instead of being clamped first and then decayed.
        advance(&mut state, 5_000, &config);
        assert!(approx(state.needs.hunger, 1.0));
    }

    #[test]
    fn split_intervals_match_only_approximately() {
        let config = EconomyConfig::default();
        // Net drift +0.02/s from 0.99: the whole run and the split run both
        // end at the upper bound, and coins agree up to float rounding.
        let mut whole = new_state(&config, 0);
        whole.needs.hunger = 0.99;
        whole.need_rates.hunger = 0.05;
        whole.passive = 0.7;
        let mut split = whole.clone();

        advance(&mut whole, 10_000, &config);
        advance(&mut split, 3_333, &config);
        advance(&mut split, 6_667, &config);

        assert_eq!(whole.needs.hunger, 1.0);
        assert_eq!(split.needs.hunger, 1.0);
        assert!(approx(whole.needs.energy, split.needs.energy));
        assert!(approx(whole.coins, split.coins));
        assert_eq!(whole.time_played_ms, split.time_played_ms);
    }

    #[test]
    fn rate_change_between_steps_shows_clamped_history() {
        let config = EconomyConfig::default();
        // A need parked at the floor loses the decay it "owed": once
        // regeneration starts, it climbs from 0, not from a negative value.
        let mut state = new_state(&config, 0);
        state.needs.hunger = 0.1;
        advance(&mut state, 10_000, &config);
        assert_eq!(state.needs.hunger, 0.0);

        state.need_rates.hunger = 0.1;
        advance(&mut state, 10_000, &config);
        // 0 + (0.1 - 0.03) * 10
        assert!(approx(state.needs.hunger, 0.7));
    }

    #[test]
    fn catch_up_is_capped_and_floored() {
        let cap = 8 * 3_600_000;
        assert_eq!(catch_up_elapsed(-5_000, cap), 0);
        assert_eq!(catch_up_elapsed(0, cap), 0);
        assert_eq!(catch_up_elapsed(60_000, cap), 60_000);
        assert_eq!(catch_up_elapsed(100 * 3_600_000, cap), cap);
        assert_eq!(catch_up_elapsed(i64::MAX, cap), cap);
    }
}
