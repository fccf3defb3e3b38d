//! Public operation surface of the engine.
//!
//! [`GameController`] owns the single [`GameState`] of a session and is
//! the only thing that mutates it. Every player operation mutates the
//! state immediately and publishes a `render` snapshot as its last
//! observable effect. [`GameController::tick`] is the per-frame update
//! driven by an external scheduler.
//!
//! Invalid input (unknown upgrade id, unknown care action, empty name)
//! and unaffordable purchases are resolved as silent no-ops or defaults.
//! Nothing here returns an error.

use idlepet_types::{CareAction, GameState, ShopEntry, Snapshot};
use tracing::{debug, info, trace};

use crate::catalog::{find_upgrade, list_with_prices, price_of};
use crate::clock::TimeSource;
use crate::config::EconomyConfig;
use crate::notify::{GameObserver, Notification};
use crate::state::{clamp01, derive_level, new_state, normalize_name, sanitize};
use crate::stepper::{advance, catch_up_elapsed};
use crate::store::StateStore;

/// Summary of the one-time offline catch-up performed at restore.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OfflineReport {
    /// Milliseconds actually simulated.
    pub elapsed_ms: u64,
    /// Whether the real gap exceeded the offline cap.
    pub capped: bool,
    /// Currency earned during the simulated gap.
    pub coins_gained: f64,
}

/// Owns the game state and exposes every game operation.
pub struct GameController {
    state: GameState,
    config: EconomyConfig,
    clock: Box<dyn TimeSource>,
    observers: Vec<Box<dyn GameObserver>>,
    offline: Option<OfflineReport>,
}

impl GameController {
    /// Start a fresh game at the clock's current time.
    pub fn new(config: EconomyConfig, clock: Box<dyn TimeSource>) -> Self {
        let state = new_state(&config, clock.now_ms());
        Self::assemble(state, config, clock, None)
    }

    /// Resume from an in-memory state without any offline catch-up.
    ///
    /// The state is sanitized first so every invariant holds.
    pub fn from_state(state: GameState, config: EconomyConfig, clock: Box<dyn TimeSource>) -> Self {
        let state = sanitize(state, &config);
        Self::assemble(state, config, clock, None)
    }

    /// Start from a persisted record, or fresh when there is none.
    ///
    /// With a record, the gap since its `last_tick_at` is clamped to
    /// `[0, offline_cap_ms]` and simulated in one step before anything
    /// else runs. `last_tick_at` is then moved to now so the first
    /// [`tick`](Self::tick) does not simulate the same gap again.
    pub fn restore(
        record: Option<GameState>,
        config: EconomyConfig,
        clock: Box<dyn TimeSource>,
    ) -> Self {
        let Some(record) = record else {
            info!("No persisted record, starting a fresh game");
            return Self::new(config, clock);
        };

        let now = clock.now_ms();
        let mut state = sanitize(record, &config);
        let gap = now.saturating_sub(state.last_tick_at);
        let elapsed_ms = catch_up_elapsed(gap, config.offline_cap_ms);
        let capped = u64::try_from(gap).is_ok_and(|g| g > config.offline_cap_ms);

        let outcome = advance(&mut state, elapsed_ms, &config);
        state.last_tick_at = now;

        let report = OfflineReport {
            elapsed_ms,
            capped,
            coins_gained: outcome.income,
        };
        info!(
            pet = %state.pet_name,
            gap_ms = gap,
            elapsed_ms,
            capped,
            coins_gained = outcome.income,
            "Restored persisted game with offline catch-up"
        );

        Self::assemble(state, config, clock, Some(report))
    }

    fn assemble(
        state: GameState,
        config: EconomyConfig,
        clock: Box<dyn TimeSource>,
        offline: Option<OfflineReport>,
    ) -> Self {
        Self {
            state,
            config,
            clock,
            observers: Vec::new(),
            offline,
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Register an observer for all notifications.
    pub fn subscribe(&mut self, observer: impl GameObserver + 'static) {
        self.observers.push(Box::new(observer));
    }

    /// Read-only view of the owned state.
    pub const fn state(&self) -> &GameState {
        &self.state
    }

    /// Economy tunables in effect.
    pub const fn config(&self) -> &EconomyConfig {
        &self.config
    }

    /// The offline catch-up performed at restore, if any.
    pub const fn offline_report(&self) -> Option<&OfflineReport> {
        self.offline.as_ref()
    }

    /// The shop listing at current ownership counts.
    pub fn shop(&self) -> Vec<ShopEntry> {
        list_with_prices(&self.state)
    }

    /// Build the read-only render snapshot.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn snapshot(&self) -> Snapshot {
        let s = &self.state;
        Snapshot {
            pet_name: s.pet_name.clone(),
            coins: s.coins.floor() as u64,
            coins_precise: s.coins,
            coins_earned: s.coins_earned.floor() as u64,
            passive: s.passive,
            click_power: s.click_power,
            needs: s.needs,
            need_rates: s.need_rates,
            level: s.level,
            time_played_ms: s.time_played_ms,
            last_tick_at: s.last_tick_at,
            shop: self.shop(),
        }
    }

    // =========================================================================
    // Operations
    // =========================================================================

    /// Per-frame update: simulate the time since the last tick.
    ///
    /// Does nothing when the clock has not moved forward.
    pub fn tick(&mut self) {
        let now = self.clock.now_ms();
        let dt = now.saturating_sub(self.state.last_tick_at);
        let Ok(elapsed_ms) = u64::try_from(dt) else {
            trace!(dt, "Clock moved backwards, tick skipped");
            return;
        };
        if elapsed_ms == 0 {
            return;
        }
        advance(&mut self.state, elapsed_ms, &self.config);
        self.state.last_tick_at = now;
        self.render();
    }

    /// Earn `click_power` currency.
    pub fn tap(&mut self) {
        let gain = self.state.click_power;
        self.state.coins += gain;
        self.state.coins_earned += gain;
        self.publish(&Notification::Tap { gain });
        self.render();
    }

    /// Apply one care action's boost to its need.
    pub fn act(&mut self, action: CareAction) {
        let boost = self.config.boost_for(action);
        let value = self.state.needs.get_mut(action.target());
        *value = clamp01(*value + boost);
        // Level is derived from needs; keep it in step with the boost.
        self.state.level = derive_level(&self.state.needs);
        self.render();
    }

    /// Apply a care action named by the presentation layer.
    ///
    /// Unknown names are ignored.
    pub fn act_named(&mut self, kind: &str) {
        match kind.parse::<CareAction>() {
            Ok(action) => self.act(action),
            Err(e) => debug!(error = %e, "Ignoring care action"),
        }
    }

    /// Buy one unit of an upgrade if it exists and is affordable.
    #[allow(clippy::cast_precision_loss)]
    pub fn buy(&mut self, id: &str) {
        let Some(definition) = find_upgrade(id) else {
            debug!(id, "Ignoring purchase of unknown upgrade");
            return;
        };
        let owned = self.state.owned(id);
        let price = price_of(definition, owned);
        if self.state.coins < price as f64 {
            debug!(id, price, coins = self.state.coins, "Purchase refused, not enough coins");
            return;
        }

        self.state.coins -= price as f64;
        self.state
            .inventory
            .insert(definition.id.to_owned(), owned.saturating_add(1));
        definition.effect.apply(&mut self.state);

        info!(id, price, owned = owned.saturating_add(1), "Upgrade purchased");
        self.publish(&Notification::Toast(definition.effect.toast()));
        self.render();
    }

    /// Rename the pet, applying the length limit and default fallback.
    pub fn rename(&mut self, name: &str) {
        self.state.pet_name = normalize_name(name, &self.config);
        self.render();
    }

    /// Replace the state with a fresh game, keeping only the pet name.
    pub fn reset(&mut self) {
        let name = std::mem::take(&mut self.state.pet_name);
        let mut fresh = new_state(&self.config, self.clock.now_ms());
        fresh.pet_name = name;
        self.state = fresh;
        info!(pet = %self.state.pet_name, "Game reset");
        self.render();
    }

    // =========================================================================
    // Persistence
    // =========================================================================

    /// The record to persist right now.
    ///
    /// Both timestamps in the record are the current wall clock, so the
    /// next restore measures the gap since this save. The live state's
    /// `last_save_at` is updated; its `last_tick_at` is not.
    pub fn save_record(&mut self) -> GameState {
        let now = self.clock.now_ms();
        self.state.last_save_at = now;
        let mut record = self.state.clone();
        record.last_tick_at = now;
        record
    }

    /// Build the save record and hand it to `store`.
    pub fn save_to(&mut self, store: &dyn StateStore) {
        let record = self.save_record();
        store.save(&record);
        debug!(at = record.last_save_at, "Save record handed to store");
    }

    // =========================================================================
    // Notifications
    // =========================================================================

    fn publish(&mut self, notification: &Notification) {
        for observer in &mut self.observers {
            observer.on_notify(notification);
        }
    }

    fn render(&mut self) {
        if self.observers.is_empty() {
            return;
        }
        let snapshot = self.snapshot();
        self.publish(&Notification::Render(Box::new(snapshot)));
    }
}
