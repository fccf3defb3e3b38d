//! Persistence contract.
//!
//! The engine sees storage only through [`StateStore`]. Both operations
//! are fail-open: a backend that cannot read reports "no record", and a
//! backend that cannot write drops the save. The game stays playable with
//! a broken backend at the cost of silent data loss; failures are only
//! visible in the logs.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use idlepet_types::GameState;
use tracing::warn;

/// Durable storage for a single persisted [`GameState`] record.
pub trait StateStore: Send {
    /// Read the persisted record, or `None` if there is none or it
    /// cannot be read.
    fn load(&self) -> Option<GameState>;

    /// Persist a record. Failures are swallowed.
    fn save(&self, record: &GameState);
}

/// In-memory store, shareable between a controller and a test.
///
/// Clones share the same slot. [`MemoryStore::set_failing`] simulates a
/// broken backend.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    slot: Arc<Mutex<Option<GameState>>>,
    failing: Arc<AtomicBool>,
}

impl MemoryStore {
    /// An empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// A store that already holds `record`.
    pub fn with_record(record: GameState) -> Self {
        let store = Self::default();
        if let Ok(mut slot) = store.slot.lock() {
            *slot = Some(record);
        }
        store
    }

    /// Make every subsequent load and save fail.
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    /// The record currently held, bypassing the failure switch.
    pub fn peek(&self) -> Option<GameState> {
        self.slot.lock().ok().and_then(|slot| slot.clone())
    }
}

impl StateStore for MemoryStore {
    fn load(&self) -> Option<GameState> {
        if self.failing.load(Ordering::SeqCst) {
            warn!("memory store load failed, starting without a record");
            return None;
        }
        self.peek()
    }

    fn save(&self, record: &GameState) {
        if self.failing.load(Ordering::SeqCst) {
            warn!("memory store save failed, record dropped");
            return;
        }
        match self.slot.lock() {
            Ok(mut slot) => *slot = Some(record.clone()),
            Err(e) => warn!(error = %e, "memory store lock poisoned, record dropped"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EconomyConfig;
    use crate::state::new_state;

    #[test]
    fn save_then_load_returns_the_record() {
        let store = MemoryStore::new();
        assert!(store.load().is_none());

        let record = new_state(&EconomyConfig::default(), 99);
        store.save(&record);
        assert_eq!(store.load(), Some(record));
    }

    #[test]
    fn failing_store_is_silent() {
        let record = new_state(&EconomyConfig::default(), 1);
        let store = MemoryStore::with_record(record.clone());
        store.set_failing(true);

        // Load reports no record and save drops the write, without errors.
        assert!(store.load().is_none());
        let mut newer = record.clone();
        newer.coins = 50.0;
        store.save(&newer);

        store.set_failing(false);
        assert_eq!(store.load(), Some(record));
    }
}
