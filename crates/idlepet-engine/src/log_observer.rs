//! Observer that forwards game notifications to the tracing log.
//!
//! Render snapshots arrive every frame, so they only show at `trace`.

use idlepet_core::{GameObserver, Notification};
use tracing::{debug, info, trace};

/// Logs every notification the controller publishes.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogObserver;

impl GameObserver for LogObserver {
    fn on_notify(&mut self, notification: &Notification) {
        match notification {
            Notification::Render(snapshot) => trace!(
                coins = snapshot.coins,
                level = snapshot.level,
                time_played_ms = snapshot.time_played_ms,
                "render"
            ),
            Notification::Tap { gain } => debug!(gain, "tap"),
            Notification::Toast(message) => info!(%message, "toast"),
        }
    }
}
