//! Typed notifications delivered to the presentation layer.
//!
//! The topic set is closed: `render`, `tap`, and `toast`. Observers are
//! registered on the controller and called synchronously, in registration
//! order, from inside the operation that produced the notification.

use idlepet_types::Snapshot;

/// A state-change notification.
#[derive(Debug, Clone, PartialEq)]
pub enum Notification {
    /// Full read-only view of the game after an operation.
    Render(Box<Snapshot>),
    /// Currency gained by one tap.
    Tap {
        /// Amount added to the balance.
        gain: f64,
    },
    /// Short message announcing a purchase.
    Toast(String),
}

impl Notification {
    /// The topic name this notification is published under.
    pub const fn topic(&self) -> &'static str {
        match self {
            Self::Render(_) => "render",
            Self::Tap { .. } => "tap",
            Self::Toast(_) => "toast",
        }
    }
}

/// Receives notifications from the controller.
pub trait GameObserver: Send {
    /// Called once per published notification.
    fn on_notify(&mut self, notification: &Notification);
}

impl<F> GameObserver for F
where
    F: FnMut(&Notification) + Send,
{
    fn on_notify(&mut self, notification: &Notification) {
        self(notification);
    }
}

/// An observer that ignores everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpObserver;

impl GameObserver for NoOpObserver {
    fn on_notify(&mut self, _notification: &Notification) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn topics_are_stable() {
        assert_eq!(Notification::Tap { gain: 1.0 }.topic(), "tap");
        assert_eq!(Notification::Toast("+Tap".to_owned()).topic(), "toast");
    }

    #[test]
    fn closures_are_observers() {
        let mut seen = Vec::new();
        {
            let mut observer = |n: &Notification| seen.push(n.topic());
            observer.on_notify(&Notification::Tap { gain: 2.0 });
        }
        assert_eq!(seen, vec!["tap"]);
    }
}
