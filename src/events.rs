//! Change notification
//!
//! Writers publish a [`ChangeEvent`] after every successful mutation. Each
//! subscriber gets its own `mpsc` receiver, so a dashboard can drain pending
//! events and recompute once instead of polling the files.

use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::{Mutex, PoisonError};

/// What changed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChangeEvent {
    Expenses,
    Milestones,
    Settings,
}

impl ChangeEvent {
    /// Whether this change can alter the dashboard summary
    pub fn affects_dashboard(&self) -> bool {
        matches!(self, ChangeEvent::Expenses | ChangeEvent::Settings)
    }
}

/// Fan-out publisher for change events
#[derive(Debug, Default)]
pub struct ChangeNotifier {
    subscribers: Mutex<Vec<Sender<ChangeEvent>>>,
}

impl ChangeNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new subscriber
    pub fn subscribe(&self) -> Receiver<ChangeEvent> {
        let (sender, receiver) = mpsc::channel();
        self.subscribers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(sender);
        receiver
    }

    /// Send an event to every live subscriber
    ///
    /// Subscribers whose receiver has been dropped are removed.
    pub fn publish(&self, event: ChangeEvent) {
        let mut subscribers = self
            .subscribers
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        subscribers.retain(|sender| sender.send(event).is_ok());
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_subscriber_receives_event() {
        let notifier = ChangeNotifier::new();
        let first = notifier.subscribe();
        let second = notifier.subscribe();

        notifier.publish(ChangeEvent::Expenses);

        assert_eq!(first.try_recv(), Ok(ChangeEvent::Expenses));
        assert_eq!(second.try_recv(), Ok(ChangeEvent::Expenses));
        assert!(first.try_recv().is_err());
    }

    #[test]
    fn test_dropped_subscribers_are_pruned() {
        let notifier = ChangeNotifier::new();
        let kept = notifier.subscribe();
        drop(notifier.subscribe());
        assert_eq!(notifier.subscriber_count(), 2);

        notifier.publish(ChangeEvent::Settings);

        assert_eq!(notifier.subscriber_count(), 1);
        assert_eq!(kept.try_recv(), Ok(ChangeEvent::Settings));
    }

    #[test]
    fn test_publish_without_subscribers() {
        let notifier = ChangeNotifier::new();
        notifier.publish(ChangeEvent::Milestones);
        assert_eq!(notifier.subscriber_count(), 0);
    }

    #[test]
    fn test_affects_dashboard() {
        assert!(ChangeEvent::Expenses.affects_dashboard());
        assert!(ChangeEvent::Settings.affects_dashboard());
        assert!(!ChangeEvent::Milestones.affects_dashboard());
    }
}
