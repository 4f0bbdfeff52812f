//! Observer registry - synchronous fan-out of schedule events
//!
//! The store emits an event after each successful mutation; the registry
//! delivers it to every registered observer in registration order. The
//! whole path is single-threaded and synchronous: observers run after the
//! store has already committed its change, so their side effects cannot
//! leave the schedule half-mutated.

use tracing::debug;

use super::types::ScheduleEvent;

/// Receives schedule events for side effects such as logging
pub trait ScheduleObserver {
    fn notify(&self, event: &ScheduleEvent);
}

/// Registry of observers interested in schedule activity
pub struct ObserverRegistry {
    observers: Vec<Box<dyn ScheduleObserver>>,
}

impl ObserverRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self { observers: Vec::new() }
    }

    /// Register an observer; it receives every event emitted afterwards
    pub fn register(&mut self, observer: Box<dyn ScheduleObserver>) {
        debug!(count = self.observers.len() + 1, "ObserverRegistry::register");
        self.observers.push(observer);
    }

    /// Emit an event to all observers
    ///
    /// Fire-and-forget: having no observers is fine, the event is dropped.
    pub fn emit(&self, event: &ScheduleEvent) {
        debug!(event_type = event.event_type(), "ObserverRegistry::emit");
        for observer in &self.observers {
            observer.notify(event);
        }
    }

    /// Number of registered observers
    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }
}

impl Default for ObserverRegistry {
    fn default() -> Self {
        Self::new()
    }
}
